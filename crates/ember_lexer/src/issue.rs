//! The structured issue type sub-pass B (and the preprocessor) report.
//!
//! Neither this crate nor `ember_preprocess` knows the source's file path, so
//! neither can render a full [`ember_diagnostic::Diagnostic`] (spec.md §4.2's
//! `where` string is `<path>:<line>:<col>`). A `LexIssue` carries everything
//! else — the stable ID, template arguments, and excerpt coordinates — and
//! `ember_source` (which owns the path) finishes the job with the shared
//! message catalogue.

use ember_diagnostic::{DiagnosticId, Severity};

#[derive(Clone, Debug)]
pub struct LexIssue<'src> {
    pub id: DiagnosticId,
    pub args: Vec<String>,
    pub line: u32,
    pub column: usize,
    pub length: usize,
    pub line_data: &'src str,
}

impl<'src> LexIssue<'src> {
    #[must_use]
    pub fn new(id: DiagnosticId, line: u32, column: usize, length: usize, line_data: &'src str) -> Self {
        Self {
            id,
            args: Vec::new(),
            line,
            column,
            length,
            line_data,
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.id.severity == Severity::Error
    }
}
