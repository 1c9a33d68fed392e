//! The structured issue type the preprocessor reports.
//!
//! Mirrors `ember_lexer::LexIssue` in shape (see that crate's module doc for
//! why): this crate doesn't know the source's file path, so it carries the
//! stable ID, template arguments, and excerpt coordinates and leaves final
//! `Diagnostic` rendering to `ember_source`.

use ember_diagnostic::{DiagnosticId, Severity};

#[derive(Clone, Debug)]
pub struct PreprocessIssue<'src> {
    pub id: DiagnosticId,
    pub args: Vec<String>,
    pub line: u32,
    pub column: usize,
    pub length: usize,
    pub line_data: &'src str,
}

impl<'src> PreprocessIssue<'src> {
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
