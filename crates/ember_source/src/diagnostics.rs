//! Turns the path-less issue records from `ember_preprocess`/`ember_lexer`
//! (and the decoder's own file-level failures) into fully rendered
//! `Diagnostic`s and pushes them to the shared sink. Only this crate knows
//! a source's path, so only here can the `where` string (`<path>:<line>:<col>`)
//! be assembled.

use std::path::Path;

use ember_diagnostic::{render_excerpt, Diagnostic, DiagnosticId};

use crate::options::CompilerMetadata;

/// A file-level diagnostic with no line/column to point at (1000/1001/1002).
pub(crate) fn report(meta: &CompilerMetadata, path: &Path, id: DiagnosticId, args: &[&str]) {
    let what = meta.catalogue().render(id, args);
    let diag = Diagnostic::new(id, what).with_where(path.display().to_string());
    meta.sink().push(diag);
}

/// A line-pointing diagnostic carrying a rendered excerpt, shared by the
/// preprocessor's and lexer's issue types (both have the same shape).
pub(crate) fn report_excerpt(
    meta: &CompilerMetadata,
    path: &Path,
    id: DiagnosticId,
    args: &[String],
    line: u32,
    column: usize,
    length: usize,
    line_data: &str,
) {
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let what = meta.catalogue().render(id, &arg_refs);
    let excerpt = render_excerpt(line, line_data, column, length);
    let diag = Diagnostic::new(id, what)
        .with_where(format!("{}:{}:{}", path.display(), line, column + 1))
        .with_excerpt(excerpt);
    meta.sink().push(diag);
}
