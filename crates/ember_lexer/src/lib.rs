//! Sub-pass B of the lexer (spec.md §4.6): fragment classification over the
//! raw token stream `ember_lexer_core::RawScanner` produces. This is the
//! public entry point the rest of the pipeline (`ember_source`) calls; it
//! wires sub-pass A's scanner to sub-pass B's classifier and merges both
//! stages' diagnostics into a single, source-ordered list.

mod classify;
mod issue;
mod keywords;
mod numeric;

pub use issue::LexIssue;

use ember_diagnostic::{DiagnosticId, Severity};
use ember_lexer_core::{RawLexError, RawScanner, Token};

/// Runs both lexer sub-passes over a source's lines and returns the final
/// token stream together with every issue either sub-pass raised, ordered
/// by `(line, column)`.
///
/// `lines` is the decoded, preprocessed source split into `(line_number,
/// text)` pairs with line numbers as they appear after preprocessing (spec.md
/// §4.4's directive lines are already removed by the caller).
#[must_use]
pub fn lex_lines<'src>(lines: &[(u32, &'src str)]) -> (Vec<Token<'src>>, Vec<LexIssue<'src>>) {
    let (raw, raw_errors) = RawScanner::new().scan(lines);

    let mut issues: Vec<LexIssue<'src>> = raw_errors.into_iter().map(raw_error_to_issue).collect();
    let (tokens, classify_issues) = classify::classify(&raw);
    issues.extend(classify_issues);

    // Sub-pass A's errors and sub-pass B's errors are collected in two
    // separate passes over the line, so a naive concatenation would not
    // respect source order for a line that raises both kinds.
    issues.sort_by_key(|issue| (issue.line, issue.column));

    (tokens, issues)
}

fn raw_error_to_issue(error: RawLexError<'_>) -> LexIssue<'_> {
    match error {
        RawLexError::InvalidToken { line, column, line_data, byte } => {
            LexIssue::new(DiagnosticId::new(Severity::Error, 2006), line, column, 1, line_data)
                .with_arg((byte as char).to_string())
        }
        RawLexError::UnterminatedComment { line, column, line_data } => {
            LexIssue::new(DiagnosticId::new(Severity::Error, 2007), line, column, 1, line_data)
        }
        RawLexError::UnterminatedCharacter { line, column, line_data } => {
            LexIssue::new(DiagnosticId::new(Severity::Error, 2008), line, column, 1, line_data)
        }
        RawLexError::UnterminatedString { line, column, line_data } => {
            LexIssue::new(DiagnosticId::new(Severity::Error, 2009), line, column, 1, line_data)
        }
    }
}
