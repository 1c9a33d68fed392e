//! Stage 2 of the pipeline (spec.md §4.5): a line-oriented directive
//! scanner. Splits decoded source text into physical lines, recognises
//! `#error`/`#warning`/unknown directives, and produces the surviving line
//! list the lexer consumes.

mod directive;
mod issue;
mod lines;

pub use issue::PreprocessIssue;

use ember_encoding::classify_whitespace;

/// Preprocesses one source's decoded text. Returns the surviving
/// `(original line number, text)` pairs — directive lines are never
/// included — together with every diagnostic raised. Stage success is
/// `!issues.iter().any(PreprocessIssue::is_error)`, per spec.md §4.5.
#[must_use]
pub fn preprocess(text: &str) -> (Vec<(u32, &str)>, Vec<PreprocessIssue<'_>>) {
    let mut surviving = Vec::new();
    let mut issues = Vec::new();

    for (line_no, line) in lines::split_physical_lines(text) {
        let bytes = line.as_bytes();
        let mut idx = 0usize;
        while let Some(len) = classify_whitespace(&bytes[idx..]) {
            idx += len;
        }

        if idx == bytes.len() || bytes[idx] != b'#' {
            surviving.push((line_no, line));
            continue;
        }

        tracing::trace!(line = line_no, "preprocessor directive");
        let outcome = directive::parse_directive(line_no, line, idx);
        issues.extend(outcome.issue);
        // Directive lines never survive into the post-preprocess line list,
        // whether they were well-formed, malformed, or just a warning.
    }

    (surviving, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_diagnostic::Severity;

    #[test]
    fn plain_lines_pass_through_unchanged() {
        let (lines, issues) = preprocess("let x = 0\nlet y = 1");
        assert!(issues.is_empty());
        assert_eq!(lines, vec![(1, "let x = 0"), (2, "let y = 1")]);
    }

    #[test]
    fn error_and_warning_mix_drops_directive_lines() {
        let (lines, issues) = preprocess("#warning deprecated\n#error bad\ncode");
        assert_eq!(lines, vec![(3, "code")]);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id.code, 1101);
        assert_eq!(issues[0].id.severity, Severity::Warning);
        assert_eq!(issues[0].args, vec!["deprecated".to_string()]);
        assert_eq!(issues[1].id.code, 1104);
        assert_eq!(issues[1].id.severity, Severity::Error);
        assert_eq!(issues[1].args, vec!["bad".to_string()]);
        assert!(issues.iter().any(PreprocessIssue::is_error));
    }

    #[test]
    fn unknown_directive_fails_stage() {
        let (lines, issues) = preprocess("#frobnicate x");
        assert!(lines.is_empty());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id.code, 1105);
        assert!(issues[0].is_error());
    }

    #[test]
    fn leading_whitespace_before_hash_is_still_a_directive() {
        let (lines, issues) = preprocess("   #error nope");
        assert!(lines.is_empty());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id.code, 1104);
    }

    #[test]
    fn blank_line_passes_through() {
        let (lines, issues) = preprocess("   \ncode");
        assert!(issues.is_empty());
        assert_eq!(lines, vec![(1, "   "), (2, "code")]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let (lines, issues) = preprocess("");
        assert!(lines.is_empty());
        assert!(issues.is_empty());
    }
}
