//! Directive parsing for a single physical line (spec.md §4.5 step 4).

use ember_diagnostic::{DiagnosticId, Severity};
use ember_encoding::classify_whitespace;

use crate::issue::PreprocessIssue;

/// Outcome of scanning one physical line already known to start (after
/// leading whitespace) with `#`.
pub(crate) struct DirectiveOutcome<'src> {
    pub issue: Option<PreprocessIssue<'src>>,
}

fn issue_at(code: u16, sev: Severity, line: u32, column: usize, length: usize, line_data: &str) -> PreprocessIssue<'_> {
    PreprocessIssue::new(DiagnosticId::new(sev, code), line, column, length, line_data)
}

/// Parses the directive starting at `hash_col` (the byte offset of `#`
/// within `line`). Directive lines are always dropped from the surviving
/// output by the caller, whatever this returns.
pub(crate) fn parse_directive(line_no: u32, line: &str, hash_col: usize) -> DirectiveOutcome<'_> {
    let bytes = line.as_bytes();
    let name_start = hash_col + 1;
    let mut name_end = name_start;
    while name_end < bytes.len() && bytes[name_end].is_ascii_alphabetic() {
        name_end += 1;
    }
    let name = &line[name_start..name_end];

    if name.is_empty() {
        return DirectiveOutcome {
            issue: Some(issue_at(1100, Severity::Error, line_no, hash_col, 1, line)),
        };
    }

    // The name must be immediately followed by whitespace or end-of-line;
    // anything else (a digit or symbol glued onto the letters) is a
    // malformed directive name.
    if name_end < bytes.len() && classify_whitespace(&bytes[name_end..]).is_none() {
        return DirectiveOutcome {
            issue: Some(issue_at(1101, Severity::Error, line_no, name_end, 1, line)),
        };
    }

    let mut arg_start = name_end;
    while let Some(len) = classify_whitespace(&bytes[arg_start..]) {
        arg_start += len;
    }
    let argument = if arg_start < line.len() { Some(&line[arg_start..]) } else { None };

    let issue = match name {
        "error" => Some(match argument {
            None => issue_at(1103, Severity::Error, line_no, hash_col, line.len() - hash_col, line),
            Some(arg) => {
                issue_at(1104, Severity::Error, line_no, arg_start, arg.len(), line).with_arg(arg.to_string())
            }
        }),
        "warning" => Some(match argument {
            None => issue_at(1100, Severity::Warning, line_no, hash_col, line.len() - hash_col, line),
            Some(arg) => {
                issue_at(1101, Severity::Warning, line_no, arg_start, arg.len(), line).with_arg(arg.to_string())
            }
        }),
        _ => Some(issue_at(1105, Severity::Error, line_no, name_start, name.len(), line)),
    };

    DirectiveOutcome { issue }
}
