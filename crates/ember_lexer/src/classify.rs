//! Sub-pass B: fragment classification over the raw token vector produced
//! by `ember_lexer_core::RawScanner` (spec.md §4.6).

use ember_diagnostic::{DiagnosticId, Severity};
use ember_lexer_core::{Token, TokenKind};

use crate::issue::LexIssue;
use crate::keywords;
use crate::numeric;

/// Classifies every `none_hm` fragment (numeric literal or keyword vs.
/// plain identifier), applies the `.` dot-merge rule, and drops the
/// `whitespace` sentinels sub-pass A emitted to coalesce whitespace runs.
#[must_use]
pub(crate) fn classify<'src>(raw: &[Token<'src>]) -> (Vec<Token<'src>>, Vec<LexIssue<'src>>) {
    let mut issues = Vec::new();
    let mut out: Vec<Token<'src>> = Vec::with_capacity(raw.len());

    let mut i = 0usize;
    while i < raw.len() {
        let tok = raw[i];
        match tok.kind {
            TokenKind::none_hm => {
                if tok.data.as_bytes().first().is_some_and(u8::is_ascii_digit) {
                    let outcome = numeric::classify_leading_digit(&raw[i..]);
                    if let Some(issue) = outcome.issue {
                        issues.push(issue);
                    }
                    out.push(
                        Token {
                            kind: outcome.kind,
                            data: outcome.data,
                            ..tok
                        }
                        .with_postfix(outcome.postfix),
                    );
                    i += outcome.consumed;
                } else {
                    let kind = keywords::lookup(tok.data).unwrap_or(TokenKind::identifier);
                    out.push(Token { kind, ..tok });
                    i += 1;
                }
            }
            TokenKind::dot => {
                if let Some(consumed) = try_dot_merge(&mut out, raw, i, &mut issues) {
                    i += consumed;
                } else {
                    out.push(tok);
                    i += 1;
                }
            }
            _ => {
                out.push(tok);
                i += 1;
            }
        }
    }

    out.retain(|t| t.kind != TokenKind::whitespace);
    (out, issues)
}

/// Attempts spec.md §4.6's dot-merge rule for the `.` token at `raw[i]`.
/// `out`'s last pushed token is the "previous neighbour" the rule speaks
/// of. Returns the number of raw tokens (including the dot) folded into
/// `out`'s new last element, or `None` to leave the dot token untouched.
fn try_dot_merge<'src>(
    out: &mut Vec<Token<'src>>,
    raw: &[Token<'src>],
    i: usize,
    issues: &mut Vec<LexIssue<'src>>,
) -> Option<usize> {
    let prev = *out.last()?;
    if prev.kind != TokenKind::integer_dec {
        return None;
    }
    let dot = raw[i];
    let next = raw.get(i + 1).copied();

    match next {
        Some(next_tok) if next_tok.kind == TokenKind::none_hm => {
            let outcome = numeric::classify_decimal(&raw[i + 1..]);
            // `classify_decimal` always returns `integer_dec`; "come out as
            // integer_dec" additionally requires it to have actually
            // consumed at least one digit (an identifier like `toString`
            // trivially "classifies" to an empty decimal fragment
            // otherwise, which is not a fraction).
            if outcome.kind != TokenKind::integer_dec || outcome.data.is_empty() {
                issues.push(LexIssue::new(
                    DiagnosticId::new(Severity::Error, 2011),
                    dot.line,
                    dot.column,
                    dot.data.len(),
                    dot.line_data,
                ));
                out.push(dot);
                return Some(1);
            }
            if let Some(issue) = outcome.issue {
                issues.push(issue);
            }
            out.pop();
            let end = next_tok.column + outcome.data.len();
            let data = &dot.line_data[prev.column..end];
            out.push(
                Token {
                    kind: TokenKind::decimal,
                    data,
                    ..prev
                }
                .with_postfix(outcome.postfix),
            );
            Some(1 + outcome.consumed)
        }
        _ => {
            out.pop();
            let end = dot.column + dot.data.len();
            let data = &dot.line_data[prev.column..end];
            out.push(Token {
                kind: TokenKind::decimal,
                data,
                ..prev
            });
            Some(1)
        }
    }
}
