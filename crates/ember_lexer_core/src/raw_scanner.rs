//! Sub-pass A: the coarse byte scan of spec.md §4.6.
//!
//! Produces a flat token vector per source: `none_hm` fragments awaiting
//! classification, resolved operator/punctuation tokens (via maximal
//! munch), `whitespace` sentinels (one per coalesced run, including run
//! boundaries), and closed `string`/`character` literal tokens. Numeric
//! literal classification, keyword lookup, and the dot-merge rule are
//! sub-pass B's job (`ember_lexer`), which consumes this vector.

use ember_encoding::{classify_whitespace, utf8_char_width};

use crate::cursor::Cursor;
use crate::operators::{complex_token_type, is_invalid_bare_byte, to_token_type, MAX_EXTENSION_DEPTH};
use crate::token::{Token, TokenKind};

/// A fatal condition that stops the scan: an invalid bare byte is
/// *recoverable* (scanning continues so later errors are also reported),
/// while an unterminated comment/string/character is not — the scanner has
/// no more input to resynchronise on.
#[derive(Clone, Debug)]
pub enum RawLexError<'src> {
    /// Diagnostic 2006: a special byte with no valid meaning outside a
    /// string/char/comment (backtick, `@`, `#`, bare backslash).
    InvalidToken {
        line: u32,
        column: usize,
        line_data: &'src str,
        byte: u8,
    },
    /// Diagnostic 2007.
    UnterminatedComment {
        line: u32,
        column: usize,
        line_data: &'src str,
    },
    /// Diagnostic 2008.
    UnterminatedCharacter {
        line: u32,
        column: usize,
        line_data: &'src str,
    },
    /// Diagnostic 2009.
    UnterminatedString {
        line: u32,
        column: usize,
        line_data: &'src str,
    },
}

impl<'src> RawLexError<'src> {
    /// Whether this error leaves the scanner unable to usefully continue.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RawLexError::InvalidToken { .. })
    }
}

struct HmRun {
    start_col: usize,
}

/// Carries sub-pass A's cross-line state: a coalesced whitespace flag, an
/// open multiline comment span, and an open string/character span (which
/// is always closed or reported within the same physical line it opened,
/// per the line-boundary resolution recorded in `SPEC_FULL.md`).
pub struct RawScanner<'src> {
    tokens: Vec<Token<'src>>,
    errors: Vec<RawLexError<'src>>,
    is_prev_whitespace: bool,
    multiline_comment_open_at: Option<(u32, usize, &'src str)>,
    fatal: bool,
}

impl<'src> Default for RawScanner<'src> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> RawScanner<'src> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            errors: Vec::new(),
            is_prev_whitespace: false,
            multiline_comment_open_at: None,
            fatal: false,
        }
    }

    /// Scans every line in order. Stops early if a fatal error (unterminated
    /// comment/string/character) is hit. Returns `(tokens, errors)`; the
    /// stage succeeds iff `errors` is empty.
    #[must_use]
    pub fn scan(mut self, lines: &[(u32, &'src str)]) -> (Vec<Token<'src>>, Vec<RawLexError<'src>>) {
        for &(line_no, text) in lines {
            if self.fatal {
                break;
            }
            self.scan_line(line_no, text);
        }
        if !self.fatal {
            if let Some((line, column, line_data)) = self.multiline_comment_open_at {
                self.errors.push(RawLexError::UnterminatedComment {
                    line,
                    column,
                    line_data,
                });
            }
        }
        (self.tokens, self.errors)
    }

    fn scan_line(&mut self, line_no: u32, text: &'src str) {
        let mut cursor = Cursor::new(text);
        let mut hm: Option<HmRun> = None;
        let mut string_open: Option<usize> = None;
        let mut character_open: Option<usize> = None;
        // Whitespace coalescing is scoped to a single physical line: the
        // preprocessor already stripped EOLs, and spec.md's own "end of
        // line: flush pending hm run" rule names no synthetic boundary
        // token, so a fresh line starts as if following non-whitespace.
        if self.multiline_comment_open_at.is_none() {
            self.is_prev_whitespace = false;
        }

        while !cursor.is_at_end() {
            if self.multiline_comment_open_at.is_some() {
                if cursor.current() == Some(b'*') && cursor.peek_at(1) == Some(b'/') {
                    cursor.advance(2);
                    self.multiline_comment_open_at = None;
                } else {
                    cursor.advance(1);
                }
                continue;
            }

            if let Some(open_col) = string_open {
                match cursor.current() {
                    Some(b'\\') => cursor.advance(2),
                    Some(b'"') => {
                        let end = cursor.position() + 1;
                        cursor.advance(1);
                        self.tokens.push(Token::new(
                            TokenKind::string,
                            line_no,
                            open_col,
                            cursor.slice(open_col, end),
                            text,
                        ));
                        string_open = None;
                    }
                    Some(_) => cursor.advance(1),
                    None => unreachable!("loop guard ensures a current byte"),
                }
                continue;
            }

            if let Some(open_col) = character_open {
                match cursor.current() {
                    Some(b'\\') => cursor.advance(2),
                    Some(b'\'') => {
                        let end = cursor.position() + 1;
                        cursor.advance(1);
                        self.tokens.push(Token::new(
                            TokenKind::character,
                            line_no,
                            open_col,
                            cursor.slice(open_col, end),
                            text,
                        ));
                        character_open = None;
                    }
                    Some(_) => cursor.advance(1),
                    None => unreachable!("loop guard ensures a current byte"),
                }
                continue;
            }

            let byte = match cursor.current() {
                Some(b) => b,
                None => unreachable!("loop guard ensures a current byte"),
            };

            if let Some(len) = classify_whitespace(cursor.rest()) {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                if !self.is_prev_whitespace {
                    // spec.md §4.6: "emit one synthetic whitespace token
                    // (line=col=-1 sentinel; data empty)" — these fields are
                    // u32/usize, so MAX stands in for -1 the way it does
                    // elsewhere in this workspace for an unsigned sentinel.
                    self.tokens.push(Token::new(TokenKind::whitespace, u32::MAX, usize::MAX, "", text));
                    self.is_prev_whitespace = true;
                }
                cursor.advance(len);
                continue;
            }

            if byte == b'/' && cursor.peek_at(1) == Some(b'*') {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                self.multiline_comment_open_at = Some((line_no, cursor.position(), text));
                cursor.advance(2);
                self.is_prev_whitespace = false;
                continue;
            }

            if byte == b'/' && cursor.peek_at(1) == Some(b'/') {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                break;
            }

            if byte == b'"' {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                string_open = Some(cursor.position());
                cursor.advance(1);
                self.is_prev_whitespace = false;
                continue;
            }

            if byte == b'\'' {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                character_open = Some(cursor.position());
                cursor.advance(1);
                self.is_prev_whitespace = false;
                continue;
            }

            if is_invalid_bare_byte(byte) {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                self.errors.push(RawLexError::InvalidToken {
                    line: line_no,
                    column: cursor.position(),
                    line_data: text,
                    byte,
                });
                cursor.advance(1);
                self.is_prev_whitespace = false;
                continue;
            }

            if let Some(base_kind) = to_token_type(byte) {
                Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());
                let start = cursor.position();
                cursor.advance(1);
                let mut kind = base_kind;
                if !kind.is_single_char_only() {
                    for _ in 0..MAX_EXTENSION_DEPTH {
                        let Some(next_byte) = cursor.current() else {
                            break;
                        };
                        let Some(extended) = complex_token_type(kind, next_byte) else {
                            break;
                        };
                        kind = extended;
                        cursor.advance(1);
                    }
                }
                let end = cursor.position();
                self.tokens.push(Token::new(kind, line_no, start, cursor.slice(start, end), text));
                self.is_prev_whitespace = false;
                continue;
            }

            // Ordinary byte: letters, digits, or a UTF-8 continuation/lead byte.
            if hm.is_none() {
                hm = Some(HmRun {
                    start_col: cursor.position(),
                });
            }
            let width = utf8_char_width(byte).unwrap_or(1);
            cursor.advance(width);
            self.is_prev_whitespace = false;
        }

        Self::flush_hm(&mut self.tokens, &mut hm, line_no, text, cursor.position());

        if let Some(open_col) = string_open {
            self.errors.push(RawLexError::UnterminatedString {
                line: line_no,
                column: open_col,
                line_data: text,
            });
            self.fatal = true;
            return;
        }
        if let Some(open_col) = character_open {
            self.errors.push(RawLexError::UnterminatedCharacter {
                line: line_no,
                column: open_col,
                line_data: text,
            });
            self.fatal = true;
        }
    }

    fn flush_hm(tokens: &mut Vec<Token<'src>>, hm: &mut Option<HmRun>, line_no: u32, text: &'src str, end_col: usize) {
        if let Some(run) = hm.take() {
            tokens.push(Token::new(TokenKind::none_hm, line_no, run.start_col, &text[run.start_col..end_col], text));
        }
    }
}
