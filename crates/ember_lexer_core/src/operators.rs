//! The single-character operator map and the complex (multi-character)
//! operator extension table of spec.md §4.6.

use crate::token::TokenKind;

/// Maps an ASCII byte to its single-character operator/punctuation kind,
/// per spec.md §4.6's `to_token_type` table. Returns `None` for a byte
/// outside that table (handled elsewhere as part of a string/char/comment
/// or as an identifier/digit byte).
#[must_use]
pub fn to_token_type(byte: u8) -> Option<TokenKind> {
    use TokenKind as T;
    Some(match byte {
        b'~' => T::bit_not,
        b'!' => T::exclamation,
        b'$' => T::dollar,
        b'%' => T::modulo,
        b'^' => T::bit_xor,
        b'&' => T::bit_and,
        b'*' => T::multiply,
        b'(' => T::paren_left,
        b')' => T::paren_right,
        b'-' => T::minus,
        b'+' => T::plus,
        b'=' => T::assign,
        b'|' => T::bit_or,
        b'{' => T::brace_left,
        b'[' => T::big_paren_left,
        b'}' => T::brace_right,
        b']' => T::big_paren_right,
        b':' => T::colon,
        b';' => T::semicolon,
        b'<' => T::less,
        b',' => T::comma,
        b'>' => T::greater,
        b'.' => T::dot,
        b'?' => T::question,
        b'/' => T::divide,
        _ => return None,
    })
}

/// The maximum number of extra bytes an operator token may absorb beyond
/// its first (`**=`, `<<=`, `>>=`).
pub const MAX_EXTENSION_DEPTH: usize = 2;

/// Given the kind accumulated so far and the next candidate byte, returns
/// the new, longer kind if a multi-character operator exists with that
/// continuation; `None` means the current kind does not extend with this
/// byte and the scanner should back up and stop.
#[must_use]
pub fn complex_token_type(current: TokenKind, next: u8) -> Option<TokenKind> {
    use TokenKind as T;
    match (current, next) {
        (T::exclamation, b'=') => Some(T::equal_not),
        (T::modulo, b'=') => Some(T::modulo_assign),
        (T::bit_xor, b'=') => Some(T::bit_xor_assign),
        (T::bit_and, b'=') => Some(T::bit_and_assign),
        (T::bit_and, b'&') => Some(T::logic_and),
        (T::multiply, b'=') => Some(T::multiply_assign),
        (T::multiply, b'*') => Some(T::exp),
        (T::exp, b'=') => Some(T::exp_assign),
        (T::minus, b'-') => Some(T::decrement),
        (T::minus, b'=') => Some(T::minus_assign),
        (T::minus, b'>') => Some(T::rightwards_arrow),
        (T::plus, b'+') => Some(T::increment),
        (T::plus, b'=') => Some(T::plus_assign),
        (T::plus, b'>') => Some(T::rightwards_double_arrow),
        (T::assign, b'=') => Some(T::equal),
        (T::bit_or, b'=') => Some(T::bit_or_assign),
        (T::bit_or, b'|') => Some(T::logic_or),
        (T::less, b'<') => Some(T::bit_shift_left),
        (T::bit_shift_left, b'=') => Some(T::bit_shift_left_assign),
        (T::greater, b'>') => Some(T::bit_shift_right),
        (T::bit_shift_right, b'=') => Some(T::bit_shift_right_assign),
        (T::divide, b'=') => Some(T::divide_assign),
        _ => None,
    }
}

/// Bytes that are "special" (potential operator/punctuation/string/char
/// markers or comment openers) in non-string, non-comment context.
#[must_use]
pub fn is_special_byte(byte: u8) -> bool {
    to_token_type(byte).is_some() || matches!(byte, b'"' | b'\'' | b'`' | b'@' | b'#' | b'\\')
}

/// Bytes that are special but never valid outside a string/char literal —
/// emitting diagnostic 2006 ("is an invalid token") when encountered bare.
#[must_use]
pub fn is_invalid_bare_byte(byte: u8) -> bool {
    matches!(byte, b'`' | b'@' | b'#' | b'\\')
}
