//! Splits decoded source text into physical lines using the EOL classifier
//! of `ember_encoding` rather than a hardcoded `\n` split, per spec.md §4.5.

use ember_encoding::classify_eol;

/// Splits `text` into `(1-based line number, line text)` pairs with EOL
/// sequences stripped. A trailing line with no terminating EOL is included;
/// an empty buffer yields an empty list.
#[must_use]
pub fn split_physical_lines(text: &str) -> Vec<(u32, &str)> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut line_start = 0usize;
    let mut pos = 0usize;
    let mut line_no = 1u32;

    while pos < bytes.len() {
        if let Some(eol) = classify_eol(&bytes[pos..]) {
            lines.push((line_no, &text[line_start..pos]));
            pos += eol.len_utf8();
            line_start = pos;
            line_no += 1;
        } else {
            pos += 1;
        }
    }
    if line_start < text.len() {
        lines.push((line_no, &text[line_start..]));
    }
    lines
}
