//! The pure 3-line excerpt renderer of spec.md §4.2.

/// Renders the 3-line excerpt box for a diagnostic pointing at `line_data`
/// (the full physical line containing the offending span), a 0-based byte
/// `column` into that line, a caret `length`, and the 1-based `line_number`
/// for the gutter.
///
/// Tabs and other whitespace code points that expand to more than one
/// column are expanded to plain spaces in the printed line so the caret
/// line aligns visually; `column`/`length` are adjusted by the same
/// expansion so the carets land under the right characters.
#[must_use]
pub fn render_excerpt(line_number: u32, line_data: &str, column: usize, length: usize) -> String {
    let gutter = line_number.to_string();
    let gutter_width = gutter.len();
    let blank_gutter = " ".repeat(gutter_width);

    let (expanded_line, caret_col) = expand_whitespace(line_data, column);
    let caret_len = length.max(1);

    format!(
        "{blank} |\n{gutter} | {line}\n{blank} | {pad}{carets}",
        blank = blank_gutter,
        gutter = gutter,
        line = expanded_line,
        pad = " ".repeat(caret_col),
        carets = "^".repeat(caret_len),
    )
}

/// Expands tabs (to a 4-column stop) and other >1-column whitespace code
/// points to plain spaces, returning the expanded line together with the
/// expanded column offset corresponding to the original `column` byte
/// offset.
fn expand_whitespace(line: &str, column: usize) -> (String, usize) {
    const TAB_WIDTH: usize = 4;
    let mut out = String::with_capacity(line.len());
    let mut byte_pos = 0usize;
    let mut caret_col = 0usize;
    let mut expanded_col = 0usize;
    for ch in line.chars() {
        if byte_pos == column {
            caret_col = expanded_col;
        }
        let width = match ch {
            '\t' => {
                let pad = TAB_WIDTH - (expanded_col % TAB_WIDTH);
                out.push_str(&" ".repeat(pad));
                pad
            }
            other if other != ' ' && other.is_whitespace() => {
                out.push(' ');
                1
            }
            other => {
                out.push(other);
                1
            }
        };
        expanded_col += width;
        byte_pos += ch.len_utf8();
    }
    if byte_pos == column {
        caret_col = expanded_col;
    }
    (out, caret_col)
}
