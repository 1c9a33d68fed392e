//! Byte-order-mark detection.

/// The Unicode transformation format a source buffer is encoded in.
///
/// `None` means no BOM was detected; the caller treats the buffer as UTF-8
/// unless a forced encoding says otherwise.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Encoding {
    #[default]
    None,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Encoding {
    /// The code-unit width in bytes, or `1` for `Utf8`/`None`.
    #[must_use]
    pub fn code_unit_width(self) -> usize {
        match self {
            Encoding::None | Encoding::Utf8 => 1,
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
        }
    }

    /// A lowercase, hyphenated name suitable for diagnostic substitution
    /// (e.g. `%1%` in the "Failed to decode" templates).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Encoding::None => "none",
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Utf32Le => "utf-32le",
            Encoding::Utf32Be => "utf-32be",
        }
    }
}

/// Detects a BOM at the head of `buf`, returning the matched encoding and the
/// number of bytes the BOM occupies (0 when no BOM matched).
///
/// The UTF-32 tests run before the UTF-16 tests: both UTF-32 BOMs begin with
/// bytes that are also a valid UTF-16 BOM (`FF FE` / `FE FF`), so testing
/// UTF-16 first would shadow UTF-32 detection.
#[must_use]
pub fn detect_bom(buf: &[u8]) -> (Encoding, usize) {
    if buf.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
        return (Encoding::Utf32Le, 4);
    }
    if buf.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
        return (Encoding::Utf32Be, 4);
    }
    if buf.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return (Encoding::Utf8, 3);
    }
    if buf.starts_with(&[0xFF, 0xFE]) {
        return (Encoding::Utf16Le, 2);
    }
    if buf.starts_with(&[0xFE, 0xFF]) {
        return (Encoding::Utf16Be, 2);
    }
    (Encoding::None, 0)
}
