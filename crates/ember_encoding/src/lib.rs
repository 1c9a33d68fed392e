//! Byte-order-mark detection, UTF-8/16/32 conversion, and the EOL/whitespace
//! classifiers shared by the preprocessor and lexer.
//!
//! Everything here is a pure function over borrowed byte slices: detection and
//! classification never allocate, and the only owned output is the final
//! decoded `String` produced by [`decode_to_utf8`].

mod bom;
mod convert;
mod eol;

pub use bom::{detect_bom, Encoding};
pub use convert::{decode_to_utf8, encode_utf16, swap_u16, swap_u32, DecodeError, Endianness};
pub use eol::{classify_eol, classify_whitespace, utf8_char_width, Eol};

/// Returns the endianness of the host the process is running on.
///
/// Detected once via a `u16` round-trip rather than `cfg(target_endian)` so the
/// same code path is exercised on every platform the test suite runs on.
#[must_use]
pub fn host_endianness() -> Endianness {
    if 1u16.to_ne_bytes() == 1u16.to_le_bytes() {
        Endianness::Little
    } else {
        Endianness::Big
    }
}
