//! UTF-8/16/32 conversion and endianness handling.

use thiserror::Error;

use crate::bom::Encoding;

/// Byte order of the host or a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Endianness {
    Little,
    Big,
}

/// Failure converting a raw byte buffer into UTF-8 text.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DecodeError {
    #[error("byte length {len} is not a multiple of the {width}-byte code unit width")]
    OddByteLength { len: usize, width: usize },
    #[error("invalid UTF-8 byte sequence")]
    InvalidUtf8,
    #[error("invalid UTF-16 code unit sequence")]
    InvalidUtf16,
    #[error("invalid UTF-32 code point {0:#x}")]
    InvalidUtf32(u32),
}

/// Swaps the byte order of a `u16`.
#[must_use]
pub fn swap_u16(v: u16) -> u16 {
    v.swap_bytes()
}

/// Swaps the byte order of a `u32`.
#[must_use]
pub fn swap_u32(v: u32) -> u32 {
    v.swap_bytes()
}

/// Decodes `body` (the buffer with any BOM already stripped) to an owned
/// UTF-8 `String`, per the conversion rules of spec.md §4.4 step 4/5.
///
/// `encoding` of `None` is treated as UTF-8. `host` is the process's native
/// endianness, used to decide whether UTF-16/32 code units need swapping.
pub fn decode_to_utf8(
    body: &[u8],
    encoding: Encoding,
    host: Endianness,
) -> Result<String, DecodeError> {
    match encoding {
        Encoding::None | Encoding::Utf8 => {
            std::str::from_utf8(body)
                .map(str::to_owned)
                .map_err(|_| DecodeError::InvalidUtf8)
        }
        Encoding::Utf16Le | Encoding::Utf16Be => decode_utf16(body, encoding, host),
        Encoding::Utf32Le | Encoding::Utf32Be => decode_utf32(body, encoding, host),
    }
}

fn source_endianness(encoding: Encoding) -> Endianness {
    match encoding {
        Encoding::Utf16Le | Encoding::Utf32Le => Endianness::Little,
        Encoding::Utf16Be | Encoding::Utf32Be => Endianness::Big,
        Encoding::None | Encoding::Utf8 => Endianness::Little,
    }
}

fn decode_utf16(body: &[u8], encoding: Encoding, host: Endianness) -> Result<String, DecodeError> {
    if body.len() % 2 != 0 {
        return Err(DecodeError::OddByteLength {
            len: body.len(),
            width: 2,
        });
    }
    let source = source_endianness(encoding);
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            let raw = match source {
                Endianness::Little => u16::from_le_bytes([c[0], c[1]]),
                Endianness::Big => u16::from_be_bytes([c[0], c[1]]),
            };
            if source == host {
                raw
            } else {
                swap_u16(raw)
            }
        })
        .collect();
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| DecodeError::InvalidUtf16)
}

fn decode_utf32(body: &[u8], encoding: Encoding, host: Endianness) -> Result<String, DecodeError> {
    if body.len() % 4 != 0 {
        return Err(DecodeError::OddByteLength {
            len: body.len(),
            width: 4,
        });
    }
    let source = source_endianness(encoding);
    let mut out = String::with_capacity(body.len() / 4);
    for chunk in body.chunks_exact(4) {
        let raw = match source {
            Endianness::Little => u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
            Endianness::Big => u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
        };
        let value = if source == host { raw } else { swap_u32(raw) };
        let ch = char::from_u32(value).ok_or(DecodeError::InvalidUtf32(value))?;
        out.push(ch);
    }
    Ok(out)
}

/// Encodes `text` as a sequence of UTF-16 code units in `endianness` byte
/// order. Used by round-trip property tests.
#[must_use]
pub fn encode_utf16(text: &str, endianness: Endianness) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        let bytes = match endianness {
            Endianness::Little => unit.to_le_bytes(),
            Endianness::Big => unit.to_be_bytes(),
        };
        out.extend_from_slice(&bytes);
    }
    out
}
