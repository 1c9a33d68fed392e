//! Stage 1 (spec.md §4.4): read the file, detect/validate the encoding, and
//! convert it to a single owned UTF-8 buffer.
//!
//! `ember_encoding::decode_to_utf8` already performs step 4's length-
//! divisibility assertion and the conversion itself, so this module is just
//! the BOM/forced-encoding bookkeeping around one call to it.

use std::path::Path;

use ember_diagnostic::{DiagnosticId, Severity};
use ember_encoding::{decode_to_utf8, detect_bom, host_endianness, Encoding};

use crate::diagnostics::report;
use crate::options::CompilerMetadata;

/// Runs the decode algorithm against `path`. Returns the decoded text on
/// success; `None` means the stage failed and diagnostics were pushed to
/// `meta`'s sink.
pub(crate) fn decode(path: &Path, meta: &CompilerMetadata) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => {
            report(meta, path, DiagnosticId::new(Severity::Error, 1000), &[]);
            return None;
        }
    };

    let (detected, bom_len) = detect_bom(&bytes);
    if let Some(forced) = meta.options().forced_encoding() {
        let normalize = |e: Encoding| if e == Encoding::None { Encoding::Utf8 } else { e };
        if normalize(detected) != normalize(forced) {
            report(meta, path, DiagnosticId::new(Severity::Error, 1002), &[forced.name()]);
            return None;
        }
    }

    let body = &bytes[bom_len..];
    match decode_to_utf8(body, detected, host_endianness()) {
        Ok(text) => Some(text),
        Err(_) => {
            let name = if detected == Encoding::None { Encoding::Utf8.name() } else { detected.name() };
            report(meta, path, DiagnosticId::new(Severity::Error, 1001), &[name]);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::options::CompilerOptions;

    fn write_temp(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ember_source_decode_{name}_{:?}.tmp", std::thread::current().id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn decodes_plain_utf8() {
        let path = write_temp("plain", b"let x = 0");
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let text = decode(&path, &meta).unwrap();
        assert_eq!(text, "let x = 0");
        assert!(meta.sink().is_empty());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_emits_1000() {
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let result = decode(Path::new("/nonexistent/ember_source_test/missing.ember"), &meta);
        assert!(result.is_none());
        assert_eq!(meta.sink().diagnostics()[0].id.code, 1000);
    }

    #[test]
    fn odd_length_utf16_emits_1001() {
        let path = write_temp("odd_utf16", &[0xFF, 0xFE, 0x00]);
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let result = decode(&path, &meta);
        assert!(result.is_none());
        assert_eq!(meta.sink().diagnostics()[0].id.code, 1001);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn forced_encoding_mismatch_emits_1002() {
        let path = write_temp("mismatch", b"plain");
        let mut opts = CompilerOptions::new();
        opts.set_forced_encoding(Encoding::Utf16Le);
        let meta = CompilerMetadata::new(opts);
        let result = decode(&path, &meta);
        assert!(result.is_none());
        assert_eq!(meta.sink().diagnostics()[0].id.code, 1002);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn bom_is_stripped_before_conversion() {
        let path = write_temp("bom", &[0xEF, 0xBB, 0xBF, b'o', b'k']);
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let text = decode(&path, &meta).unwrap();
        assert_eq!(text, "ok");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_decodes_to_empty_buffer() {
        let path = write_temp("empty", b"");
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let text = decode(&path, &meta).unwrap();
        assert_eq!(text, "");
        std::fs::remove_file(&path).unwrap();
    }
}
