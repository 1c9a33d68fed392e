//! Turns a [`ParsedArgs`] into a validated `ember_source::CompilerOptions`
//! (spec.md §6 "CLI surface"): resolves `-finput-encoding`'s spelling table,
//! and otherwise defers to `CompilerOptions`'s own constructors for
//! duplicate-input and macro-name validation.

use ember_encoding::Encoding;
use ember_source::CompilerOptions;

use crate::cli::ParsedArgs;
use crate::error::CliError;

/// Resolves one of spec.md §6's accepted `-finput-encoding` spellings
/// (case-insensitive) to an [`Encoding`]. An unrecognised spelling returns
/// [`CliError::UnknownEncoding`] carrying a suggestion for the closest
/// family when the string contains an `8`, `16`, or `32` digit marker.
pub(crate) fn parse_encoding_spelling(spelling: &str) -> Result<Encoding, CliError> {
    let lower = spelling.to_ascii_lowercase();
    let encoding = match lower.as_str() {
        "utf8" | "utf-8" | "u8" => Encoding::Utf8,
        "utf16" | "utf-16" | "u16" | "utf16le" | "utf-16le" | "u16le" => Encoding::Utf16Le,
        "utf16be" | "utf-16be" | "u16be" => Encoding::Utf16Be,
        "utf32" | "utf-32" | "u32" | "utf32le" | "utf-32le" | "u32le" => Encoding::Utf32Le,
        "utf32be" | "utf-32be" | "u32be" => Encoding::Utf32Be,
        _ => {
            let suggestion = if lower.contains("32") {
                Some("utf32".to_string())
            } else if lower.contains("16") {
                Some("utf16".to_string())
            } else if lower.contains('8') {
                Some("utf8".to_string())
            } else {
                None
            };
            return Err(CliError::UnknownEncoding {
                value: spelling.to_string(),
                suggestion,
            });
        }
    };
    Ok(encoding)
}

/// Builds a `CompilerOptions` from parsed arguments. Duplicate input paths
/// and invalid macro names surface as [`CliError::Options`] (wrapping
/// `ember_source::ContractError`), per spec.md §6.
pub fn build_options(parsed: &ParsedArgs) -> Result<CompilerOptions, CliError> {
    let mut options = CompilerOptions::new();
    options.set_help(parsed.help);
    options.set_version(parsed.version);

    if let Some(count) = parsed.thread_count {
        options.set_thread_count(count);
    }
    if let Some(output) = &parsed.output_file {
        options.set_output_file(output);
    }
    if let Some(spelling) = &parsed.forced_encoding {
        options.set_forced_encoding(parse_encoding_spelling(spelling)?);
    }
    for input in &parsed.inputs {
        options.add_input(input)?;
    }
    for (name, value) in &parsed.macro_definitions {
        options.add_macro_definition(name, value.clone())?;
    }

    Ok(options)
}
