//! Immutable compiler configuration (spec.md §3 "CompilerOptions") and the
//! `(options, diagnostic sink)` pair every stage method threads through
//! (`CompilerMetadata`). Lives here rather than in the CLI binary crate
//! because `Source`'s own stage methods (`decode`/`preprocess`/`lex`) take
//! `&CompilerMetadata` directly.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ember_diagnostic::{Catalogue, DiagnosticSink};
use ember_encoding::{classify_whitespace, Encoding};
use ember_lexer_core::is_special_byte;

use crate::error::ContractError;

/// Upper bound on `-j`'s thread count, ported from the original
/// `compiler_options::max_count_of_threads`.
pub const MAX_THREAD_COUNT: u32 = 128;

/// Parsed, validated command configuration. Built incrementally (by a CLI
/// parser or in tests) then treated as read-only for the rest of a run.
#[derive(Clone, Debug, Default)]
pub struct CompilerOptions {
    help: bool,
    version: bool,
    thread_count: u32,
    input_files: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    forced_encoding: Option<Encoding>,
    macro_definitions: BTreeMap<String, Option<String>>,
}

impl CompilerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_help(&mut self, help: bool) {
        self.help = help;
    }

    pub fn set_version(&mut self, version: bool) {
        self.version = version;
    }

    /// 0 means "auto" (hardware concurrency, per the parallel driver);
    /// anything above `MAX_THREAD_COUNT` is clamped down.
    pub fn set_thread_count(&mut self, count: u32) {
        self.thread_count = count.min(MAX_THREAD_COUNT);
    }

    pub fn set_output_file(&mut self, path: impl Into<PathBuf>) {
        self.output_file = Some(path.into());
    }

    pub fn set_forced_encoding(&mut self, encoding: Encoding) {
        self.forced_encoding = Some(encoding);
    }

    /// Registers an input path, in the order given. Rejects a path already
    /// registered (spec.md §6: "Duplicate paths are rejected with an error").
    pub fn add_input(&mut self, path: impl Into<PathBuf>) -> Result<(), ContractError> {
        let path = path.into();
        if self.input_files.contains(&path) {
            return Err(ContractError::DuplicateInput(path.display().to_string()));
        }
        self.input_files.push(path);
        Ok(())
    }

    /// Registers a macro definition. Rejects an invalid name per spec.md §6
    /// ("Macro-name validity"): non-empty, with no byte that is whitespace
    /// or one of the lexer's special characters.
    pub fn add_macro_definition(
        &mut self,
        name: impl Into<String>,
        value: Option<String>,
    ) -> Result<(), ContractError> {
        let name = name.into();
        if !is_valid_macro_name(&name) {
            return Err(ContractError::InvalidMacroName(name));
        }
        self.macro_definitions.insert(name, value);
        Ok(())
    }

    #[must_use]
    pub fn help(&self) -> bool {
        self.help
    }

    #[must_use]
    pub fn version(&self) -> bool {
        self.version
    }

    #[must_use]
    pub fn thread_count(&self) -> u32 {
        self.thread_count
    }

    #[must_use]
    pub fn input_files(&self) -> &[PathBuf] {
        &self.input_files
    }

    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    #[must_use]
    pub fn forced_encoding(&self) -> Option<Encoding> {
        self.forced_encoding
    }

    #[must_use]
    pub fn macro_definitions(&self) -> &BTreeMap<String, Option<String>> {
        &self.macro_definitions
    }
}

fn is_valid_macro_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let bytes = name.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if classify_whitespace(&bytes[i..]).is_some() || is_special_byte(byte) {
            return false;
        }
    }
    true
}

/// The `(options, diagnostic sink)` pair passed through all stages
/// (spec.md §3). The sink is shared by reference across parallel workers.
///
/// Also carries the message catalogue: spec.md §9 ("Global process state")
/// asks for the catalogue to be modelled as an explicit dependency of
/// `CompilerMetadata` rather than a module-level global.
#[derive(Default)]
pub struct CompilerMetadata {
    options: CompilerOptions,
    sink: DiagnosticSink,
    catalogue: Catalogue,
}

impl CompilerMetadata {
    #[must_use]
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            sink: DiagnosticSink::new(),
            catalogue: Catalogue::builtin(),
        }
    }

    #[must_use]
    pub fn with_catalogue(options: CompilerOptions, catalogue: Catalogue) -> Self {
        Self {
            options,
            sink: DiagnosticSink::new(),
            catalogue,
        }
    }

    #[must_use]
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    #[must_use]
    pub fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_count_clamps_to_max() {
        let mut opts = CompilerOptions::new();
        opts.set_thread_count(9999);
        assert_eq!(opts.thread_count(), MAX_THREAD_COUNT);
    }

    #[test]
    fn duplicate_input_is_rejected() {
        let mut opts = CompilerOptions::new();
        opts.add_input("a.ember").unwrap();
        let err = opts.add_input("a.ember").unwrap_err();
        assert!(matches!(err, ContractError::DuplicateInput(_)));
    }

    #[test]
    fn macro_name_with_whitespace_is_rejected() {
        let mut opts = CompilerOptions::new();
        let err = opts.add_macro_definition("BAD NAME", None).unwrap_err();
        assert!(matches!(err, ContractError::InvalidMacroName(_)));
    }

    #[test]
    fn macro_name_with_special_byte_is_rejected() {
        let mut opts = CompilerOptions::new();
        assert!(opts.add_macro_definition("BAD+NAME", None).is_err());
    }

    #[test]
    fn empty_macro_name_is_rejected() {
        let mut opts = CompilerOptions::new();
        assert!(opts.add_macro_definition("", None).is_err());
    }

    #[test]
    fn valid_macro_definition_is_kept() {
        let mut opts = CompilerOptions::new();
        opts.add_macro_definition("VERSION", Some("2".to_string())).unwrap();
        assert_eq!(opts.macro_definitions().get("VERSION").unwrap(), &Some("2".to_string()));
    }
}
