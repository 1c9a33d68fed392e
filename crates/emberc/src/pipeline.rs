//! The pipeline façade (spec.md §4.9, C9): owns a `CompilerMetadata` and one
//! `Source` per input path, and exposes the per-stage and chained
//! parallel/sequential entry points — grounded on
//! `original_source/include/Dlink/compilation_pipeline.hpp`'s
//! `compilation_pipeline` class and `ori_compiler/src/pipeline.rs`'s
//! sequential early-return-per-stage pattern.

use std::io::{self, Write};

use ember_source::{CompilerMetadata, CompilerOptions, ContractError, Source};

use crate::driver::{self, threading_info};
use crate::dump::{dump_source, DumpOutput};
use crate::error::DriverError;

/// Owns every `Source` for one compilation run plus the shared
/// `CompilerMetadata` (options + diagnostic sink). Mirrors the original's
/// non-copyable, non-movable `compilation_pipeline`: Rust's ordinary move
/// semantics (no `Clone` derive) already forbid the copies the original's
/// deleted copy/move constructors rule out.
pub struct Pipeline {
    metadata: CompilerMetadata,
    sources: Vec<Source>,
}

impl Pipeline {
    /// Builds one `Source` per `options.input_files()`, in order. Fails
    /// with `ContractError::EmptyPath` if any input path is empty (a
    /// programmer/CLI-validation error, not a diagnostic, per spec.md §7).
    pub fn new(options: CompilerOptions) -> Result<Self, ContractError> {
        let sources = options
            .input_files()
            .iter()
            .map(|path| Source::new(path.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            metadata: CompilerMetadata::new(options),
            sources,
        })
    }

    #[must_use]
    pub fn metadata(&self) -> &CompilerMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    fn threading_info(&self) -> driver::ThreadingInfo {
        threading_info(self.sources.len(), self.metadata.options().thread_count())
    }

    /// Writes every diagnostic in the sink to `writer`, each followed by a
    /// blank line — the Rust equivalent of the original's
    /// `stream << to_string(message) << "\n\n"` loop.
    pub fn dump_messages(&self, writer: &mut impl Write) -> io::Result<()> {
        for diagnostic in self.metadata.sink().diagnostics() {
            writeln!(writer, "{}\n", diagnostic.render())?;
        }
        Ok(())
    }

    /// Produces the structured (JSON-shaped) record of every source
    /// described in spec.md §6 "Persisted state layout".
    #[must_use]
    pub fn dump_sources(&self) -> DumpOutput {
        DumpOutput {
            sources: self.sources.iter().map(dump_source).collect(),
        }
    }

    pub fn decode(&mut self) -> Result<bool, DriverError> {
        let info = self.threading_info();
        driver::run_parallel(&mut self.sources, &self.metadata, Source::decode, info)
    }

    pub fn decode_sequential(&mut self) -> Result<bool, ContractError> {
        driver::run_sequential(&mut self.sources, &self.metadata, Source::decode)
    }

    pub fn preprocess(&mut self) -> Result<bool, DriverError> {
        let info = self.threading_info();
        driver::run_parallel(&mut self.sources, &self.metadata, Source::preprocess, info)
    }

    pub fn preprocess_sequential(&mut self) -> Result<bool, ContractError> {
        driver::run_sequential(&mut self.sources, &self.metadata, Source::preprocess)
    }

    pub fn lex(&mut self) -> Result<bool, DriverError> {
        let info = self.threading_info();
        driver::run_parallel(&mut self.sources, &self.metadata, Source::lex, info)
    }

    pub fn lex_sequential(&mut self) -> Result<bool, ContractError> {
        driver::run_sequential(&mut self.sources, &self.metadata, Source::lex)
    }

    /// `initialized` -> `preprocessed` in one worker dispatch per source,
    /// matching the original's `compile_until_lexing` dispatch shape (one
    /// combined per-source call per worker, not a full barrier between
    /// stages).
    pub fn compile_until_preprocessing(&mut self) -> Result<bool, DriverError> {
        let info = self.threading_info();
        driver::run_parallel(&mut self.sources, &self.metadata, Source::compile_until_preprocessing, info)
    }

    pub fn compile_until_preprocessing_sequential(&mut self) -> Result<bool, ContractError> {
        driver::run_sequential(&mut self.sources, &self.metadata, Source::compile_until_preprocessing)
    }

    pub fn compile_until_lexing(&mut self) -> Result<bool, DriverError> {
        let info = self.threading_info();
        driver::run_parallel(&mut self.sources, &self.metadata, Source::compile_until_lexing, info)
    }

    pub fn compile_until_lexing_sequential(&mut self) -> Result<bool, ContractError> {
        driver::run_sequential(&mut self.sources, &self.metadata, Source::compile_until_lexing)
    }
}
