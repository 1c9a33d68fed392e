//! Failure domains specific to this crate: malformed CLI input and
//! parallel-driver setup failures. Per spec.md §7 these sit alongside
//! `ember_source::ContractError` (a CLI/driver misuse is a programmer- or
//! user-input error, never a `Diagnostic`, since diagnostics are reserved
//! for facts about a *source file*).

use ember_source::ContractError;
use thiserror::Error;

/// A malformed invocation of the hand-rolled CLI parser (spec.md §9's
/// "deep set of command helpers" redesign, §6 "CLI surface").
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CliError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("'{0}' requires a value")]
    MissingValue(&'static str),
    #[error("'{flag}' requires an integer value, got '{value}'")]
    InvalidInt { flag: &'static str, value: String },
    #[error("unknown input encoding '{value}'")]
    UnknownEncoding { value: String, suggestion: Option<String> },
    #[error(transparent)]
    Options(#[from] ContractError),
}

impl CliError {
    /// A human-readable follow-up hint, currently only populated for
    /// [`CliError::UnknownEncoding`] (spec.md §6: "Unknown spellings trigger
    /// a diagnostic that suggests the closest family when a digit marker
    /// (`8`/`16`/`32`) is present").
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::UnknownEncoding { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}

/// Failure standing up the parallel driver's thread pool (spec.md §4.8).
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error("failed to build a {worker_count}-thread worker pool: {source}")]
    PoolBuild {
        worker_count: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}
