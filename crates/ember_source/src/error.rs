//! Contract violations (spec.md §7): programmer errors. These never enter
//! the diagnostic sink — they are bugs in the caller, not facts about a
//! source file, and are reported via `Result::Err` rather than `Diagnostic`.

use thiserror::Error;

use crate::state::SourceState;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ContractError {
    #[error("{path}: stage requires state {required}, but source is {actual}")]
    InvalidState {
        path: String,
        required: SourceState,
        actual: SourceState,
    },
    #[error("a Source cannot be constructed with an empty path")]
    EmptyPath,
    #[error("'{0}' is not a valid macro name")]
    InvalidMacroName(String),
    #[error("'{0}' is already registered as an input path")]
    DuplicateInput(String),
}
