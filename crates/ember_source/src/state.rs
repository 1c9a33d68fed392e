//! The per-source stage marker (spec.md §3, §4.3).

/// A source's position in the decode -> preprocess -> lex pipeline.
/// Transitions are monotonic: a successful stage call advances a source by
/// exactly one state, and no state is ever revisited.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Debug)]
pub enum SourceState {
    Empty,
    Initialized,
    Decoded,
    Preprocessed,
    Lexed,
}

impl SourceState {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SourceState::Empty => "empty",
            SourceState::Initialized => "initialized",
            SourceState::Decoded => "decoded",
            SourceState::Preprocessed => "preprocessed",
            SourceState::Lexed => "lexed",
        }
    }
}

impl std::fmt::Display for SourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
