//! The per-file state machine of spec.md §3/§4.3: a `Source` owns its
//! decoded byte buffer, the surviving preprocessed line list, and the
//! lexed token vector, and enforces that `decode` -> `preprocess` -> `lex`
//! run in that order exactly once each.

mod decode;
mod diagnostics;
mod error;
mod options;
mod span;
mod state;

pub use ember_lexer_core::{Token, TokenKind};
pub use error::ContractError;
pub use options::{CompilerMetadata, CompilerOptions, MAX_THREAD_COUNT};
pub use state::SourceState;

use std::path::{Path, PathBuf};

use diagnostics::report_excerpt;
use span::{span_of, LineSpan, TokenSpan};

/// One input file, tracked through its decode/preprocess/lex lifecycle.
///
/// Tokens and preprocessed lines are stored as byte-range spans into
/// `buffer` rather than as borrowed slices (spec.md §9 "Borrowed string
/// views", alternative (b)): a `Source` that owned both `buffer: String`
/// and `Vec<Token<'_>>` borrowing from it would be self-referential. Views
/// are reconstructed on demand by the accessor methods below.
#[derive(Debug)]
pub struct Source {
    path: PathBuf,
    state: SourceState,
    buffer: String,
    lines: Vec<LineSpan>,
    tokens: Vec<TokenSpan>,
}

impl Source {
    /// Constructs a new, empty source for `path`, already advanced to
    /// `initialized`. Fails with `ContractError::EmptyPath` for an empty path.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ContractError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ContractError::EmptyPath);
        }
        Ok(Self {
            path,
            state: SourceState::Initialized,
            buffer: String::new(),
            lines: Vec::new(),
            tokens: Vec::new(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn state(&self) -> SourceState {
        self.state
    }

    fn require(&self, required: SourceState) -> Result<(), ContractError> {
        if self.state == required {
            Ok(())
        } else {
            Err(ContractError::InvalidState {
                path: self.path.display().to_string(),
                required,
                actual: self.state,
            })
        }
    }

    /// Stage 1 (spec.md §4.4). On failure the source stays `initialized` —
    /// decoding failure is fatal for this source (spec.md §7).
    pub fn decode(&mut self, meta: &CompilerMetadata) -> Result<bool, ContractError> {
        self.require(SourceState::Initialized)?;
        match decode::decode(&self.path, meta) {
            Some(text) => {
                self.buffer = text;
                self.state = SourceState::Decoded;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stage 2 (spec.md §4.5). The surviving line list is stored whether or
    /// not the stage succeeds (spec.md §8 Scenario E); only the state
    /// advances conditionally, so a failed preprocess still blocks `lex`.
    pub fn preprocess(&mut self, meta: &CompilerMetadata) -> Result<bool, ContractError> {
        self.require(SourceState::Decoded)?;
        let (surviving, issues) = ember_preprocess::preprocess(&self.buffer);
        let had_error = issues.iter().any(ember_preprocess::PreprocessIssue::is_error);
        for issue in &issues {
            report_excerpt(
                meta,
                &self.path,
                issue.id,
                &issue.args,
                issue.line,
                issue.column,
                issue.length,
                issue.line_data,
            );
        }

        self.lines = surviving
            .into_iter()
            .map(|(line_no, text)| LineSpan {
                line_no,
                range: span_of(&self.buffer, text),
            })
            .collect();

        if had_error {
            return Ok(false);
        }
        self.state = SourceState::Preprocessed;
        Ok(true)
    }

    /// Stage 3 (spec.md §4.6). Per spec.md §7, a failed lex leaves the token
    /// vector unmodified (here: left empty).
    pub fn lex(&mut self, meta: &CompilerMetadata) -> Result<bool, ContractError> {
        self.require(SourceState::Preprocessed)?;
        let line_refs: Vec<(u32, &str)> = self.line_views().collect();
        let (tokens, issues) = ember_lexer::lex_lines(&line_refs);
        let had_error = issues.iter().any(ember_lexer::LexIssue::is_error);
        for issue in &issues {
            report_excerpt(
                meta,
                &self.path,
                issue.id,
                &issue.args,
                issue.line,
                issue.column,
                issue.length,
                issue.line_data,
            );
        }

        if had_error {
            return Ok(false);
        }

        self.tokens = tokens
            .iter()
            .map(|t| TokenSpan {
                kind: t.kind,
                line: t.line,
                column: t.column,
                data: span_of(&self.buffer, t.data),
                line_data: span_of(&self.buffer, t.line_data),
                prefix_literal: span_of(&self.buffer, t.prefix_literal),
                postfix_literal: span_of(&self.buffer, t.postfix_literal),
            })
            .collect();
        self.state = SourceState::Lexed;
        Ok(true)
    }

    /// Sequential convenience chain: `initialized` -> `preprocessed`.
    pub fn compile_until_preprocessing(&mut self, meta: &CompilerMetadata) -> Result<bool, ContractError> {
        Ok(self.decode(meta)? && self.preprocess(meta)?)
    }

    /// Sequential convenience chain: `initialized` -> `lexed`.
    pub fn compile_until_lexing(&mut self, meta: &CompilerMetadata) -> Result<bool, ContractError> {
        Ok(self.decode(meta)? && self.preprocess(meta)? && self.lex(meta)?)
    }

    /// The surviving preprocessed lines, reconstructed as borrowed views.
    /// Empty before `preprocess` has run.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &str)> {
        self.line_views()
    }

    fn line_views(&self) -> impl Iterator<Item = (u32, &str)> {
        self.lines.iter().map(|l| (l.line_no, &self.buffer[l.range.clone()]))
    }

    /// The lexed tokens, reconstructed as borrowed `Token`s. Empty before
    /// `lex` has succeeded.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> {
        self.tokens.iter().map(move |t| {
            Token::new(
                t.kind,
                t.line,
                t.column,
                &self.buffer[t.data.clone()],
                &self.buffer[t.line_data.clone()],
            )
            .with_postfix(&self.buffer[t.postfix_literal.clone()])
        })
    }
}
