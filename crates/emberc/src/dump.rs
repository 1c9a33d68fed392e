//! `dump_sources()`'s JSON shape (spec.md §4.9, §6 "Persisted state
//! layout"): `{ sources: [ { path, preprocessed?, tokens? } ] }`, grounded
//! on `ember_diagnostic`'s and the teacher workspace's use of `serde`/
//! `serde_json` for on-disk formats.

use ember_source::{Source, SourceState};
use serde::Serialize;

#[derive(Serialize, Debug, Eq, PartialEq)]
pub struct DumpOutput {
    pub sources: Vec<SourceDump>,
}

#[derive(Serialize, Debug, Eq, PartialEq)]
pub struct SourceDump {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preprocessed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenDump>>,
}

#[derive(Serialize, Debug, Eq, PartialEq)]
pub struct TokenDump {
    pub data: String,
    pub location: LocationDump,
    #[serde(rename = "type")]
    pub kind: String,
    pub literal: LiteralDump,
}

#[derive(Serialize, Debug, Eq, PartialEq)]
pub struct LocationDump {
    pub line: u32,
    pub col: usize,
}

#[derive(Serialize, Debug, Eq, PartialEq)]
pub struct LiteralDump {
    pub prefix: String,
    pub postfix: String,
}

/// Builds one source's dump record. `preprocessed` is present whenever a
/// preprocess attempt left surviving lines on record (including a *failed*
/// preprocess, per spec.md §8 Scenario E — the surviving line list is
/// produced regardless of stage success) or the stage fully succeeded on an
/// empty file; `tokens` is present only once the source reached `lexed`.
#[must_use]
pub fn dump_source(source: &Source) -> SourceDump {
    let reached_preprocessed = source.state() >= SourceState::Preprocessed;
    let mut lines = source.lines().peekable();
    let has_lines = lines.peek().is_some();

    let preprocessed = if reached_preprocessed || has_lines {
        Some(lines.map(|(_, text)| text.to_string()).collect())
    } else {
        None
    };

    let tokens = if source.state() == SourceState::Lexed {
        Some(
            source
                .tokens()
                .map(|t| TokenDump {
                    data: t.data.to_string(),
                    location: LocationDump { line: t.line, col: t.column },
                    kind: t.kind.to_string(),
                    literal: LiteralDump {
                        prefix: t.prefix_literal.to_string(),
                        postfix: t.postfix_literal.to_string(),
                    },
                })
                .collect(),
        )
    } else {
        None
    };

    SourceDump {
        path: source.path().display().to_string(),
        preprocessed,
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_source::{CompilerMetadata, CompilerOptions};

    fn temp_source(name: &str, contents: &str) -> Source {
        let mut path = std::env::temp_dir();
        path.push(format!("ember_dump_test_{name}_{:?}.ember", std::thread::current().id()));
        std::fs::write(&path, contents).unwrap();
        Source::new(path).unwrap()
    }

    #[test]
    fn fresh_source_has_neither_field() {
        let source = temp_source("fresh", "let x = 0");
        let dump = dump_source(&source);
        assert!(dump.preprocessed.is_none());
        assert!(dump.tokens.is_none());
        std::fs::remove_file(source.path()).unwrap();
    }

    #[test]
    fn lexed_source_dumps_tokens_and_preprocessed_lines() {
        let source = temp_source("lexed", "let x = 0");
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let mut source = source;
        assert!(source.compile_until_lexing(&meta).unwrap());

        let dump = dump_source(&source);
        assert_eq!(dump.preprocessed.as_deref(), Some(&["let x = 0".to_string()][..]));
        let tokens = dump.tokens.unwrap();
        assert!(!tokens.is_empty());
        assert_eq!(tokens[0].kind, "keyword_let");
        std::fs::remove_file(source.path()).unwrap();
    }

    #[test]
    fn failed_preprocess_still_dumps_surviving_lines_but_no_tokens() {
        let mut source = temp_source("scenario_e", "#error bad\ncode");
        let meta = CompilerMetadata::new(CompilerOptions::new());
        assert!(source.decode(&meta).unwrap());
        assert!(!source.preprocess(&meta).unwrap());

        let dump = dump_source(&source);
        assert_eq!(dump.preprocessed.as_deref(), Some(&["code".to_string()][..]));
        assert!(dump.tokens.is_none());
        std::fs::remove_file(source.path()).unwrap();
    }

    #[test]
    fn serializes_to_the_documented_json_shape() {
        let source = temp_source("json_shape", "x");
        let output = DumpOutput {
            sources: vec![dump_source(&source)],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert!(json["sources"][0]["path"].is_string());
        assert!(json["sources"][0].get("preprocessed").is_none());
        std::fs::remove_file(source.path()).unwrap();
    }
}
