use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::diagnostic::{DiagnosticId, Severity};

/// Failure loading a catalogue overlay file.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("failed to parse catalogue overlay JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the optional message-catalogue overlay (spec.md §6):
/// `{ "error": {"1000": "..."}, "warning": {...}, "info": {...} }`.
#[derive(Deserialize, Default)]
struct OverlayFile {
    #[serde(default)]
    error: HashMap<String, String>,
    #[serde(default)]
    warning: HashMap<String, String>,
    #[serde(default)]
    info: HashMap<String, String>,
}

/// Maps `(Severity, code)` to a `%1%`-style format template and renders
/// diagnostics text from an ID plus positional arguments.
#[derive(Clone, Debug)]
pub struct Catalogue {
    templates: HashMap<(Severity, u16), String>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogue {
    /// The catalogue shipped with the compiler, per the table in spec.md §4.2.
    #[must_use]
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        let mut insert = |sev: Severity, code: u16, text: &str| {
            templates.insert((sev, code), text.to_string());
        };
        insert(Severity::Error, 1000, "Failed to open the input.");
        insert(Severity::Error, 1001, "Failed to decode the input using '%1%'.");
        insert(Severity::Error, 1002, "The input isn't encoded in '%1%'.");
        insert(Severity::Error, 1100, "Unexpected EOF found in preprocessor directive.");
        insert(Severity::Error, 1101, "Unexpected token found in preprocessor directive name.");
        insert(Severity::Error, 1103, "Occurred due to #error.");
        insert(Severity::Error, 1104, "#error: %1%");
        insert(Severity::Error, 1105, "Unknown preprocessor directive.");
        insert(Severity::Warning, 1100, "Occurred due to #warning.");
        insert(Severity::Warning, 1101, "#warning: %1%");
        insert(Severity::Error, 2000, "Invalid digit '%1%' in binary literal.");
        insert(Severity::Error, 2001, "Invalid digit '%1%' in octal literal.");
        insert(Severity::Error, 2003, "Invalid digit '%1%' in hexadecimal literal.");
        insert(Severity::Error, 2004, "Invalid binary literal.");
        insert(Severity::Error, 2005, "Invalid hexadecimal literal.");
        insert(Severity::Error, 2006, "'%1%' is an invalid token.");
        insert(Severity::Error, 2007, "Unexpected EOF found in comment.");
        insert(Severity::Error, 2008, "Unexpected EOL found in character literal.");
        insert(Severity::Error, 2009, "Unexpected EOL found in string literal.");
        insert(Severity::Error, 2010, "Invalid scientific notation format.");
        insert(Severity::Error, 2011, "Invalid decimal literal format.");
        Self { templates }
    }

    /// Overlays `json` (built-in templates first, then overridden by any
    /// entry present in the file) onto `self`.
    pub fn overlay_json(&mut self, json: &str) -> Result<(), CatalogueError> {
        let overlay: OverlayFile = serde_json::from_str(json)?;
        for (sev, map) in [
            (Severity::Error, &overlay.error),
            (Severity::Warning, &overlay.warning),
            (Severity::Info, &overlay.info),
        ] {
            for (code_str, template) in map {
                if let Ok(code) = code_str.parse::<u16>() {
                    self.templates.insert((sev, code), template.clone());
                }
            }
        }
        Ok(())
    }

    /// Renders the template for `id`, substituting `%1%`, `%2%`, … with
    /// `args` in order. An ID with no registered template renders as a
    /// fallback string rather than panicking, so an overlay that omits a
    /// built-in ID never crashes the compiler.
    #[must_use]
    pub fn render(&self, id: DiagnosticId, args: &[&str]) -> String {
        let template = self
            .templates
            .get(&(id.severity, id.code))
            .map_or_else(|| format!("(no message template for {})", id.full_id()), Clone::clone);
        substitute(&template, args)
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(end) = template[i + 1..].find('%') {
                let marker = &template[i + 1..i + 1 + end];
                if let Ok(n) = marker.parse::<usize>() {
                    if n >= 1 && n <= args.len() {
                        out.push_str(args[n - 1]);
                        i += end + 2;
                        continue;
                    }
                }
            }
        }
        let ch = template[i..].chars().next().unwrap_or('%');
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_positional_argument() {
        let cat = Catalogue::builtin();
        let rendered = cat.render(DiagnosticId::new(Severity::Error, 2000), &["2"]);
        assert_eq!(rendered, "Invalid digit '2' in binary literal.");
    }

    #[test]
    fn no_argument_template_ignores_extra_args() {
        let cat = Catalogue::builtin();
        let rendered = cat.render(DiagnosticId::new(Severity::Error, 1000), &[]);
        assert_eq!(rendered, "Failed to open the input.");
    }

    #[test]
    fn overlay_replaces_builtin_template() {
        let mut cat = Catalogue::builtin();
        cat.overlay_json(r#"{"error": {"1000": "custom: could not open %1%"}}"#)
            .unwrap();
        let rendered = cat.render(DiagnosticId::new(Severity::Error, 1000), &["x.ember"]);
        assert_eq!(rendered, "custom: could not open x.ember");
    }

    #[test]
    fn overlay_does_not_disturb_other_severities() {
        let mut cat = Catalogue::builtin();
        cat.overlay_json(r#"{"warning": {"1100": "custom warning"}}"#).unwrap();
        assert_eq!(
            cat.render(DiagnosticId::new(Severity::Warning, 1100), &[]),
            "custom warning"
        );
        assert_eq!(
            cat.render(DiagnosticId::new(Severity::Error, 1100), &[]),
            "Unexpected EOF found in preprocessor directive."
        );
    }

    #[test]
    fn unknown_id_renders_fallback_instead_of_panicking() {
        let cat = Catalogue::builtin();
        let rendered = cat.render(DiagnosticId::new(Severity::Error, 9999), &[]);
        assert!(rendered.contains("DE9999"));
    }
}
