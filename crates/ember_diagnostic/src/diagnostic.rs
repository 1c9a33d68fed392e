use std::fmt;

/// Severity of a diagnostic, collapsed to a single concrete record per
/// spec.md §9's "Inheritance collapse" redesign flag (no separate
/// Info/Warning/Error message classes).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// The single letter used in a diagnostic's full ID (`D{I,W,E}NNNN`).
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Severity::Info => 'I',
            Severity::Warning => 'W',
            Severity::Error => 'E',
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A stable (severity, numeric id) pair, e.g. `(Error, 1000)` renders as
/// the full ID `DE1000`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticId {
    pub severity: Severity,
    pub code: u16,
}

impl DiagnosticId {
    #[must_use]
    pub fn new(severity: Severity, code: u16) -> Self {
        Self { severity, code }
    }

    /// The stable `D{I,W,E}NNNN` form, e.g. `DE1000`.
    #[must_use]
    pub fn full_id(self) -> String {
        format!("D{}{:04}", self.severity.letter(), self.code)
    }
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_id())
    }
}

/// A single structured diagnostic message.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub id: DiagnosticId,
    pub what: String,
    pub where_: Option<String>,
    pub excerpt: Option<String>,
    pub additional_note: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(id: DiagnosticId, what: impl Into<String>) -> Self {
        Self {
            id,
            what: what.into(),
            where_: None,
            excerpt: None,
            additional_note: None,
        }
    }

    #[must_use]
    pub fn with_where(mut self, where_: impl Into<String>) -> Self {
        self.where_ = Some(where_.into());
        self
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.additional_note = Some(note.into());
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.id.severity
    }

    /// Renders the full diagnostic per spec.md §4.2:
    /// ```text
    /// <Severity>[<FullId>]: <what>
    ///  --> <where>
    /// <excerpt>
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{}[{}]: {}", self.id.severity, self.id.full_id(), self.what);
        if let Some(where_) = &self.where_ {
            out.push_str("\n --> ");
            out.push_str(where_);
        }
        if let Some(excerpt) = &self.excerpt {
            out.push('\n');
            out.push_str(excerpt);
        }
        if let Some(note) = &self.additional_note {
            out.push_str("\nnote: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
