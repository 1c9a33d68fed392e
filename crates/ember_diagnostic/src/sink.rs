use parking_lot::Mutex;

use crate::diagnostic::{Diagnostic, Severity};

/// The append-only, thread-safe collection diagnostics are pushed into.
///
/// A single `DiagnosticSink` is shared by reference across every worker in
/// the parallel driver (spec.md §5): push/query are linearised behind a
/// `parking_lot::Mutex`, the only piece of mutable state workers contend on.
#[derive(Default)]
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, diagnostic: Diagnostic) {
        tracing::debug!(id = %diagnostic.id, "diagnostic pushed to sink");
        self.diagnostics.lock().push(diagnostic);
    }

    /// A snapshot copy of every diagnostic pushed so far, in arrival order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    #[must_use]
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.diagnostics.lock().iter().any(|d| d.severity() == severity)
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_severity(Severity::Error)
    }

    #[must_use]
    pub fn has_warning(&self) -> bool {
        self.has_severity(Severity::Warning)
    }

    #[must_use]
    pub fn has_info(&self) -> bool {
        self.has_severity(Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticId;

    #[test]
    fn empty_sink_has_no_severities() {
        let sink = DiagnosticSink::new();
        assert!(sink.is_empty());
        assert!(!sink.has_error());
        assert!(!sink.has_warning());
        assert!(!sink.has_info());
    }

    #[test]
    fn push_preserves_arrival_order() {
        let sink = DiagnosticSink::new();
        sink.push(Diagnostic::new(DiagnosticId::new(Severity::Warning, 1100), "a"));
        sink.push(Diagnostic::new(DiagnosticId::new(Severity::Error, 1000), "b"));
        let all = sink.diagnostics();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].what, "a");
        assert_eq!(all[1].what, "b");
        assert!(sink.has_error());
        assert!(sink.has_warning());
        assert!(!sink.has_info());
    }

    #[test]
    fn shared_across_threads_is_linearised() {
        let sink = DiagnosticSink::new();
        std::thread::scope(|s| {
            for i in 0..8 {
                let sink = &sink;
                s.spawn(move || {
                    sink.push(Diagnostic::new(
                        DiagnosticId::new(Severity::Info, i),
                        format!("msg {i}"),
                    ));
                });
            }
        });
        assert_eq!(sink.len(), 8);
    }
}
