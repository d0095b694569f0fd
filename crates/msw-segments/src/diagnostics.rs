//! Non-fatal diagnostics emitted while building and checking segments.
//!
//! Fatal problems are [`SegmentError`](crate::SegmentError)s. Everything
//! that lets processing continue (roughness clamping, unphysical depth
//! changes, progress notes) goes to a [`DiagnosticSink`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    Note,
}

/// A single reported message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message),
            Severity::Note => write!(f, "note: {}", self.message),
        }
    }
}

/// Receiver for warnings and notes.
pub trait DiagnosticSink {
    fn warning(&mut self, message: &str);
    fn note(&mut self, message: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&mut self, message: &str) {
        tracing::warn!("{message}");
    }

    fn note(&mut self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Note)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn warning(&mut self, message: &str) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message: message.to_string(),
        });
    }

    fn note(&mut self, message: &str) {
        self.entries.push(Diagnostic {
            severity: Severity::Note,
            message: message.to_string(),
        });
    }
}
