//! Diagnostic message types.

use rowan::TextRange;
use serde::Serialize;

use super::kind::DiagnosticKind;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic with category, location and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    severity: Severity,
    kind: DiagnosticKind,
    range: TextRange,
    message: String,
}

impl DiagnosticMessage {
    pub(crate) fn error(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            range,
            message: kind.default_message().to_string(),
        }
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub(crate) fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
