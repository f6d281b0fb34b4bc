//! Parser diagnostics infrastructure.
//!
//! This module provides types for collecting and rendering diagnostic
//! messages. The parser reports through the [`ErrorReporter`] capability
//! trait; [`Diagnostics`] is the standard implementation.

mod kind;
mod message;
mod printer;


use rowan::TextRange;

pub use kind::DiagnosticKind;
pub use message::{DiagnosticMessage, Severity};
pub use printer::{DiagnosticView, DiagnosticsPrinter, line_col};

/// Sink for parser errors, injected at parser construction.
///
/// Implementations format and emit however they like; positions come from
/// the offending token's span.
pub trait ErrorReporter {
    /// The input contains a token no forward path admits; it was removed.
    fn invalid_token(&mut self, text: &str, span: TextRange);
    /// The input lacks something a forward path requires; a synthetic node
    /// was inserted.
    fn missing_token(&mut self, what: &str, span: TextRange);
}

/// Collection of diagnostic messages from parsing.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

/// Builder for constructing a diagnostic message.
#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::error(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.messages
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(&self.messages)
    }
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.set_message(msg);
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.set_severity(severity);
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

impl ErrorReporter for Diagnostics {
    fn invalid_token(&mut self, text: &str, span: TextRange) {
        self.report(DiagnosticKind::InvalidToken, span)
            .message(format!("invalid token '{text}'"))
            .emit();
    }

    fn missing_token(&mut self, what: &str, span: TextRange) {
        self.report(DiagnosticKind::MissingToken, span)
            .message(format!("missing {what}"))
            .emit();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
