//! Diagnostic categories.

use serde::Serialize;

/// What the recovery engine concluded about the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A token no forward path admits; removed from the parse.
    InvalidToken,
    /// A token a forward path requires; a synthetic node filled the position.
    MissingToken,
}

impl DiagnosticKind {
    pub fn default_message(self) -> &'static str {
        match self {
            DiagnosticKind::InvalidToken => "invalid token",
            DiagnosticKind::MissingToken => "missing token",
        }
    }
}
