//! Tarn: an error-tolerant parser for a small statically typed scripting language.
//!
//! # Example
//!
//! ```
//! use tarn_lib::Script;
//!
//! let script = Script::new(
//!     r#"
//!     function foo() returns int {
//!         int x = 1;
//!     }
//!     "#,
//! )
//! .expect("within limits");
//!
//! if !script.is_valid() {
//!     eprintln!("{}", script.diagnostics_printer().render());
//! }
//! ```
//!
//! Malformed input still parses: the recovery engine weighs token insertions
//! against deletions over a bounded lookahead and commits the fix that makes
//! the most forward progress, so every source yields a complete tree plus
//! positioned diagnostics.

pub mod diagnostics;
pub mod parser;

mod script;

pub use diagnostics::{
    DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter, ErrorReporter, Severity,
};
pub use script::Script;

/// Errors that can occur during parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Recursion limit exceeded (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
