//! Parser infrastructure for the Tarn language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green
//! tree builder, fed through an event sink. Key pieces:
//!
//! - Zero-copy lexing: tokens carry spans, text sliced only when building tree nodes
//! - Pull-based token buffer: k-token lookahead past trivia, materialized lazily
//! - Static rule graph: a total transition table over rules and the context stack
//! - Listener sinks: tree construction and error reporting are capability traits
//!   injected at parser construction
//!
//! # Recovery Strategy
//!
//! The parser is resilient - it always produces a tree. On a mismatch the
//! recovery engine searches bounded lookahead paths under two hypotheses,
//! "the expected token is missing" and "the input token is spurious", scores
//! them by how many rules they match without further repair, and commits the
//! single winning fix: either a synthetic missing node or the removal of one
//! input token. Removed tokens stay in the tree under `Error` nodes, so the
//! output reproduces the input text exactly even for malformed sources.
//!
//! Deeply nested input is the one fatal condition (`RecursionLimitExceeded`).

pub mod ast;
mod buffer;
mod core;
pub mod cst;
mod grammar;
mod invariants;
mod lexer;
mod recovery;
mod rules;
mod sink;

#[cfg(test)]
mod tests;

pub use core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken, TokenSet, dump_tree};
pub use lexer::{Lexer, Token, lex, token_text};
pub use sink::{CstSink, EventSink, TreeSink};
