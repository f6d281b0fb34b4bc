//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::TextRange;

use crate::Error;
use crate::diagnostics::ErrorReporter;

use super::buffer::TokenBuffer;
use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Lexer, Token, token_text};
use super::rules::{Rule, RuleKind, RuleStack};
use super::sink::TreeSink;

/// Default bound on grammar nesting depth.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// The recursive-descent driver.
///
/// Owns the token buffer and the live context stack. Tree events go to the
/// sink, errors to the reporter; both are injected at construction. The
/// driver never consumes trivia directly - every read goes through the
/// buffer's non-trivia interface, with skipped trivia flushed to the sink in
/// source order.
pub struct Parser<'src, S, R> {
    pub(super) source: &'src str,
    pub(super) buffer: TokenBuffer<'src>,
    pub(super) context: RuleStack,
    pub(super) sink: S,
    pub(super) reporter: R,
    depth: u32,
    recursion_limit: u32,
    pub(super) fatal: Option<Error>,
    pub(super) debug_fuel: Cell<u32>,
}

impl<'src, S: TreeSink, R: ErrorReporter> Parser<'src, S, R> {
    pub fn new(source: &'src str, sink: S, reporter: R) -> Self {
        Self {
            source,
            buffer: TokenBuffer::new(Lexer::new(source)),
            context: RuleStack::new(),
            sink,
            reporter,
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            fatal: None,
            debug_fuel: Cell::new(256),
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Runs the parse to end of input. The tree is always complete when this
    /// returns `Ok`; grammar violations surface through the reporter, never
    /// as an `Err`.
    pub fn parse(mut self) -> Result<(S, R), Error> {
        self.parse_comp_unit();
        if let Some(err) = self.fatal {
            return Err(err);
        }
        debug_assert_eq!(
            self.context.frames(),
            &[Rule::CompUnit],
            "context stack unbalanced at end of parse"
        );
        Ok((self.sink, self.reporter))
    }

    // =========================================================================
    // Token access
    // =========================================================================

    pub(super) fn peek(&mut self) -> Token {
        self.ensure_progress();
        self.buffer.peek()
    }

    pub(super) fn peek_kind(&mut self) -> SyntaxKind {
        self.peek().kind
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(super) fn at_set(&mut self, set: TokenSet) -> bool {
        set.contains(self.peek_kind())
    }

    pub(super) fn at_eof(&mut self) -> bool {
        self.at(SyntaxKind::Eof)
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.fatal.is_some() || self.at_eof()
    }

    // =========================================================================
    // Tree building
    // =========================================================================

    /// Sends trivia skipped ahead of the current position to the sink.
    pub(super) fn flush_trivia(&mut self) {
        for token in self.buffer.take_trivia() {
            self.sink.token(token.kind, token_text(self.source, &token));
        }
    }

    /// Consumes the next logical token into the tree, leading trivia first.
    pub(super) fn bump(&mut self) {
        let look = self.peek();
        assert!(look.kind != SyntaxKind::Eof, "bump called at EOF");
        self.flush_trivia();
        let token = self.buffer.consume();
        self.sink.token(token.kind, token_text(self.source, &token));
        self.reset_debug_fuel();
    }

    /// Opens a node without a grammar context (`Root`, `ParamList`).
    pub(super) fn open_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.sink.enter_node(kind);
    }

    pub(super) fn close_node(&mut self) {
        self.sink.exit_node();
    }

    /// Opens a production: leading trivia attaches to the parent node.
    pub(super) fn open(&mut self, rule: Rule, kind: SyntaxKind) {
        // Peeking first pulls pending trivia out of the token stream.
        self.peek();
        self.open_node(kind);
        self.context.push(rule);
    }

    pub(super) fn close(&mut self, rule: Rule) {
        debug_assert_eq!(self.context.top(), Some(rule), "unbalanced context pop");
        self.context.pop();
        self.sink.exit_node();
    }

    // =========================================================================
    // Expectations
    // =========================================================================

    /// Matches one terminal rule. On mismatch the recovery engine decides:
    /// removed tokens restart the same expectation, an insertion stands in
    /// for the terminal and the caller proceeds as if it were present.
    /// Returns false when the terminal was synthesized.
    pub(super) fn expect_token(&mut self, rule: Rule) -> bool {
        let RuleKind::Terminal(expected) = rule.kind() else {
            unreachable!("expect_token on non-terminal {rule:?}");
        };
        loop {
            if self.fatal.is_some() {
                return false;
            }
            if expected.contains(self.peek_kind()) {
                self.bump();
                return true;
            }
            match self.recover(rule) {
                super::recovery::Action::Remove => continue,
                super::recovery::Action::Insert { .. } => return false,
            }
        }
    }

    // =========================================================================
    // Limits
    // =========================================================================

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            if self.fatal.is_none() {
                self.fatal = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // =========================================================================
    // Positions
    // =========================================================================

    /// Where a missing-token diagnostic anchors: the upcoming token, or the
    /// end of the last consumed token at end of input.
    pub(super) fn missing_anchor(&mut self) -> TextRange {
        let look = self.buffer.peek();
        if look.kind == SyntaxKind::Eof {
            TextRange::empty(self.buffer.head().span.end())
        } else {
            TextRange::empty(look.span.start())
        }
    }

    pub(super) fn text_of(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }
}
