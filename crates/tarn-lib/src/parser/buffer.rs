//! Pull-based token buffer over the lexer.
//!
//! The parser and the recovery engine both look at upcoming tokens through
//! this buffer. `peek_nth(k)` returns the k-th upcoming non-trivia token,
//! materializing tokens lazily; repeated peeks are idempotent until a
//! `consume()` advances the head. `Eof` is sticky.
//!
//! Trivia is skipped for logical reads but not dropped: tokens skipped ahead
//! of the next logical token accumulate in a side buffer which the driver
//! flushes into the tree, keeping the output lossless.

use std::collections::VecDeque;

use rowan::TextRange;

use super::cst::SyntaxKind;
use super::lexer::{Lexer, Token};

/// How far the recovery engine may look ahead. Peeking beyond this is an
/// internal logic error, not a recoverable condition.
pub(crate) const MAX_LOOKAHEAD: usize = 5;

pub(crate) struct TokenBuffer<'src> {
    lexer: Lexer<'src>,
    /// Prefetched tokens. Leading trivia is shifted out eagerly, so the front
    /// is always a logical token; trivia further ahead stays interleaved.
    ring: VecDeque<Token>,
    /// Trivia skipped ahead of the next logical token, in source order.
    pending_trivia: Vec<Token>,
    /// Last consumed token. `Sof` before anything is consumed.
    head: Token,
    exhausted: bool,
}

impl<'src> TokenBuffer<'src> {
    pub(crate) fn new(lexer: Lexer<'src>) -> Self {
        Self {
            lexer,
            ring: VecDeque::with_capacity(MAX_LOOKAHEAD * 2),
            pending_trivia: Vec::with_capacity(4),
            head: Token::new(SyntaxKind::Sof, TextRange::empty(0.into())),
            exhausted: false,
        }
    }

    fn eof_token(&self) -> Token {
        Token::new(
            SyntaxKind::Eof,
            TextRange::empty((self.lexer.source_len() as u32).into()),
        )
    }

    /// Pulls one more token from the lexer into the ring. False once the
    /// lexer is done; `Eof` is synthesized by the callers, not stored.
    fn pull(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        match self.lexer.next_token() {
            Some(token) => {
                self.ring.push_back(token);
                true
            }
            None => {
                self.exhausted = true;
                false
            }
        }
    }

    /// Moves trivia at the front of the ring into the pending buffer so the
    /// front is the next logical token.
    fn shift_leading_trivia(&mut self) {
        loop {
            if self.ring.is_empty() && !self.pull() {
                return;
            }
            match self.ring.front() {
                Some(token) if token.kind.is_trivia() => {
                    let token = *token;
                    self.ring.pop_front();
                    self.pending_trivia.push(token);
                }
                _ => return,
            }
        }
    }

    /// The next logical token.
    pub(crate) fn peek(&mut self) -> Token {
        self.peek_nth(1)
    }

    /// The k-th upcoming non-trivia token, 1-based. Deterministic and
    /// idempotent between consumes.
    pub(crate) fn peek_nth(&mut self, k: usize) -> Token {
        assert!(
            k >= 1 && k <= MAX_LOOKAHEAD,
            "token buffer overflow: peek_nth({k})"
        );
        self.shift_leading_trivia();

        let mut seen = 0;
        let mut index = 0;
        loop {
            while index >= self.ring.len() {
                if !self.pull() {
                    return self.eof_token();
                }
            }
            let token = self.ring[index];
            if !token.kind.is_trivia() {
                seen += 1;
                if seen == k {
                    return token;
                }
            }
            index += 1;
        }
    }

    /// Consumes the next logical token and makes it the new head. At end of
    /// input returns the sticky `Eof` token.
    pub(crate) fn consume(&mut self) -> Token {
        self.shift_leading_trivia();
        let token = match self.ring.pop_front() {
            Some(token) => token,
            None => self.eof_token(),
        };
        self.head = token;
        token
    }

    /// Trivia accumulated ahead of the current position, in source order.
    /// The caller owns flushing these into the tree.
    pub(crate) fn take_trivia(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.pending_trivia)
    }

    /// Last consumed token (`Sof` initially).
    pub(crate) fn head(&self) -> Token {
        self.head
    }
}
