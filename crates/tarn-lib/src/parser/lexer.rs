//! Lexer for the Tarn language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. This keeps the token stream manageable for
//! malformed input.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Pull-based tokenizer. Tokens come out one at a time, in source order,
/// trivia included; `None` after the last token. Restartable only by
/// constructing a fresh instance.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, SyntaxKind>,
    /// A token recognized while coalescing a garbage run, held for the next pull.
    lookahead: Option<Token>,
    len: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: SyntaxKind::lexer(source),
            lookahead: None,
            len: source.len(),
        }
    }

    /// Byte length of the underlying source.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.len
    }

    /// Next token in source order, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.lookahead.take() {
            return Some(token);
        }

        let mut garbage_start: Option<usize> = None;
        loop {
            match self.inner.next() {
                Some(Ok(kind)) => {
                    let token = Token::new(kind, range_to_text_range(self.inner.span()));
                    if let Some(start) = garbage_start {
                        self.lookahead = Some(token);
                        let end = self.inner.span().start;
                        return Some(Token::new(
                            SyntaxKind::Garbage,
                            range_to_text_range(start..end),
                        ));
                    }
                    return Some(token);
                }
                Some(Err(())) => {
                    if garbage_start.is_none() {
                        garbage_start = Some(self.inner.span().start);
                    }
                }
                None => {
                    return garbage_start.map(|start| {
                        Token::new(SyntaxKind::Garbage, range_to_text_range(start..self.len))
                    });
                }
            }
        }
    }
}

/// Tokenizes the whole source eagerly. Convenience for tests and token dumps;
/// the parser itself pulls lazily through the token buffer.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
