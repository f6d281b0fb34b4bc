//! Syntax kinds for the Tarn language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `TarnLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    /// `...` rest-parameter marker. A lone `.` is not a token and lexes as `Garbage`.
    #[token("...")]
    Ellipsis,

    /// `===` before `==` before `=>` before `=`; Logos picks the longest match.
    #[token("===")]
    EqEqEq,

    #[token("==")]
    EqEq,

    #[token("=>")]
    FatArrow,

    #[token("=")]
    Assign,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("function")]
    KwFunction,

    #[token("returns")]
    KwReturns,

    #[token("external")]
    KwExternal,

    #[token("public")]
    KwPublic,

    /// Built-in simple type names share one kind; the text disambiguates.
    #[token("int")]
    #[token("float")]
    #[token("string")]
    #[token("boolean")]
    TypeName,

    /// Hex digits are exactly `0-9 a-f A-F`.
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Hex,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    #[regex(r"[0-9]+")]
    Int,

    /// Defined after keywords so they take precedence.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// Coalesced unrecognized characters.
    Garbage,

    /// Start-of-file sentinel: the buffer's `head()` before anything is consumed.
    Sof,

    /// End-of-file sentinel. Sticky: never stored in the tree.
    Eof,

    // --- Node kinds (non-terminals) ---
    Root,
    FunctionDef,
    Signature,
    ParamList,
    Param,
    ReturnClause,
    BlockBody,
    ExternalBody,
    VarDecl,
    Assignment,
    Expression,
    BinaryRhs,
    Literal,
    NameRef,
    /// Zero-width placeholder inserted by recovery for a required position.
    Missing,
    /// Wraps input tokens that recovery removed from the parse.
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment)
    }

    /// Token kinds come before node kinds in the enum.
    #[inline]
    pub fn is_token(self) -> bool {
        self < Root
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TarnLang {}

impl Language for TarnLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<TarnLang>;
pub type SyntaxToken = rowan::SyntaxToken<TarnLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment]);

    /// Tokens that close a statement block. Natural re-entry points: a stray
    /// `public` or `function` means the block was left unclosed.
    pub const BLOCK_SYNC: TokenSet = TokenSet::new(&[BraceClose, KwPublic, KwFunction, Eof]);

    /// Tokens that terminate an expression.
    pub const EXPR_END: TokenSet = TokenSet::new(&[
        ParenClose,
        BraceClose,
        Semicolon,
        Comma,
        KwPublic,
        KwFunction,
        Eof,
    ]);

    /// FIRST set of an expression operand.
    pub const OPERAND_FIRST: TokenSet = TokenSet::new(&[Int, Hex, Float, Ident, ParenOpen]);

    /// Binary operators, all precedence tiers.
    pub const BINARY_OPS: TokenSet =
        TokenSet::new(&[Star, Slash, Plus, Minus, Lt, Gt, EqEq, EqEqEq]);
}

/// Renders a tree for debugging and tests: one element per line, two-space
/// indentation, token text in quotes. Trivia is skipped unless requested.
pub fn dump_tree(node: &SyntaxNode, with_trivia: bool) -> String {
    let mut out = String::new();
    dump_element(&mut out, &SyntaxElement::Node(node.clone()), 0, with_trivia);
    out
}

fn dump_element(out: &mut String, element: &SyntaxElement, depth: usize, with_trivia: bool) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    match element {
        SyntaxElement::Node(node) => {
            out.push_str(&format!("{:?}\n", node.kind()));
            for child in node.children_with_tokens() {
                if !with_trivia && child.as_token().is_some_and(|t| t.kind().is_trivia()) {
                    continue;
                }
                dump_element(out, &child, depth + 1, with_trivia);
            }
        }
        SyntaxElement::Token(token) => {
            out.push_str(&format!("{:?} {:?}\n", token.kind(), token.text()));
        }
    }
}
