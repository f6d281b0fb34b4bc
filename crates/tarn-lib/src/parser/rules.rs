//! Static description of the grammar rules.
//!
//! Rules come in three kinds: terminals (match one token from a required
//! set), productions (push a context and continue at their first sub-rule),
//! and alternatives (two or more right-hand sides selected by lookahead).
//! Optional positions (leading `public`, the `returns` clause, a var-decl
//! initializer, a binary RHS, parameter list contents) are folded into the
//! transition function: when the sentinel token does not match, the optional
//! is skipped without advancing the token position.
//!
//! The transition function is total. Both the driver and the recovery engine
//! walk the same table; the engine walks it on a cloned context stack.

use super::cst::{SyntaxKind, TokenSet, token_sets};

/// Identifier of a parser rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    // Productions
    CompUnit,
    TopLevel,
    FunctionDef,
    Signature,
    Param,
    ReturnClause,
    BlockBody,
    ExternalBody,
    VarDecl,
    Assignment,
    Expression,
    BinaryRhs,

    // Alternatives
    FunctionBody,
    Statement,

    // Terminals
    Public,
    Function,
    FunctionName,
    OpenParen,
    CloseParen,
    Returns,
    TypeName,
    Rest,
    VariableName,
    AssignOp,
    External,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Comma,
    Operand,
    BinaryOp,
    Eof,
}

/// Classification of a rule for the walk.
pub(crate) enum RuleKind {
    Terminal(TokenSet),
    Production,
    Alternatives(&'static [Rule]),
}

/// Alternatives in declaration order; earlier wins exact ties.
const FUNCTION_BODIES: &[Rule] = &[Rule::BlockBody, Rule::ExternalBody];
const STATEMENTS: &[Rule] = &[Rule::VarDecl, Rule::Assignment];

impl Rule {
    pub(crate) fn kind(self) -> RuleKind {
        use SyntaxKind as K;
        match self {
            Rule::CompUnit
            | Rule::TopLevel
            | Rule::FunctionDef
            | Rule::Signature
            | Rule::Param
            | Rule::ReturnClause
            | Rule::BlockBody
            | Rule::ExternalBody
            | Rule::VarDecl
            | Rule::Assignment
            | Rule::Expression
            | Rule::BinaryRhs => RuleKind::Production,

            Rule::FunctionBody => RuleKind::Alternatives(FUNCTION_BODIES),
            Rule::Statement => RuleKind::Alternatives(STATEMENTS),

            Rule::Public => RuleKind::Terminal(TokenSet::single(K::KwPublic)),
            Rule::Function => RuleKind::Terminal(TokenSet::single(K::KwFunction)),
            Rule::FunctionName => RuleKind::Terminal(TokenSet::single(K::Ident)),
            Rule::OpenParen => RuleKind::Terminal(TokenSet::single(K::ParenOpen)),
            Rule::CloseParen => RuleKind::Terminal(TokenSet::single(K::ParenClose)),
            Rule::Returns => RuleKind::Terminal(TokenSet::single(K::KwReturns)),
            Rule::TypeName => RuleKind::Terminal(TokenSet::single(K::TypeName)),
            Rule::Rest => RuleKind::Terminal(TokenSet::single(K::Ellipsis)),
            Rule::VariableName => RuleKind::Terminal(TokenSet::single(K::Ident)),
            Rule::AssignOp => RuleKind::Terminal(TokenSet::single(K::Assign)),
            Rule::External => RuleKind::Terminal(TokenSet::single(K::KwExternal)),
            Rule::OpenBrace => RuleKind::Terminal(TokenSet::single(K::BraceOpen)),
            Rule::CloseBrace => RuleKind::Terminal(TokenSet::single(K::BraceClose)),
            Rule::Semicolon => RuleKind::Terminal(TokenSet::single(K::Semicolon)),
            Rule::Comma => RuleKind::Terminal(TokenSet::single(K::Comma)),
            Rule::Operand => {
                RuleKind::Terminal(TokenSet::new(&[K::Int, K::Hex, K::Float, K::Ident]))
            }
            Rule::BinaryOp => RuleKind::Terminal(token_sets::BINARY_OPS),
            Rule::Eof => RuleKind::Terminal(TokenSet::single(K::Eof)),
        }
    }

    /// Human-readable name, used in diagnostics.
    pub(crate) fn describe(self) -> &'static str {
        match self {
            Rule::CompUnit => "source file",
            Rule::TopLevel => "top-level declaration",
            Rule::FunctionDef => "function definition",
            Rule::Signature => "function signature",
            Rule::Param => "parameter",
            Rule::ReturnClause => "'returns' clause",
            Rule::BlockBody => "function body block",
            Rule::ExternalBody => "external function body",
            Rule::VarDecl => "variable declaration",
            Rule::Assignment => "assignment",
            Rule::Expression => "expression",
            Rule::BinaryRhs => "binary operation",
            Rule::FunctionBody => "function body",
            Rule::Statement => "statement",
            Rule::Public => "'public'",
            Rule::Function => "'function'",
            Rule::FunctionName => "function name",
            Rule::OpenParen => "'('",
            Rule::CloseParen => "')'",
            Rule::Returns => "'returns'",
            Rule::TypeName => "type",
            Rule::Rest => "'...'",
            Rule::VariableName => "variable name",
            Rule::AssignOp => "'='",
            Rule::External => "'external'",
            Rule::OpenBrace => "'{'",
            Rule::CloseBrace => "'}'",
            Rule::Semicolon => "';'",
            Rule::Comma => "','",
            Rule::Operand => "expression",
            Rule::BinaryOp => "operator",
            Rule::Eof => "end of file",
        }
    }

    /// Syntax kind recorded for a missing-node event. Terminals map to their
    /// token kind; productions to the node kind they would have produced.
    pub(crate) fn placeholder(self) -> SyntaxKind {
        use SyntaxKind as K;
        match self {
            Rule::CompUnit => K::Root,
            Rule::TopLevel | Rule::FunctionDef => K::FunctionDef,
            Rule::Signature => K::Signature,
            Rule::Param => K::Param,
            Rule::ReturnClause => K::ReturnClause,
            Rule::FunctionBody | Rule::BlockBody => K::BlockBody,
            Rule::ExternalBody => K::ExternalBody,
            Rule::Statement | Rule::VarDecl => K::VarDecl,
            Rule::Assignment => K::Assignment,
            Rule::Expression | Rule::Operand | Rule::BinaryOp => K::Expression,
            Rule::BinaryRhs => K::BinaryRhs,
            Rule::Public => K::KwPublic,
            Rule::Function => K::KwFunction,
            Rule::FunctionName | Rule::VariableName => K::Ident,
            Rule::OpenParen => K::ParenOpen,
            Rule::CloseParen => K::ParenClose,
            Rule::Returns => K::KwReturns,
            Rule::TypeName => K::TypeName,
            Rule::Rest => K::Ellipsis,
            Rule::AssignOp => K::Assign,
            Rule::External => K::KwExternal,
            Rule::OpenBrace => K::BraceOpen,
            Rule::CloseBrace => K::BraceClose,
            Rule::Semicolon => K::Semicolon,
            Rule::Comma => K::Comma,
            Rule::Eof => K::Eof,
        }
    }
}

/// Stack of currently open productions.
///
/// The driver owns the live stack; the recovery engine clones it per call and
/// explores on the clone, so exploration never leaves observable changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RuleStack {
    frames: Vec<Rule>,
}

impl RuleStack {
    pub(crate) fn new() -> Self {
        Self {
            frames: Vec::with_capacity(8),
        }
    }

    pub(crate) fn push(&mut self, rule: Rule) {
        self.frames.push(rule);
    }

    pub(crate) fn pop(&mut self) -> Option<Rule> {
        self.frames.pop()
    }

    pub(crate) fn top(&self) -> Option<Rule> {
        self.frames.last().copied()
    }

    pub(crate) fn frames(&self) -> &[Rule] {
        &self.frames
    }
}

/// Enters a production: pushes it and returns its first sub-rule, resolving
/// leading optionals against the lookahead token.
pub(crate) fn enter_rule(ctx: &mut RuleStack, rule: Rule, la: SyntaxKind) -> Rule {
    use SyntaxKind as K;
    ctx.push(rule);
    match rule {
        Rule::CompUnit => {
            if la == K::Eof {
                Rule::Eof
            } else {
                Rule::TopLevel
            }
        }
        Rule::TopLevel => {
            if la == K::KwPublic {
                Rule::Public
            } else {
                Rule::FunctionDef
            }
        }
        Rule::FunctionDef => Rule::Function,
        Rule::Signature => Rule::OpenParen,
        Rule::Param => Rule::TypeName,
        Rule::ReturnClause => Rule::Returns,
        Rule::BlockBody => Rule::OpenBrace,
        Rule::ExternalBody => Rule::AssignOp,
        Rule::VarDecl => Rule::TypeName,
        Rule::Assignment => Rule::VariableName,
        Rule::Expression => {
            if la == K::ParenOpen {
                Rule::OpenParen
            } else {
                Rule::Operand
            }
        }
        Rule::BinaryRhs => Rule::BinaryOp,
        _ => {
            debug_assert!(false, "enter_rule on non-production {rule:?}");
            rule
        }
    }
}

/// Successor of a matched terminal, given the token that follows it. Pops the
/// context stack when the terminal closes its production; the pops cascade
/// through enclosing productions that complete with it.
pub(crate) fn next_rule(ctx: &mut RuleStack, rule: Rule, la: SyntaxKind) -> Rule {
    use SyntaxKind as K;
    match (rule, ctx.top()) {
        (Rule::Public, _) => Rule::FunctionDef,
        (Rule::Function, _) => Rule::FunctionName,
        (Rule::FunctionName, _) => Rule::Signature,

        (Rule::OpenParen, Some(Rule::Expression)) => Rule::Expression,
        (Rule::OpenParen, _) => {
            if la == K::TypeName {
                Rule::Param
            } else {
                Rule::CloseParen
            }
        }
        (Rule::Comma, Some(Rule::Signature)) => Rule::Param,

        (Rule::CloseParen, Some(Rule::Signature)) => {
            if la == K::KwReturns {
                Rule::ReturnClause
            } else {
                end_production(ctx, la)
            }
        }
        (Rule::CloseParen, Some(Rule::Expression)) => {
            if token_sets::BINARY_OPS.contains(la) {
                Rule::BinaryRhs
            } else {
                end_production(ctx, la)
            }
        }

        (Rule::Returns, _) => Rule::TypeName,
        (Rule::TypeName, Some(Rule::Param)) => {
            if la == K::Ellipsis {
                Rule::Rest
            } else {
                Rule::VariableName
            }
        }
        (Rule::TypeName, Some(Rule::VarDecl)) => Rule::VariableName,
        (Rule::Rest, _) => Rule::VariableName,

        (Rule::VariableName, Some(Rule::VarDecl)) => {
            if la == K::Assign {
                Rule::AssignOp
            } else {
                Rule::Semicolon
            }
        }
        (Rule::VariableName, Some(Rule::Assignment)) => Rule::AssignOp,

        (Rule::AssignOp, Some(Rule::ExternalBody)) => Rule::External,
        (Rule::AssignOp, _) => Rule::Expression,
        (Rule::External, _) => Rule::Semicolon,

        (Rule::OpenBrace, _) => {
            if token_sets::BLOCK_SYNC.contains(la) {
                Rule::CloseBrace
            } else {
                Rule::Statement
            }
        }

        (Rule::Operand, Some(Rule::Expression)) => {
            if token_sets::BINARY_OPS.contains(la) {
                Rule::BinaryRhs
            } else {
                end_production(ctx, la)
            }
        }
        (Rule::BinaryOp, _) => Rule::Expression,

        (Rule::Eof, _) => Rule::Eof,

        // Closing terminals and anything consumed in an unexpected context
        // complete the enclosing production.
        _ => end_production(ctx, la),
    }
}

/// A production just completed: pop it and decide what follows from the
/// parent context. Completion cascades while parents complete with it.
fn end_production(ctx: &mut RuleStack, la: SyntaxKind) -> Rule {
    use SyntaxKind as K;
    loop {
        let Some(done) = ctx.pop() else {
            return at_top_level(la);
        };
        match (done, ctx.top()) {
            (Rule::TopLevel, _) | (_, None) => return at_top_level(la),

            (Rule::Param, Some(Rule::Signature)) => {
                return if la == K::Comma {
                    Rule::Comma
                } else {
                    Rule::CloseParen
                };
            }
            (Rule::VarDecl | Rule::Assignment, Some(Rule::BlockBody)) => {
                return if token_sets::BLOCK_SYNC.contains(la) {
                    Rule::CloseBrace
                } else {
                    Rule::Statement
                };
            }
            (Rule::Signature, Some(Rule::FunctionDef)) => return Rule::FunctionBody,
            (Rule::Expression, Some(Rule::VarDecl | Rule::Assignment)) => return Rule::Semicolon,
            (Rule::Expression, Some(Rule::Expression)) => return Rule::CloseParen,
            (Rule::BinaryRhs, Some(Rule::Expression)) => {
                if token_sets::BINARY_OPS.contains(la) {
                    return Rule::BinaryRhs;
                }
                // The expression completes with its last RHS.
            }

            // These complete their parent as well; keep popping.
            (Rule::ReturnClause, Some(Rule::Signature))
            | (Rule::BlockBody | Rule::ExternalBody, Some(Rule::FunctionDef))
            | (Rule::FunctionDef, Some(Rule::TopLevel))
            | (Rule::Expression, Some(Rule::BinaryRhs)) => {}

            // Unknown pairing under a desynchronized exploration clone: keep
            // popping until a known join point.
            _ => {}
        }
    }
}

fn at_top_level(la: SyntaxKind) -> Rule {
    if la == SyntaxKind::Eof {
        Rule::Eof
    } else {
        Rule::TopLevel
    }
}
