//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`. Accessors return `Option`
//! because recovered trees may have positions filled by `Missing` nodes
//! instead of real tokens.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken, token_sets};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(FunctionDef, FunctionDef);
ast_node!(Signature, Signature);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(ReturnClause, ReturnClause);
ast_node!(BlockBody, BlockBody);
ast_node!(ExternalBody, ExternalBody);
ast_node!(VarDecl, VarDecl);
ast_node!(Assignment, Assignment);
ast_node!(Expr, Expression);
ast_node!(BinaryRhs, BinaryRhs);
ast_node!(Literal, Literal);
ast_node!(NameRef, NameRef);

fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

impl Root {
    pub fn functions(&self) -> impl Iterator<Item = FunctionDef> + '_ {
        self.0.children().filter_map(FunctionDef::cast)
    }
}

impl FunctionDef {
    pub fn is_public(&self) -> bool {
        child_token(&self.0, SyntaxKind::KwPublic).is_some()
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Ident)
    }

    pub fn signature(&self) -> Option<Signature> {
        self.0.children().find_map(Signature::cast)
    }

    pub fn body(&self) -> Option<FunctionBody> {
        self.0.children().find_map(FunctionBody::cast)
    }
}

/// The two body forms of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionBody {
    Block(BlockBody),
    External(ExternalBody),
}

impl FunctionBody {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::BlockBody => BlockBody::cast(node).map(FunctionBody::Block),
            SyntaxKind::ExternalBody => ExternalBody::cast(node).map(FunctionBody::External),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            FunctionBody::Block(n) => n.as_cst(),
            FunctionBody::External(n) => n.as_cst(),
        }
    }
}

impl Signature {
    pub fn param_list(&self) -> Option<ParamList> {
        self.0.children().find_map(ParamList::cast)
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.param_list().into_iter().flat_map(|list| {
            list.as_cst()
                .children()
                .filter_map(Param::cast)
                .collect::<Vec<_>>()
        })
    }

    pub fn return_clause(&self) -> Option<ReturnClause> {
        self.0.children().find_map(ReturnClause::cast)
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn type_token(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::TypeName)
    }

    pub fn is_rest(&self) -> bool {
        child_token(&self.0, SyntaxKind::Ellipsis).is_some()
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Ident)
    }
}

impl ReturnClause {
    pub fn type_token(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::TypeName)
    }
}

impl BlockBody {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

/// The two statement forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    VarDecl(VarDecl),
    Assignment(Assignment),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::VarDecl => VarDecl::cast(node).map(Statement::VarDecl),
            SyntaxKind::Assignment => Assignment::cast(node).map(Statement::Assignment),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Statement::VarDecl(n) => n.as_cst(),
            Statement::Assignment(n) => n.as_cst(),
        }
    }
}

impl VarDecl {
    pub fn type_token(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::TypeName)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Ident)
    }

    pub fn initializer(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Assignment {
    pub fn target(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Ident)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

/// First operand of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Literal(Literal),
    NameRef(NameRef),
    /// `( expr )`
    Paren(Expr),
}

impl Expr {
    pub fn operand(&self) -> Option<Operand> {
        for child in self.0.children() {
            match child.kind() {
                SyntaxKind::Literal => return Literal::cast(child).map(Operand::Literal),
                SyntaxKind::NameRef => return NameRef::cast(child).map(Operand::NameRef),
                SyntaxKind::Expression => return Expr::cast(child).map(Operand::Paren),
                _ => {}
            }
        }
        None
    }

    /// Binary tails in source order; empty for a plain operand.
    pub fn binary_rhs(&self) -> impl Iterator<Item = BinaryRhs> + '_ {
        self.0.children().filter_map(BinaryRhs::cast)
    }
}

impl BinaryRhs {
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| token_sets::BINARY_OPS.contains(t.kind()))
    }

    pub fn expression(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::Int | SyntaxKind::Hex | SyntaxKind::Float
                )
            })
    }
}

impl NameRef {
    pub fn token(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Ident)
    }
}
