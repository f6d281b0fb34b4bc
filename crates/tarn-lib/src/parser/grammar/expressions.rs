use crate::diagnostics::ErrorReporter;
use crate::parser::core::Parser;
use crate::parser::cst::{SyntaxKind, token_sets};
use crate::parser::recovery::Action;
use crate::parser::rules::Rule;
use crate::parser::sink::TreeSink;

const COMPARISON: u8 = 1;
const ADDITIVE: u8 = 2;
const MULTIPLICATIVE: u8 = 3;

fn binary_precedence(kind: SyntaxKind) -> Option<u8> {
    match kind {
        SyntaxKind::Star | SyntaxKind::Slash => Some(MULTIPLICATIVE),
        SyntaxKind::Plus | SyntaxKind::Minus => Some(ADDITIVE),
        SyntaxKind::Lt | SyntaxKind::Gt | SyntaxKind::EqEq | SyntaxKind::EqEqEq => {
            Some(COMPARISON)
        }
        _ => None,
    }
}

impl<S: TreeSink, R: ErrorReporter> Parser<'_, S, R> {
    /// `operand (op expr)*` with multiplicative > additive > comparison.
    pub(crate) fn parse_expression(&mut self) {
        self.parse_expression_prec(0);
    }

    /// Precedence climbing: a RHS binds operators stronger than its own, so
    /// `a + b * c` nests the product and `a - b - c` stays left-to-right.
    fn parse_expression_prec(&mut self, min_precedence: u8) {
        if !self.enter_recursion() {
            return;
        }
        self.open(Rule::Expression, SyntaxKind::Expression);
        self.parse_operand();
        loop {
            let kind = self.peek_kind();
            if token_sets::EXPR_END.contains(kind) {
                break;
            }
            let Some(precedence) = binary_precedence(kind) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            self.open(Rule::BinaryRhs, SyntaxKind::BinaryRhs);
            self.bump();
            self.parse_expression_prec(precedence + 1);
            self.close(Rule::BinaryRhs);
        }
        self.close(Rule::Expression);
        self.exit_recursion();
    }

    /// Literal, name, or parenthesized expression.
    fn parse_operand(&mut self) {
        loop {
            if self.fatal.is_some() {
                return;
            }
            match self.peek_kind() {
                SyntaxKind::Int | SyntaxKind::Hex | SyntaxKind::Float => {
                    self.open_node(SyntaxKind::Literal);
                    self.bump();
                    self.close_node();
                    return;
                }
                SyntaxKind::Ident => {
                    self.open_node(SyntaxKind::NameRef);
                    self.bump();
                    self.close_node();
                    return;
                }
                SyntaxKind::ParenOpen => {
                    self.bump();
                    self.parse_expression_prec(0);
                    self.expect_token(Rule::CloseParen);
                    return;
                }
                _ => match self.recover(Rule::Operand) {
                    Action::Remove => {}
                    Action::Insert { .. } => return,
                },
            }
        }
    }
}
