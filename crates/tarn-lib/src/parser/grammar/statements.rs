use crate::diagnostics::ErrorReporter;
use crate::parser::core::Parser;
use crate::parser::cst::{SyntaxKind, token_sets};
use crate::parser::recovery::Action;
use crate::parser::rules::Rule;
use crate::parser::sink::TreeSink;

impl<S: TreeSink, R: ErrorReporter> Parser<'_, S, R> {
    /// Function body alternatives: a block or `= external ;`.
    pub(crate) fn parse_function_body(&mut self) {
        loop {
            if self.fatal.is_some() {
                return;
            }
            match self.peek_kind() {
                SyntaxKind::BraceOpen => return self.parse_block_body(),
                SyntaxKind::Assign => return self.parse_external_body(),
                _ => match self.recover(Rule::FunctionBody) {
                    Action::Remove => {}
                    Action::Insert {
                        rule: Rule::ExternalBody,
                    } => return self.parse_external_body(),
                    Action::Insert {
                        rule: Rule::BlockBody,
                    } => return self.parse_block_body(),
                    // End of input: the body was already synthesized.
                    Action::Insert { .. } => return,
                },
            }
        }
    }

    /// `{ statements }`
    fn parse_block_body(&mut self) {
        self.open(Rule::BlockBody, SyntaxKind::BlockBody);
        self.expect_token(Rule::OpenBrace);
        while !self.at_set(token_sets::BLOCK_SYNC) && self.fatal.is_none() {
            self.parse_statement();
        }
        self.expect_token(Rule::CloseBrace);
        self.close(Rule::BlockBody);
    }

    /// `= external ;`
    fn parse_external_body(&mut self) {
        self.open(Rule::ExternalBody, SyntaxKind::ExternalBody);
        self.expect_token(Rule::AssignOp);
        self.expect_token(Rule::External);
        self.expect_token(Rule::Semicolon);
        self.close(Rule::ExternalBody);
    }

    /// Statement alternatives: a type starts a var-decl, a name an
    /// assignment. Anything else is the engine's call.
    fn parse_statement(&mut self) {
        match self.peek_kind() {
            SyntaxKind::TypeName => self.parse_var_decl(),
            SyntaxKind::Ident => self.parse_assignment(),
            _ => match self.recover(Rule::Statement) {
                Action::Remove => {}
                Action::Insert {
                    rule: Rule::Assignment,
                } => self.parse_assignment(),
                Action::Insert {
                    rule: Rule::VarDecl,
                } => self.parse_var_decl(),
                Action::Insert { .. } => {}
            },
        }
    }

    /// `type name [= expr] ;`
    fn parse_var_decl(&mut self) {
        self.open(Rule::VarDecl, SyntaxKind::VarDecl);
        self.expect_token(Rule::TypeName);
        self.expect_token(Rule::VariableName);
        if self.at(SyntaxKind::Assign) {
            self.bump();
            self.parse_expression();
        } else {
            self.sink.empty_node();
        }
        self.expect_token(Rule::Semicolon);
        self.close(Rule::VarDecl);
    }

    /// `name = expr ;`
    fn parse_assignment(&mut self) {
        self.open(Rule::Assignment, SyntaxKind::Assignment);
        self.expect_token(Rule::VariableName);
        self.expect_token(Rule::AssignOp);
        self.parse_expression();
        self.expect_token(Rule::Semicolon);
        self.close(Rule::Assignment);
    }
}
