use crate::diagnostics::ErrorReporter;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::recovery::Action;
use crate::parser::rules::Rule;
use crate::parser::sink::TreeSink;

impl<S: TreeSink, R: ErrorReporter> Parser<'_, S, R> {
    /// Compilation unit: function definitions until end of input.
    pub(crate) fn parse_comp_unit(&mut self) {
        self.sink.enter_node(SyntaxKind::Root);
        self.context.push(Rule::CompUnit);

        while !self.should_stop() {
            match self.peek_kind() {
                SyntaxKind::KwPublic | SyntaxKind::KwFunction => self.parse_top_level(),
                _ => match self.recover(Rule::TopLevel) {
                    Action::Remove => {}
                    Action::Insert { .. } => self.parse_top_level(),
                },
            }
        }

        self.flush_trivia();
        self.sink.exit_node();
    }

    /// `[public] function name signature body`
    fn parse_top_level(&mut self) {
        self.peek();
        self.context.push(Rule::TopLevel);
        self.open_node(SyntaxKind::FunctionDef);

        if self.at(SyntaxKind::KwPublic) {
            self.bump();
        } else {
            self.sink.empty_node();
        }

        self.context.push(Rule::FunctionDef);
        self.expect_token(Rule::Function);
        self.expect_token(Rule::FunctionName);
        self.parse_signature();
        self.parse_function_body();
        debug_assert_eq!(self.context.top(), Some(Rule::FunctionDef));
        self.context.pop();

        self.close_node();
        debug_assert_eq!(self.context.top(), Some(Rule::TopLevel));
        self.context.pop();
    }

    /// `( params ) [returns type]`
    fn parse_signature(&mut self) {
        self.open(Rule::Signature, SyntaxKind::Signature);
        self.expect_token(Rule::OpenParen);
        self.parse_param_list();
        self.expect_token(Rule::CloseParen);
        if self.at(SyntaxKind::KwReturns) {
            self.parse_return_clause();
        } else {
            self.sink.empty_node();
        }
        self.close(Rule::Signature);
    }

    /// Comma-separated parameters; possibly none. Tokens that cannot start a
    /// parameter are left for the `)` expectation to resolve.
    fn parse_param_list(&mut self) {
        self.peek();
        self.open_node(SyntaxKind::ParamList);
        while self.at(SyntaxKind::TypeName) && self.fatal.is_none() {
            self.parse_param();
            match self.peek_kind() {
                SyntaxKind::Comma => self.bump(),
                // Two parameters with no separator: put the comma in.
                SyntaxKind::TypeName => {
                    self.expect_token(Rule::Comma);
                }
                _ => break,
            }
        }
        self.close_node();
    }

    /// `type [...] name`
    fn parse_param(&mut self) {
        self.open(Rule::Param, SyntaxKind::Param);
        self.expect_token(Rule::TypeName);
        if self.at(SyntaxKind::Ellipsis) {
            self.bump();
        }
        self.expect_token(Rule::VariableName);
        self.close(Rule::Param);
    }

    /// `returns type`
    fn parse_return_clause(&mut self) {
        self.open(Rule::ReturnClause, SyntaxKind::ReturnClause);
        self.expect_token(Rule::Returns);
        self.expect_token(Rule::TypeName);
        self.close(Rule::ReturnClause);
    }
}
