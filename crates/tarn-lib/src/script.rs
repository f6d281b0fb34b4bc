//! Script facade: parse a source text, hold the tree and its diagnostics.

use crate::diagnostics::{Diagnostics, DiagnosticsPrinter};
use crate::parser::ast::Root;
use crate::parser::{CstSink, Parser, SyntaxNode};
use crate::{Error, Result};

/// A parsed Tarn source file.
///
/// Parsing always succeeds on grammar violations - the tree is complete,
/// with recovery filling required positions - and fails only on the
/// recursion limit.
#[derive(Debug)]
pub struct Script {
    source: String,
    root: Root,
    diagnostics: Diagnostics,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let parser = Parser::new(&source, CstSink::new(), Diagnostics::new());
        let (sink, diagnostics) = parser.parse()?;
        let root = Root::cast(SyntaxNode::new_root(sink.finish()))
            .expect("parser always produces Root");
        Ok(Self {
            source,
            root,
            diagnostics,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn syntax(&self) -> SyntaxNode {
        self.root.as_cst().clone()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Printer pre-loaded with this script's source.
    pub fn diagnostics_printer(&self) -> DiagnosticsPrinter<'_, '_> {
        self.diagnostics.printer().source(&self.source)
    }
}

impl TryFrom<&str> for Script {
    type Error = Error;

    fn try_from(source: &str) -> Result<Self> {
        Script::new(source)
    }
}
