//! Tree listener sinks.
//!
//! The driver announces the parse as an ordered event stream: nodes open and
//! close in source order, tokens (trivia included) arrive as they are
//! consumed, and recovery contributes missing-node and invalid-token events.
//! Sinks never see events from mid-exploration; only committed steps reach
//! them.

use rowan::{GreenNode, GreenNodeBuilder};

use super::cst::SyntaxKind;

/// Receiver for parse events, injected at parser construction.
pub trait TreeSink {
    fn enter_node(&mut self, kind: SyntaxKind);
    fn exit_node(&mut self);
    /// A consumed token, trivia included.
    fn token(&mut self, kind: SyntaxKind, text: &str);
    /// A synthetic node inserted by recovery for a required position.
    fn missing_node(&mut self, kind: SyntaxKind);
    /// An input token recovery removed from the parse, preserved for
    /// diagnostics and losslessness.
    fn invalid_token(&mut self, kind: SyntaxKind, text: &str);
    /// An absent optional position.
    fn empty_node(&mut self);
}

/// Builds a lossless Rowan tree from the event stream.
pub struct CstSink {
    builder: GreenNodeBuilder<'static>,
}

impl CstSink {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn finish(self) -> GreenNode {
        self.builder.finish()
    }
}

impl Default for CstSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeSink for CstSink {
    fn enter_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn exit_node(&mut self) {
        self.builder.finish_node();
    }

    fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(kind.into(), text);
    }

    fn missing_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(SyntaxKind::Missing.into());
        if kind.is_token() {
            // Zero-width token records what was expected without adding text.
            self.builder.token(kind.into(), "");
        }
        self.builder.finish_node();
    }

    fn invalid_token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.start_node(SyntaxKind::Error.into());
        self.builder.token(kind.into(), text);
        self.builder.finish_node();
    }

    fn empty_node(&mut self) {
        // Absent optionals leave no trace in the tree.
    }
}

/// Records the event stream as readable lines. Test double.
#[derive(Debug, Default)]
pub struct EventSink {
    events: Vec<String>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn into_events(self) -> Vec<String> {
        self.events
    }
}

impl TreeSink for EventSink {
    fn enter_node(&mut self, kind: SyntaxKind) {
        self.events.push(format!("enter {kind:?}"));
    }

    fn exit_node(&mut self) {
        self.events.push("exit".to_string());
    }

    fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.events.push(format!("token {kind:?} {text:?}"));
    }

    fn missing_node(&mut self, kind: SyntaxKind) {
        self.events.push(format!("missing {kind:?}"));
    }

    fn invalid_token(&mut self, kind: SyntaxKind, text: &str) {
        self.events.push(format!("invalid {kind:?} {text:?}"));
    }

    fn empty_node(&mut self) {
        self.events.push("empty".to_string());
    }
}
