//! Recovery engine: bounded lookahead search over the grammar's future rules.
//!
//! Anchored at a failing token, the engine explores two hypotheses per
//! mismatch: the expected terminal is missing (insert a synthetic node and
//! move on) or the token is spurious (drop it and try the same terminal
//! again). Each hypothetical path is walked up to a fixed horizon, counting
//! the rules it matches without further fixes; the engine commits the single
//! front fix of the best-scoring path and hands control back to the driver.
//!
//! Exploration reads through `peek_nth` only and walks a cloned context
//! stack. Nothing observable happens until a fix commits: one diagnostic,
//! one tree event, at most one consumed token.

use std::collections::VecDeque;

use crate::diagnostics::ErrorReporter;

use super::buffer::MAX_LOOKAHEAD;
use super::core::Parser;
use super::cst::SyntaxKind;
use super::rules::{Rule, RuleKind, RuleStack, enter_rule, next_rule};
use super::sink::TreeSink;

/// How deep a hypothetical path may go. Matches the buffer's lookahead bound.
pub(super) const LOOKAHEAD_LIMIT: usize = MAX_LOOKAHEAD;

/// What the driver should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    /// Proceed as if `rule` were present. For a terminal the synthetic node
    /// is already emitted; for a production or an alternatives rule the
    /// driver re-enters it and the inner expectation reports once.
    Insert { rule: Rule },
    /// The offending token is gone; the expectation stands.
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixAction {
    Insert,
    Remove,
}

/// One edit on a hypothetical path.
#[derive(Debug, Clone)]
struct Fix {
    action: FixAction,
    rule: Rule,
    /// Production open at the mismatch, on the exploration clone.
    enclosing: Option<Rule>,
    #[allow(dead_code)] // kept for Debug output when tracing recovery
    token_text: String,
}

/// Score of one explored path. `matches` counts rules matched without a fix;
/// the deque holds fixes in traversal order, earliest first.
#[derive(Debug, Default)]
struct SearchResult {
    matches: u32,
    fixes: VecDeque<Fix>,
}

impl<S: TreeSink, R: ErrorReporter> Parser<'_, S, R> {
    /// Decides how to get past a mismatch at `rule`. Emits the diagnostic and
    /// tree event for the committed fix; consumes at most one token.
    pub(super) fn recover(&mut self, rule: Rule) -> Action {
        let look = self.buffer.peek();

        // End of input admits no deletion; fill the position and move on.
        if look.kind == SyntaxKind::Eof {
            let anchor = self.missing_anchor();
            self.reporter.missing_token(rule.describe(), anchor);
            self.sink.missing_node(rule.placeholder());
            return Action::Insert { rule };
        }

        // An isolated semicolon in statement position is an empty statement,
        // not a missing one: drop it and keep reading statements.
        if rule == Rule::Statement && look.kind == SyntaxKind::Semicolon {
            return self.remove_token();
        }

        let mut ctx = self.context.clone();
        let result = self.seek(&mut ctx, rule, 1, 0);

        // No path made progress: consuming the offending token is the one
        // deletion allowed without it, and guarantees termination.
        if result.matches == 0 {
            return self.remove_token();
        }

        match result.fixes.front() {
            None => Action::Insert { rule },
            Some(fix) if fix.action == FixAction::Remove => self.remove_token(),
            Some(fix) => match rule.kind() {
                RuleKind::Terminal(_) => {
                    // The anchor mismatch is always the earliest fix.
                    debug_assert_eq!(fix.rule, rule);
                    let anchor = self.missing_anchor();
                    self.reporter.missing_token(rule.describe(), anchor);
                    self.sink.missing_node(rule.placeholder());
                    Action::Insert { rule }
                }
                // Re-enter the matched alternative so the mismatch is
                // reported once, by the rule that owns it.
                RuleKind::Alternatives(alts) => {
                    let chosen = fix
                        .enclosing
                        .filter(|enclosing| alts.contains(enclosing))
                        .unwrap_or(alts[0]);
                    Action::Insert { rule: chosen }
                }
                RuleKind::Production => Action::Insert { rule },
            },
        }
    }

    /// Commits the deletion of the upcoming token.
    fn remove_token(&mut self) -> Action {
        self.flush_trivia();
        let token = self.buffer.consume();
        let text = self.text_of(&token);
        self.reporter.invalid_token(text, token.span);
        self.sink.invalid_token(token.kind, text);
        self.reset_debug_fuel();
        Action::Remove
    }

    /// Walks one hypothetical path from `(rule, peek(k))`.
    fn seek(&mut self, ctx: &mut RuleStack, rule: Rule, k: usize, depth: usize) -> SearchResult {
        if depth >= LOOKAHEAD_LIMIT {
            return SearchResult::default();
        }
        let look = self.buffer.peek_nth(k);
        match rule.kind() {
            RuleKind::Production => {
                let first = enter_rule(ctx, rule, look.kind);
                self.seek(ctx, first, k, depth)
            }
            RuleKind::Alternatives(alternatives) => {
                self.seek_alternatives(ctx, alternatives, k, depth)
            }
            RuleKind::Terminal(expected) => {
                if expected.contains(look.kind) {
                    let mut result = if look.kind == SyntaxKind::Eof
                        || depth + 1 >= LOOKAHEAD_LIMIT
                    {
                        SearchResult::default()
                    } else {
                        let after = self.buffer.peek_nth(k + 1).kind;
                        let next = next_rule(ctx, rule, after);
                        self.seek(ctx, next, k + 1, depth + 1)
                    };
                    result.matches += 1;
                    result
                } else {
                    self.fix_and_continue(ctx, rule, k, depth)
                }
            }
        }
    }

    /// Scores the insertion and deletion hypotheses for one mismatch and
    /// keeps the better path. Ties prefer insertion: never delete input
    /// unnecessarily.
    fn fix_and_continue(
        &mut self,
        ctx: &mut RuleStack,
        rule: Rule,
        k: usize,
        depth: usize,
    ) -> SearchResult {
        let look = self.buffer.peek_nth(k);
        let enclosing = ctx.top();

        let mut insert_ctx = ctx.clone();
        let next = next_rule(&mut insert_ctx, rule, look.kind);
        let mut insertion = self.seek(&mut insert_ctx, next, k, depth + 1);

        let deletion = if look.kind == SyntaxKind::Eof {
            None
        } else {
            let mut delete_ctx = ctx.clone();
            Some(self.seek(&mut delete_ctx, rule, k + 1, depth + 1))
        };

        match deletion {
            Some(mut deletion) if deletion.matches > insertion.matches => {
                deletion.fixes.push_front(Fix {
                    action: FixAction::Remove,
                    rule,
                    enclosing,
                    token_text: self.text_of(&look).to_string(),
                });
                deletion
            }
            _ => {
                insertion.fixes.push_front(Fix {
                    action: FixAction::Insert,
                    rule,
                    enclosing,
                    token_text: rule.describe().to_string(),
                });
                insertion
            }
        }
    }

    /// Scores every alternative from the same anchor. Highest `matches`
    /// wins, then fewest fixes, then declaration order.
    fn seek_alternatives(
        &mut self,
        ctx: &RuleStack,
        alternatives: &[Rule],
        k: usize,
        depth: usize,
    ) -> SearchResult {
        let mut best: Option<SearchResult> = None;
        for &alternative in alternatives {
            let mut alt_ctx = ctx.clone();
            let candidate = self.seek(&mut alt_ctx, alternative, k, depth);
            let better = match &best {
                None => true,
                Some(current) => {
                    candidate.matches > current.matches
                        || (candidate.matches == current.matches
                            && candidate.fixes.len() < current.fixes.len())
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best.unwrap_or_default()
    }
}
