//! Invariant checks for the driver's progress guarantee.

use crate::diagnostics::ErrorReporter;

use super::core::Parser;
use super::sink::TreeSink;

impl<S: TreeSink, R: ErrorReporter> Parser<'_, S, R> {
    /// Debug builds abort if the driver keeps looking at the input without
    /// consuming anything. Release builds rely on the one-fix-per-token
    /// recovery contract.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        debug_assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads without consuming"
        );
        #[cfg(debug_assertions)]
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }

    #[inline]
    pub(super) fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }
}
