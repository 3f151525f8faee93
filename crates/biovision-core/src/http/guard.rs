//! One request in flight per control

use std::cell::Cell;
use std::rc::Rc;

/// Single-flight flag for a control that issues requests
///
/// Clones share the flag, so the handler that starts a request and the
/// callbacks that end it see the same state. Release it in both the success
/// and the failure path.
#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    busy: Rc<Cell<bool>>,
}

impl RequestGuard {
    /// Create an idle guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard; `false` if a request is already in flight
    pub fn try_begin(&self) -> bool {
        if self.busy.get() {
            return false;
        }
        self.busy.set(true);
        true
    }

    /// Release after the request completed
    pub fn finish(&self) {
        self.busy.set(false);
    }

    /// Check if a request is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}
