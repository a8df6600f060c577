//! Deferred actions owned by a form controller.
//!
//! Actions are scheduled against a deadline and fired by the owner's `tick`.
//! Dropping or tearing down the owner drops every pending action with it.

use std::time::{Duration, Instant};

/// Pending actions ordered by deadline.
///
#[derive(Debug, Clone)]
pub struct Deferred<A> {
    pending: Vec<(Instant, A)>,
}

impl<A> Default for Deferred<A> {
    fn default() -> Self {
        Deferred { pending: vec![] }
    }
}

impl<A: PartialEq> Deferred<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay` after `now`, replacing an earlier
    /// schedule of the same action.
    ///
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) {
        self.cancel(&action);
        let deadline = now + delay;
        let index = self
            .pending
            .iter()
            .position(|(at, _)| *at > deadline)
            .unwrap_or(self.pending.len());
        self.pending.insert(index, (deadline, action));
    }

    pub fn cancel(&mut self, action: &A) {
        self.pending.retain(|(_, pending)| pending != action);
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, action: &A) -> bool {
        self.pending.iter().any(|(_, pending)| pending == action)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every action whose deadline has passed, earliest
    /// first.
    ///
    pub fn take_due(&mut self, now: Instant) -> Vec<A> {
        let split = self
            .pending
            .iter()
            .position(|(at, _)| *at > now)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).map(|(_, action)| action).collect()
    }
}
