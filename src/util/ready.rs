//! One-shot readiness latch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page readiness can be signaled by more than one producer (a browser event
//! and a ceiling timer). The first producer to fire wins; later fires are
//! no-ops, so producers never need to coordinate teardown order.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// First-writer-wins latch around a readiness action.
///
/// Clones share the same latch, so each producer can hold its own handle.
#[derive(Clone)]
pub struct ReadyLatch {
    fired: Arc<AtomicBool>,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl ReadyLatch {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            fired: Arc::new(AtomicBool::new(false)),
            action: Arc::new(action),
        }
    }

    /// Run the action if no producer has fired yet.
    pub fn fire(&self) {
        if !self.fired.swap(true, Ordering::Relaxed) {
            (self.action)();
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}
