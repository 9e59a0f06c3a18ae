// src/application/guard.rs
//
// Single in-flight submission gate.
//
// A front end holds one guard per form. While a permit is alive any further
// acquire attempt fails; dropping the permit reopens the gate.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct SubmissionGuard {
    busy: AtomicBool,
}

/// Proof that the holder owns the gate. Released on drop.
#[derive(Debug)]
pub struct SubmissionPermit<'a> {
    guard: &'a SubmissionGuard,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the gate, or `None` if a submission is already in flight
    pub fn try_acquire(&self) -> Option<SubmissionPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionPermit { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for SubmissionPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
