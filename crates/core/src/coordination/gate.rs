// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary gate: a single-permit blocking signal
//!
//! One thread waits for the gate to open, any other thread opens it. Opening
//! an already open gate is a no-op; permits never accumulate beyond one.

use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Single-permit gate built from a mutex-guarded flag and a condition variable
#[derive(Debug, Default)]
pub struct BinaryGate {
    available: Mutex<bool>,
    opened: Condvar,
}

impl BinaryGate {
    /// Create a gate, optionally holding its permit already
    pub fn new(initially_available: bool) -> Self {
        Self {
            available: Mutex::new(initially_available),
            opened: Condvar::new(),
        }
    }

    /// Block until the permit is available, then consume it
    pub fn acquire(&self) {
        let guard = self.available.lock().unwrap_or_else(|e| e.into_inner());
        let mut available = self
            .opened
            .wait_while(guard, |available| !*available)
            .unwrap_or_else(|e| e.into_inner());
        *available = false;
    }

    /// Consume the permit if it is available, without blocking
    pub fn try_acquire(&self) -> bool {
        let mut available = self.available.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *available, false)
    }

    /// Like [`acquire`](Self::acquire), but give up after `timeout`.
    ///
    /// Returns `true` if the permit was consumed.
    pub fn acquire_timeout(&self, timeout: Duration) -> bool {
        let guard = self.available.lock().unwrap_or_else(|e| e.into_inner());
        let (mut available, _) = self
            .opened
            .wait_timeout_while(guard, timeout, |available| !*available)
            .unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *available, false)
    }

    /// Make the permit available and wake at most one waiter
    pub fn release(&self) {
        {
            let mut available = self.available.lock().unwrap_or_else(|e| e.into_inner());
            *available = true;
        }
        self.opened.notify_one();
    }

    /// Whether the permit is currently available
    pub fn is_available(&self) -> bool {
        *self.available.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
