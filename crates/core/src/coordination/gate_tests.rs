// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use yare::parameterized;

#[parameterized(
    closed = { false },
    open = { true },
)]
fn new_gate_reflects_initial_value(initially_available: bool) {
    let gate = BinaryGate::new(initially_available);
    assert_eq!(gate.is_available(), initially_available);
}

#[test]
fn default_gate_is_closed() {
    assert!(!BinaryGate::default().is_available());
}

#[test]
fn release_does_not_accumulate_permits() {
    let gate = BinaryGate::new(false);
    gate.release();
    gate.release();
    assert!(gate.is_available());

    // First acquire consumes the only permit without blocking
    gate.acquire();
    assert!(!gate.is_available());

    // A second acquire would block
    assert!(!gate.try_acquire());
    assert!(!gate.acquire_timeout(Duration::from_millis(20)));
}

#[test]
fn try_acquire_consumes_open_gate() {
    let gate = BinaryGate::new(true);
    assert!(gate.try_acquire());
    assert!(!gate.try_acquire());
}

#[test]
fn acquire_timeout_returns_true_when_released_in_time() {
    let gate = Arc::new(BinaryGate::new(false));
    let releaser = {
        let gate = Arc::clone(&gate);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            gate.release();
        })
    };

    assert!(gate.acquire_timeout(Duration::from_secs(10)));
    releaser.join().unwrap();
    assert!(!gate.is_available());
}

#[test]
fn acquire_waits_for_release_from_another_thread() {
    let gate = Arc::new(BinaryGate::new(false));
    let value = Arc::new(AtomicUsize::new(1));

    let adder = {
        let gate = Arc::clone(&gate);
        let value = Arc::clone(&value);
        thread::spawn(move || {
            gate.acquire();
            value.fetch_add(1, Ordering::SeqCst);
        })
    };

    // Doubling happens strictly before the waiter is let through
    value.store(value.load(Ordering::SeqCst) * 2, Ordering::SeqCst);
    gate.release();
    adder.join().unwrap();

    assert_eq!(value.load(Ordering::SeqCst), 3);
}

#[test]
fn blocked_acquire_stays_blocked_until_release() {
    let gate = Arc::new(BinaryGate::new(false));
    let passed = Arc::new(AtomicBool::new(false));

    let waiter = {
        let gate = Arc::clone(&gate);
        let passed = Arc::clone(&passed);
        thread::spawn(move || {
            gate.acquire();
            passed.store(true, Ordering::SeqCst);
        })
    };

    thread::sleep(Duration::from_millis(30));
    assert!(!passed.load(Ordering::SeqCst));

    gate.release();
    waiter.join().unwrap();
    assert!(passed.load(Ordering::SeqCst));
}

#[test]
fn one_release_wakes_one_of_many_waiters() {
    let gate = Arc::new(BinaryGate::new(false));
    let woken = Arc::new(AtomicUsize::new(0));

    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let gate = Arc::clone(&gate);
            let woken = Arc::clone(&woken);
            thread::spawn(move || {
                if gate.acquire_timeout(Duration::from_millis(300)) {
                    woken.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(20));
    gate.release();
    for waiter in waiters {
        waiter.join().unwrap();
    }

    assert_eq!(woken.load(Ordering::SeqCst), 1);
}
