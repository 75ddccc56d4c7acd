// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource arbitration engine for a ring of contending actors
//!
//! Every actor needs the two resources it shares with its neighbours before
//! it may proceed. All state transitions happen under one mutex; each actor
//! additionally owns a [`BinaryGate`] it blocks on while hungry.
//!
//! Deciding who may eat and waking the winner are separate steps: the thread
//! that changes the table (under the lock) opens the winner's gate, and the
//! winner resumes on its own thread after the lock has been dropped. The lock
//! is never held across a blocking wait.
//!
//! The promotion rule does not queue hungry actors, so a neighbour pair that
//! keeps re-acquiring can delay an actor indefinitely. Only safety and
//! deadlock-freedom are provided.

use super::gate::BinaryGate;
use super::state::{left, right, ActorState};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Errors raised when building an engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("a ring needs at least one actor, got {count}")]
    InvalidActorCount { count: usize },
}

/// Transition rules over the state vector.
///
/// Pure bookkeeping: callers hold the engine lock and act on the returned
/// promotions by opening gates.
#[derive(Clone, Debug)]
struct Table {
    states: Vec<ActorState>,
}

impl Table {
    fn new(actors: usize) -> Self {
        Self {
            states: vec![ActorState::Thinking; actors],
        }
    }

    fn check_range(&self, actor: usize) {
        assert!(
            actor < self.states.len(),
            "actor {} out of range for a ring of {}",
            actor,
            self.states.len()
        );
    }

    /// Mark `actor` hungry and try to promote it. Returns whether it was promoted.
    fn hunger(&mut self, actor: usize) -> bool {
        self.check_range(actor);
        let state = self.states[actor];
        assert!(
            state == ActorState::Thinking,
            "actor {} requested resources while {}",
            actor,
            state
        );
        self.states[actor] = ActorState::Hungry;
        self.try_promote(actor)
    }

    /// Put `actor` back to thinking and re-evaluate its neighbours, right
    /// first. Returns the neighbours that were promoted.
    fn satisfy(&mut self, actor: usize) -> [Option<usize>; 2] {
        self.check_range(actor);
        let state = self.states[actor];
        assert!(
            state == ActorState::Eating,
            "actor {} released resources while {}",
            actor,
            state
        );
        self.states[actor] = ActorState::Thinking;

        let n = self.states.len();
        let mut promoted = [None, None];
        for (slot, neighbor) in promoted.iter_mut().zip([right(actor, n), left(actor, n)]) {
            if self.try_promote(neighbor) {
                *slot = Some(neighbor);
            }
        }
        promoted
    }

    fn try_promote(&mut self, actor: usize) -> bool {
        let n = self.states.len();
        if self.states[actor] == ActorState::Hungry
            && !self.states[left(actor, n)].is_eating()
            && !self.states[right(actor, n)].is_eating()
        {
            self.states[actor] = ActorState::Eating;
            tracing::trace!(actor, state = %ActorState::Eating, "promoted");
            return true;
        }
        false
    }
}

/// Central arbiter for `n` actors seated on a ring
#[derive(Debug)]
pub struct Engine {
    table: Mutex<Table>,
    gates: Vec<BinaryGate>,
}

impl Engine {
    /// Create an engine with every actor thinking and every gate closed
    pub fn new(actors: usize) -> Result<Self, EngineError> {
        if actors < 1 {
            return Err(EngineError::InvalidActorCount { count: actors });
        }
        Ok(Self {
            table: Mutex::new(Table::new(actors)),
            gates: (0..actors).map(|_| BinaryGate::new(false)).collect(),
        })
    }

    /// Number of actors on the ring
    pub fn actors(&self) -> usize {
        self.gates.len()
    }

    /// Block until `actor` holds both of its resources.
    ///
    /// # Panics
    ///
    /// Panics if `actor` is out of range or not currently thinking.
    pub fn request_resources(&self, actor: usize) {
        {
            let mut table = self.lock_table();
            let promoted = table.hunger(actor);
            tracing::trace!(actor, state = %table.states[actor], "requested resources");
            if promoted {
                self.gates[actor].release();
            } else {
                tracing::debug!(actor, state = %ActorState::Hungry, "waiting for neighbours");
            }
        }
        self.gates[actor].acquire();
    }

    /// Give up both resources held by `actor` and wake any neighbour that
    /// becomes eligible.
    ///
    /// # Panics
    ///
    /// Panics if `actor` is out of range or not currently eating.
    pub fn release_resources(&self, actor: usize) {
        let mut table = self.lock_table();
        let promoted = table.satisfy(actor);
        tracing::trace!(actor, state = %table.states[actor], "released resources");
        for neighbor in promoted.into_iter().flatten() {
            self.gates[neighbor].release();
        }
    }

    /// Consistent copy of every actor's state
    pub fn snapshot(&self) -> Vec<ActorState> {
        self.lock_table().states.clone()
    }

    /// Current state of a single actor
    pub fn state(&self, actor: usize) -> ActorState {
        let table = self.lock_table();
        table.check_range(actor);
        table.states[actor]
    }

    fn lock_table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
