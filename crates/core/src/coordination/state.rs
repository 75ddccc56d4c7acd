// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor states and ring geometry
//!
//! Actors sit on a fixed ring of `n` seats. Each one shares a resource with
//! its left and right neighbour, so two adjacent actors may never eat at the
//! same time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a single actor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorState {
    /// Not interested in the shared resources
    #[default]
    Thinking,
    /// Waiting to be promoted
    Hungry,
    /// Holds both shared resources
    Eating,
}

impl ActorState {
    pub fn is_eating(self) -> bool {
        matches!(self, ActorState::Eating)
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActorState::Thinking => "thinking",
            ActorState::Hungry => "hungry",
            ActorState::Eating => "eating",
        };
        f.write_str(s)
    }
}

/// Index of the neighbour counter-clockwise from `actor` on a ring of `n`
pub fn left(actor: usize, n: usize) -> usize {
    (actor + n - 1) % n
}

/// Index of the neighbour clockwise from `actor` on a ring of `n`
pub fn right(actor: usize, n: usize) -> usize {
    (actor + 1) % n
}

/// Two ring-adjacent actors observed eating at the same time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub actor: usize,
    pub neighbor: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "adjacent actors {} and {} are both eating",
            self.actor, self.neighbor
        )
    }
}

/// Check the adjacency-exclusion invariant over a full state vector.
///
/// Returns the first offending pair `(i, right(i))`. A ring of one actor has
/// no distinct neighbours and can never violate the invariant.
pub fn check_adjacency(states: &[ActorState]) -> Result<(), Violation> {
    let n = states.len();
    for (actor, state) in states.iter().enumerate() {
        let neighbor = right(actor, n);
        if neighbor != actor && state.is_eating() && states[neighbor].is_eating() {
            return Err(Violation { actor, neighbor });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
