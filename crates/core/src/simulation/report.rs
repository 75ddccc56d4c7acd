// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of a simulation run

use crate::coordination::Violation;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// What the driver and its monitor observed
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub actors: usize,
    /// Completed rounds (meals) per actor
    pub rounds: Vec<u64>,
    /// Snapshots taken by the monitor
    pub snapshots: u64,
    /// Snapshots that broke adjacency exclusion
    pub violations: u64,
    /// The first offending pair, if any
    pub first_violation: Option<Violation>,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
    /// Whether the run was ended through a stop handle
    pub stopped_early: bool,
}

impl SimulationReport {
    pub fn is_safe(&self) -> bool {
        self.violations == 0
    }

    pub fn total_rounds(&self) -> u64 {
        self.rounds.iter().sum()
    }

    /// Gap between the best and worst fed actor
    pub fn spread(&self) -> u64 {
        let min = self.rounds.iter().min().copied().unwrap_or(0);
        let max = self.rounds.iter().max().copied().unwrap_or(0);
        max - min
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8} ROUNDS", "ACTOR")?;
        for (actor, rounds) in self.rounds.iter().enumerate() {
            writeln!(f, "{:<8} {}", actor, rounds)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Rounds: {} total, spread {}",
            self.total_rounds(),
            self.spread()
        )?;
        writeln!(f, "Snapshots: {}", self.snapshots)?;
        let elapsed = Duration::from_millis(self.elapsed.as_millis() as u64);
        write!(f, "Elapsed: {}", humantime::format_duration(elapsed))?;
        if self.stopped_early {
            write!(f, " (stopped early)")?;
        }
        if let Some(violation) = &self.first_violation {
            writeln!(f)?;
            write!(f, "Violations: {} (first: {})", self.violations, violation)?;
        }
        Ok(())
    }
}
