// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ring simulation: actor threads contending through one [`Engine`](crate::Engine)

mod config;
mod driver;
mod report;

pub use config::{ConfigError, SimulationConfig};
pub use driver::{Simulation, StopHandle};
pub use report::SimulationReport;

use crate::coordination::EngineError;
use thiserror::Error;

/// Errors that end a simulation before it produces a report
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("failed to spawn actor {actor}: {source}")]
    Spawn {
        actor: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("actor {actor} panicked")]
    ActorPanicked { actor: usize },
}
