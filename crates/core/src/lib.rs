// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dine-core: shared-memory arbitration for a ring of contending actors
//!
//! This crate provides:
//! - A single-permit blocking gate
//! - An engine that grants each actor both resources it shares with its
//!   neighbours, never to two neighbours at once
//! - A threaded simulation driver with an invariant-checking monitor

pub mod clock;
pub mod coordination;
pub mod simulation;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use coordination::{check_adjacency, ActorState, BinaryGate, Engine, EngineError, Violation};
pub use simulation::{
    ConfigError, Simulation, SimulationConfig, SimulationError, SimulationReport, StopHandle,
};
