// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives for ring-shaped resource contention
//!
//! This module provides:
//! - **BinaryGate** - Single-permit blocking signal, one per actor
//! - **Engine** - Arbiter that decides which actors may hold their resources
//! - **ActorState** - Per-actor lifecycle plus ring geometry and invariant checks

pub mod engine;
pub mod gate;
pub mod state;

pub use engine::{Engine, EngineError};
pub use gate::BinaryGate;
pub use state::{check_adjacency, left, right, ActorState, Violation};
