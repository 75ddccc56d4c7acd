// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dine run` - Run a ring simulation and report what the monitor saw

use crate::error::DineError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use dine_core::{ConfigError, Simulation, SimulationConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Number of actors on the ring
    #[arg(short = 'n', long)]
    pub actors: Option<usize>,

    /// How long actors keep starting new rounds (e.g. "10s", "500ms")
    #[arg(short, long, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// Upper bound of the random delay added to each think and eat
    #[arg(long, value_parser = humantime::parse_duration)]
    pub jitter: Option<Duration>,

    /// Seed for reproducible timing
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with simulation settings; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn handle(args: RunArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!(actors = config.actors, "configured simulation");

    let simulation = Simulation::new(config)?;
    let stop = simulation.stop_handle();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping simulation...");
        stop.stop();
    })?;

    let report = simulation.run()?;
    output::print(&report, args.format)?;

    if let Some(first) = report.first_violation {
        return Err(DineError::invariant_violated(&report, first).into());
    }
    Ok(())
}

/// Load the config file (if any), apply flag overrides and validate
pub fn resolve_config(args: &RunArgs) -> Result<SimulationConfig, DineError> {
    let mut config = match &args.config {
        Some(path) => {
            SimulationConfig::read(path).map_err(|err| DineError::config_unreadable(path, err))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(actors) = args.actors {
        config.actors = actors;
    }
    if let Some(duration) = args.duration {
        config.run_for = duration;
    }
    if let Some(jitter) = args.jitter {
        config.jitter = jitter;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if config.actors == 0 {
        return Err(DineError::invalid_actor_count(config.actors));
    }
    config.validate().map_err(|err| match err {
        ConfigError::Invalid(reason) => DineError::invalid_config(reason),
        other => DineError::invalid_config(other.to_string()),
    })?;
    Ok(config)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
