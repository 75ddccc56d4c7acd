// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dine config` - Print the default simulation settings as TOML

use anyhow::Result;
use clap::Args;
use dine_core::SimulationConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Number of actors to put in the printed config
    #[arg(short = 'n', long)]
    pub actors: Option<usize>,
}

pub fn handle(args: ConfigArgs) -> Result<()> {
    let mut config = SimulationConfig::default();
    if let Some(actors) = args.actors {
        config = config.with_actors(actors);
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
