// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Loaded from TOML; durations use humantime notation (`"250ms"`, `"10s"`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Timing and shape of a ring simulation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of actors on the ring
    pub actors: usize,
    /// How long actors keep starting new rounds
    #[serde(with = "humantime_serde")]
    pub run_for: Duration,
    /// Base think time per actor, cycled when shorter than `actors`
    #[serde(with = "duration_list")]
    pub think: Vec<Duration>,
    /// Base eat time per actor, cycled when shorter than `actors`
    #[serde(with = "duration_list")]
    pub eat: Vec<Duration>,
    /// Upper bound of the random delay added to every think and eat
    #[serde(with = "humantime_serde")]
    pub jitter: Duration,
    /// How often the monitor snapshots the ring
    #[serde(with = "humantime_serde")]
    pub monitor_interval: Duration,
    /// Seed for reproducible timing; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            actors: 5,
            run_for: Duration::from_secs(10),
            // one fast, one very slow, one slow, two quick
            think: millis(&[0, 40, 20, 1, 1]),
            eat: millis(&[0, 10, 5, 1, 1]),
            jitter: Duration::from_millis(30),
            monitor_interval: Duration::from_millis(23),
            seed: None,
        }
    }
}

fn millis(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_millis).collect()
}

impl SimulationConfig {
    pub fn new(actors: usize) -> Self {
        Self {
            actors,
            ..Self::default()
        }
    }

    pub fn with_actors(mut self, actors: usize) -> Self {
        self.actors = actors;
        self
    }

    pub fn with_run_for(mut self, run_for: Duration) -> Self {
        self.run_for = run_for;
        self
    }

    pub fn with_timings(mut self, think: Vec<Duration>, eat: Vec<Duration>) -> Self {
        self.think = think;
        self.eat = eat;
        self
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_monitor_interval(mut self, interval: Duration) -> Self {
        self.monitor_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read and parse a TOML file without validating it, so callers can
    /// apply overrides first
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actors == 0 {
            return Err(ConfigError::Invalid("actors must be at least 1".into()));
        }
        if self.think.is_empty() || self.eat.is_empty() {
            return Err(ConfigError::Invalid(
                "think and eat need at least one duration each".into(),
            ));
        }
        if self.monitor_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "monitor_interval must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Base think time for `actor`
    pub fn think_time(&self, actor: usize) -> Duration {
        cycled(&self.think, actor)
    }

    /// Base eat time for `actor`
    pub fn eat_time(&self, actor: usize) -> Duration {
        cycled(&self.eat, actor)
    }
}

fn cycled(values: &[Duration], actor: usize) -> Duration {
    if values.is_empty() {
        return Duration::ZERO;
    }
    values[actor % values.len()]
}

/// humantime encoding for a list of durations
mod duration_list {
    use humantime_serde::Serde;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(values: &[Duration], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().copied().map(Serde::from))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Duration>, D::Error> {
        let raw = Vec::<Serde<Duration>>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(Serde::into_inner).collect())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
