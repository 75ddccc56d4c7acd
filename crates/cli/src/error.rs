// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use dine_core::{SimulationReport, Violation};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct DineError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DineError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for DineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for DineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl DineError {
    /// Error for a ring with no seats.
    pub fn invalid_actor_count(count: usize) -> Self {
        DineError::new(format!("Cannot build a ring of {} actors", count))
            .with_context("Every ring needs at least one actor")
            .with_suggestion("Pass a positive count: dine run --actors 5")
            .with_suggestion("Check the `actors` key in your config file")
    }

    /// Error for a config file that could not be read or parsed.
    pub fn config_unreadable<E: std::error::Error + Send + Sync + 'static>(
        path: &Path,
        source: E,
    ) -> Self {
        DineError::new(format!("Failed to load config '{}'", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Print a valid starting point: dine config > dine.toml")
            .with_source(source)
    }

    /// Error for a config that parsed but does not describe a runnable simulation.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        DineError::new("Invalid simulation configuration")
            .with_context(reason)
            .with_suggestion("Compare against the defaults: dine config")
    }

    /// Error for a run whose monitor saw two neighbours eating together.
    pub fn invariant_violated(report: &SimulationReport, first: Violation) -> Self {
        DineError::new("Adjacency exclusion was violated")
            .with_context(format!(
                "{} of {} snapshots were inconsistent",
                report.violations, report.snapshots
            ))
            .with_context(format!("First observed: {}", first))
            .with_suggestion("Re-run with -vv to trace promotions")
            .with_suggestion("Pin the timing with --seed to reproduce")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DineError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_invalid_actor_count_error() {
        let output = DineError::invalid_actor_count(0).to_string();
        assert!(output.contains("ring of 0 actors"));
        assert!(output.contains("--actors"));
    }

    #[test]
    fn test_config_unreadable_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DineError::config_unreadable(Path::new("/tmp/dine.toml"), io);
        assert!(err.to_string().contains("/tmp/dine.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
