// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threaded driver that exercises an [`Engine`] under load
//!
//! One OS thread per actor loops think -> request -> eat -> release until the
//! run deadline passes (or, for a deadline beyond what the clock can
//! represent, until stopped). The calling thread acts as monitor: it snapshots the
//! ring at a fixed interval and checks adjacency exclusion on every sample.

use super::config::SimulationConfig;
use super::report::SimulationReport;
use super::SimulationError;
use crate::clock::{Clock, SystemClock};
use crate::coordination::{check_adjacency, Engine, Violation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Cooperative stop signal shared with a running simulation
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    /// Ask every actor to finish its current round and exit
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Decrements the live-actor count when an actor thread exits, panics included
struct Departure(Arc<AtomicUsize>);

impl Drop for Departure {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A configured run over a fresh engine
pub struct Simulation<C: Clock = SystemClock> {
    config: SimulationConfig,
    engine: Arc<Engine>,
    clock: C,
    stop: StopHandle,
}

impl Simulation<SystemClock> {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Simulation<C> {
    pub fn with_clock(config: SimulationConfig, clock: C) -> Result<Self, SimulationError> {
        config.validate()?;
        let engine = Arc::new(Engine::new(config.actors)?);
        Ok(Self {
            config,
            engine,
            clock,
            stop: StopHandle::default(),
        })
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run to completion and report what the monitor saw
    pub fn run(self) -> Result<SimulationReport, SimulationError> {
        let actors = self.config.actors;
        let started = self.clock.now();
        // None: too far out to represent, only a stop ends the run
        let deadline = started.checked_add(self.config.run_for);
        let live = Arc::new(AtomicUsize::new(actors));

        info!(
            actors,
            run_for = ?self.config.run_for,
            "starting simulation"
        );

        let mut handles = Vec::with_capacity(actors);
        for actor in 0..actors {
            let body = ActorLoop {
                actor,
                engine: Arc::clone(&self.engine),
                clock: self.clock.clone(),
                stop: self.stop.clone(),
                deadline,
                think: self.config.think_time(actor),
                eat: self.config.eat_time(actor),
                jitter: self.config.jitter,
                rng: actor_rng(self.config.seed, actor),
            };
            let departure = Departure(Arc::clone(&live));
            let spawned = thread::Builder::new()
                .name(format!("actor-{}", actor))
                .spawn(move || {
                    let _departure = departure;
                    body.run()
                });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    // Actors already running must not outlive the error
                    self.stop.stop();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(SimulationError::Spawn { actor, source });
                }
            }
        }

        let observed = self.monitor(&live);

        let mut rounds = Vec::with_capacity(actors);
        let mut panicked = None;
        for (actor, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(count) => rounds.push(count),
                Err(_) => {
                    error!(actor, "actor thread panicked");
                    panicked.get_or_insert(actor);
                    rounds.push(0);
                }
            }
        }
        if let Some(actor) = panicked {
            return Err(SimulationError::ActorPanicked { actor });
        }

        let report = SimulationReport {
            actors,
            rounds,
            snapshots: observed.snapshots,
            violations: observed.violations,
            first_violation: observed.first_violation,
            elapsed: self.clock.now().saturating_duration_since(started),
            stopped_early: self.stop.is_stopped(),
        };
        info!(
            total_rounds = report.total_rounds(),
            snapshots = report.snapshots,
            violations = report.violations,
            "simulation finished"
        );
        Ok(report)
    }

    /// Poll snapshots until every actor has exited
    fn monitor(&self, live: &AtomicUsize) -> Observed {
        let mut observed = Observed::default();
        while live.load(Ordering::SeqCst) > 0 {
            self.clock.sleep(self.config.monitor_interval);
            let states = self.engine.snapshot();
            observed.snapshots += 1;
            if let Err(violation) = check_adjacency(&states) {
                error!(%violation, ?states, "adjacency exclusion violated");
                observed.violations += 1;
                observed.first_violation.get_or_insert(violation);
            }
        }
        observed
    }
}

#[derive(Default)]
struct Observed {
    snapshots: u64,
    violations: u64,
    first_violation: Option<Violation>,
}

fn actor_rng(seed: Option<u64>, actor: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(actor as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Everything one actor thread needs
struct ActorLoop<C: Clock> {
    actor: usize,
    engine: Arc<Engine>,
    clock: C,
    stop: StopHandle,
    deadline: Option<Instant>,
    think: Duration,
    eat: Duration,
    jitter: Duration,
    rng: StdRng,
}

impl<C: Clock> ActorLoop<C> {
    /// Returns the number of completed rounds
    fn run(mut self) -> u64 {
        let mut rounds = 0;
        while !self.stop.is_stopped() && self.deadline.map_or(true, |d| self.clock.now() < d) {
            let think = self.think + self.jitter();
            self.clock.sleep(think);

            self.engine.request_resources(self.actor);
            let eat = self.eat + self.jitter();
            self.clock.sleep(eat);
            self.engine.release_resources(self.actor);

            rounds += 1;
            debug!(actor = self.actor, round = rounds, "finished round");
        }
        rounds
    }

    fn jitter(&mut self) -> Duration {
        self.rng.gen_range(Duration::ZERO..=self.jitter)
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
