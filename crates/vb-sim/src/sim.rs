//! The `Sim` struct and its tick loop.

use log::{debug, info};
use vb_agent::Population;
use vb_core::{ModelConfig, RunConfig, SimRng, Tick};

use crate::{NetPolicy, SimObserver, StepStatistics, step};

/// The main simulation runner.
///
/// Owns the configuration, both populations, the run's single RNG, and the
/// current tick.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Model parameters (grid, rates, intervention).
    pub model: ModelConfig,

    /// Run length, seed, and progress interval.
    pub run: RunConfig,

    /// The tick the next call to [`step`][Self::step] will process.
    pub tick: Tick,

    pub population: Population,

    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process the current tick and advance the clock.
    pub fn step(&mut self) -> StepStatistics {
        let now = self.tick;
        if NetPolicy::from_config(&self.model).activates_at(now) {
            info!("bed nets active from {now}");
        }

        let stats = step(
            &mut self.population.humans,
            &mut self.population.mosquitoes,
            &self.model,
            now,
            &mut self.rng,
        );
        debug!("{now}: {stats:?}");

        self.tick = now.next();
        stats
    }

    /// Run from the current tick to `run.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            "running {} ticks: {} humans, {} mosquitoes on {}x{}, seed {}",
            self.run.total_ticks,
            self.population.human_count(),
            self.population.mosquito_count(),
            self.model.width,
            self.model.height,
            self.run.seed,
        );
        while self.tick < self.run.end_tick() {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);
        let stats = self.step();
        observer.on_tick_end(now, &stats, &self.population);
    }
}
