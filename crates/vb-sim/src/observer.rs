//! Simulation observer trait for progress reporting and data collection.

use log::info;
use vb_agent::Population;
use vb_core::Tick;

use crate::StepStatistics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's tallies and read-only
    /// access to the updated populations.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &StepStatistics, _population: &Population) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every tick's statistics in memory.
#[derive(Debug, Default, Clone)]
pub struct StatsHistory {
    pub rows: Vec<(Tick, StepStatistics)>,
}

impl StatsHistory {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&StepStatistics> {
        self.rows.last().map(|(_, s)| s)
    }
}

impl SimObserver for StatsHistory {
    fn on_tick_end(&mut self, tick: Tick, stats: &StepStatistics, _population: &Population) {
        self.rows.push((tick, *stats));
    }
}

/// Logs a progress line at `info` level every `interval` ticks.
pub struct LogProgress {
    interval: u64,
    total:    u64,
}

impl LogProgress {
    /// `interval == 0` disables the per-tick lines.
    pub fn new(interval: u64, total: u64) -> Self {
        Self { interval, total }
    }
}

impl SimObserver for LogProgress {
    fn on_tick_end(&mut self, tick: Tick, stats: &StepStatistics, _population: &Population) {
        if self.interval > 0 && tick.0.is_multiple_of(self.interval) {
            info!(
                "{tick}/{}: humans I={} R={} S={}, mosquitoes infected={} hungry={}",
                self.total,
                stats.human_infected,
                stats.human_resistant,
                stats.human_susceptible,
                stats.mosquito_infected,
                stats.mosquito_hungry,
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!("simulation finished at {final_tick}");
    }
}

/// Fans every callback out to two observers, `.0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &StepStatistics, population: &Population) {
        self.0.on_tick_end(tick, stats, population);
        self.1.on_tick_end(tick, stats, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
