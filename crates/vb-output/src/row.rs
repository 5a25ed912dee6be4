//! Plain data row written by output backends.

use vb_core::Tick;
use vb_sim::StepStatistics;

/// Column names, in record order.
pub const STATS_HEADER: [&str; 6] = [
    "step",
    "humanInfected",
    "humanResistant",
    "humanSusceptible",
    "mosquitoInfected",
    "mosquitoHungry",
];

/// One step's statistics, ready to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRow {
    pub step:              u64,
    pub human_infected:    u64,
    pub human_resistant:   u64,
    pub human_susceptible: u64,
    pub mosquito_infected: u64,
    pub mosquito_hungry:   u64,
}

impl StatsRow {
    pub fn new(tick: Tick, stats: &StepStatistics) -> Self {
        Self {
            step:              tick.0,
            human_infected:    stats.human_infected,
            human_resistant:   stats.human_resistant,
            human_susceptible: stats.human_susceptible,
            mosquito_infected: stats.mosquito_infected,
            mosquito_hungry:   stats.mosquito_hungry,
        }
    }

    /// Fields in [`STATS_HEADER`] order.
    pub fn fields(&self) -> [u64; 6] {
        [
            self.step,
            self.human_infected,
            self.human_resistant,
            self.human_susceptible,
            self.mosquito_infected,
            self.mosquito_hungry,
        ]
    }
}
