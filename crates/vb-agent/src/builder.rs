//! Population factory: random placement plus index-threshold initial states.
//!
//! # Usage
//!
//! ```rust
//! use vb_agent::initialize;
//! use vb_core::{ModelConfig, SimRng};
//!
//! let config = ModelConfig { n_human: 10, n_mosquito: 20, ..ModelConfig::default() };
//! let mut rng = SimRng::new(42);
//! let population = initialize(&config, &mut rng).unwrap();
//!
//! assert_eq!(population.human_count(), 10);
//! assert_eq!(population.mosquito_count(), 20);
//! ```
//!
//! # Initial states
//!
//! Agent `i` of `n` gets the positive initial value (`Infected` for humans,
//! `hungry` for mosquitoes) iff `i / n <= fraction`.  This is a deterministic
//! cut by creation order, not a coin flip per agent, so the realised count
//! tracks the target closely.  Agent 0 always qualifies, even at fraction 0.

use log::trace;
use rustc_hash::FxHashSet;
use vb_core::{Cell, ConfigError, ConfigResult, GridSpace, HumanId, ModelConfig, SimRng};

use crate::{Human, HumanState, Mosquito, Population};

/// Lower bound on placement attempts per human, for very small grids.
const MIN_PLACEMENT_ATTEMPTS: u64 = 1_024;

/// Placement attempts per human, per grid cell.
const ATTEMPTS_PER_CELL: u64 = 32;

/// Builds the initial [`Population`] for a [`ModelConfig`].
///
/// Humans are placed first, each on a cell no other human occupies
/// (rejection sampling with a bounded number of retries).  Mosquitoes follow,
/// placed uniformly with no collision constraint at all.
pub struct PopulationBuilder {
    grid:                 GridSpace,
    n_human:              usize,
    n_mosquito:           usize,
    init_human_infected:  f64,
    init_mosquito_hungry: f64,
    max_attempts:         u64,
}

impl PopulationBuilder {
    pub fn new(config: &ModelConfig) -> Self {
        let grid = config.grid();
        Self {
            grid,
            n_human:              config.n_human,
            n_mosquito:           config.n_mosquito,
            init_human_infected:  config.init_human_infected,
            init_mosquito_hungry: config.init_mosquito_hungry,
            max_attempts:         grid
                .capacity()
                .saturating_mul(ATTEMPTS_PER_CELL)
                .max(MIN_PLACEMENT_ATTEMPTS),
        }
    }

    /// Override the per-human placement retry budget.
    pub fn max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Place and initialise every agent, drawing from `rng`.
    ///
    /// Assumes the configuration has already been validated; only a grid
    /// that is too small (or a retry budget that runs out) is reported here.
    pub fn build(&self, rng: &mut SimRng) -> ConfigResult<Population> {
        if self.grid.capacity() == 0 && (self.n_human > 0 || self.n_mosquito > 0) {
            return Err(ConfigError::EmptyGrid {
                width:  self.grid.width,
                height: self.grid.height,
            });
        }
        if self.n_human as u64 > self.grid.capacity() {
            return Err(ConfigError::GridTooSmall {
                humans:   self.n_human,
                capacity: self.grid.capacity(),
            });
        }

        let humans = self.place_humans(rng)?;
        let mosquitoes = self.place_mosquitoes(rng);
        Ok(Population::new(humans, mosquitoes))
    }

    fn place_humans(&self, rng: &mut SimRng) -> ConfigResult<Vec<Human>> {
        let mut occupied: FxHashSet<Cell> = FxHashSet::default();
        occupied.reserve(self.n_human);

        let mut humans = Vec::with_capacity(self.n_human);
        for i in 0..self.n_human {
            let cell = self.free_cell(i, &occupied, rng)?;
            occupied.insert(cell);

            let state = if initially_flagged(i, self.n_human, self.init_human_infected) {
                HumanState::Infected
            } else {
                HumanState::Susceptible
            };
            humans.push(Human::new(cell, state));
        }
        Ok(humans)
    }

    fn free_cell(
        &self,
        index:    usize,
        occupied: &FxHashSet<Cell>,
        rng:      &mut SimRng,
    ) -> ConfigResult<Cell> {
        for attempt in 0..self.max_attempts {
            let cell = random_cell(self.grid, rng);
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
            trace!("human {index}: cell {cell} taken (attempt {attempt})");
        }
        Err(ConfigError::PlacementExhausted {
            human:    HumanId(index as u32),
            attempts: self.max_attempts,
        })
    }

    fn place_mosquitoes(&self, rng: &mut SimRng) -> Vec<Mosquito> {
        (0..self.n_mosquito)
            .map(|i| {
                let cell = random_cell(self.grid, rng);
                let hungry = initially_flagged(i, self.n_mosquito, self.init_mosquito_hungry);
                Mosquito::new(cell, hungry)
            })
            .collect()
    }
}

/// Validate `config` and build its initial population.
pub fn initialize(config: &ModelConfig, rng: &mut SimRng) -> ConfigResult<Population> {
    config.validate()?;
    PopulationBuilder::new(config).build(rng)
}

/// `x` is drawn before `y`.
fn random_cell(grid: GridSpace, rng: &mut SimRng) -> Cell {
    let x = rng.coordinate(grid.width);
    let y = rng.coordinate(grid.height);
    Cell::new(x, y)
}

#[inline]
pub(crate) fn initially_flagged(index: usize, count: usize, fraction: f64) -> bool {
    (index as f64 / count as f64) <= fraction
}
