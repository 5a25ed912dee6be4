//! Fluent builder for constructing a [`Sim`].

use vb_agent::{Population, PopulationBuilder};
use vb_core::{ModelConfig, RunConfig, SimRng, Tick};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`ModelConfig`]: grid, population sizes, rates, intervention
/// - [`RunConfig`]: total ticks, seed
///
/// # Optional inputs
///
/// | Method             | Default                                         |
/// |--------------------|-------------------------------------------------|
/// | `.population(p)`   | Generated by `PopulationBuilder` from the seed  |
/// | `.start_tick(t)`   | `Tick(0)`                                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(model, run).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    model:      ModelConfig,
    run:        RunConfig,
    population: Option<Population>,
    start_tick: Tick,
}

impl SimBuilder {
    pub fn new(model: ModelConfig, run: RunConfig) -> Self {
        Self {
            model,
            run,
            population: None,
            start_tick: Tick::ZERO,
        }
    }

    /// Supply a hand-built population instead of generating one.
    ///
    /// Sizes must match `n_human` / `n_mosquito` and every agent must be on
    /// the grid.  Human placement is not re-checked for collisions.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Start counting ticks from `tick` instead of 0.
    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate the configuration, build or check the population, and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.model.validate()?;
        let mut rng = SimRng::new(self.run.seed);

        let population = match self.population {
            Some(p) => {
                check_population(&self.model, &p)?;
                p
            }
            None => PopulationBuilder::new(&self.model).build(&mut rng)?,
        };

        Ok(Sim {
            model: self.model,
            run: self.run,
            tick: self.start_tick,
            population,
            rng,
        })
    }
}

fn check_population(model: &ModelConfig, population: &Population) -> SimResult<()> {
    if population.human_count() != model.n_human {
        return Err(SimError::PopulationMismatch {
            expected: model.n_human,
            got:      population.human_count(),
            what:     "human population",
        });
    }
    if population.mosquito_count() != model.n_mosquito {
        return Err(SimError::PopulationMismatch {
            expected: model.n_mosquito,
            got:      population.mosquito_count(),
            what:     "mosquito population",
        });
    }

    let grid = model.grid();
    if let Some(index) = population.humans.iter().position(|h| !grid.contains(h.position)) {
        return Err(SimError::OutOfBounds { index, what: "human" });
    }
    if let Some(index) = population.mosquitoes.iter().position(|m| !grid.contains(m.position)) {
        return Err(SimError::OutOfBounds { index, what: "mosquito" });
    }
    Ok(())
}
