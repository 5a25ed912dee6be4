//! Model configuration, immutable for the whole run.

use crate::{ConfigError, ConfigResult, GridSpace};

/// Every parameter of the vector-borne transmission model.
///
/// Typically built from `Default` and overridden field by field, or loaded
/// from JSON by the application (with the `serde` feature, missing fields
/// fall back to the defaults).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    // ── Grid and population ───────────────────────────────────────────────
    pub width:      u32,
    pub height:     u32,
    pub n_human:    usize,
    pub n_mosquito: usize,

    // ── Initial conditions (fractions by creation index) ──────────────────
    pub init_human_infected:  f64,
    pub init_mosquito_hungry: f64,

    // ── Transition probabilities ──────────────────────────────────────────
    /// Infected mosquito → susceptible human, per bite.
    pub human_infection_prob:     f64,
    /// Infected human → uninfected mosquito, per bite.
    pub mosquito_infection_prob:  f64,
    /// A hungry co-located mosquito actually bites.
    pub bite_prob:                f64,
    /// A mosquito becomes hungry this step.
    pub mosquito_hungry_prob:     f64,
    /// A mosquito dies and is replaced by a clean, fed one.
    pub mosquito_hungry_die_prob: f64,
    /// An infected human becomes resistant.
    pub human_cure_prob:          f64,
    /// An infected human dies of the disease.
    pub human_sick_die_prob:      f64,
    /// Any human dies of other causes.
    pub human_die_prob:           f64,

    // ── Intervention ──────────────────────────────────────────────────────
    pub simulate_nets:         bool,
    /// Nets take effect on steps strictly after this one.
    pub nets_active_from_step: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            width:                    50,
            height:                   50,
            n_human:                  10,
            n_mosquito:               20,
            init_human_infected:      0.2,
            init_mosquito_hungry:     0.5,
            human_infection_prob:     0.25,
            mosquito_infection_prob:  0.9,
            bite_prob:                1.0,
            mosquito_hungry_prob:     0.5,
            mosquito_hungry_die_prob: 0.1,
            human_cure_prob:          0.05,
            human_sick_die_prob:      0.01,
            human_die_prob:           0.001,
            simulate_nets:            false,
            nets_active_from_step:    0,
        }
    }
}

impl ModelConfig {
    /// The grid bounds for this configuration.
    #[inline]
    pub fn grid(&self) -> GridSpace {
        GridSpace::new(self.width, self.height)
    }

    /// Every probability-valued field, by name.
    pub fn probabilities(&self) -> [(&'static str, f64); 10] {
        [
            ("init_human_infected",      self.init_human_infected),
            ("init_mosquito_hungry",     self.init_mosquito_hungry),
            ("human_infection_prob",     self.human_infection_prob),
            ("mosquito_infection_prob",  self.mosquito_infection_prob),
            ("bite_prob",                self.bite_prob),
            ("mosquito_hungry_prob",     self.mosquito_hungry_prob),
            ("mosquito_hungry_die_prob", self.mosquito_hungry_die_prob),
            ("human_cure_prob",          self.human_cure_prob),
            ("human_sick_die_prob",      self.human_sick_die_prob),
            ("human_die_prob",           self.human_die_prob),
        ]
    }

    /// Check every constraint that must hold before a run can start.
    ///
    /// Fails on the first probability outside `[0, 1]` (NaN included), on a
    /// grid with no cells, or when there are more humans than cells, which
    /// makes collision-free placement impossible.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in self.probabilities() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        let grid = self.grid();
        if grid.capacity() == 0 {
            return Err(ConfigError::EmptyGrid {
                width:  self.width,
                height: self.height,
            });
        }
        if self.n_human as u64 > grid.capacity() {
            return Err(ConfigError::GridTooSmall {
                humans:   self.n_human,
                capacity: grid.capacity(),
            });
        }
        Ok(())
    }
}
