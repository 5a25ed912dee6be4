//! One timestep over both populations.

use vb_agent::{Human, Mosquito};
use vb_core::{ModelConfig, SimRng, Tick};

use crate::movement::move_mosquito;
use crate::transmission::interact;
use crate::vitals::{human_vitals, mosquito_vitals};
use crate::{NetPolicy, StepStatistics};

/// Advance both populations by one step and return the step's tallies.
///
/// Takes slices, so neither population can change size.  Never fails: a
/// step with no eligible bites, no hungry mosquitoes or no susceptible
/// humans is an ordinary step.
///
/// `tick` is only consulted by the bed-net policy.
pub fn step(
    humans:     &mut [Human],
    mosquitoes: &mut [Mosquito],
    config:     &ModelConfig,
    tick:       Tick,
    rng:        &mut SimRng,
) -> StepStatistics {
    let grid = config.grid();
    let nets = NetPolicy::from_config(config);
    let mut stats = StepStatistics::default();

    // ── Mosquito pass ─────────────────────────────────────────────────────
    //
    // The human scan does not stop at the first bite: later co-located
    // humans are still checked, but the mosquito is no longer hungry.
    for mosquito in mosquitoes.iter_mut() {
        move_mosquito(mosquito, grid, rng);
        for human in humans.iter_mut() {
            interact(mosquito, human, config, &nets, tick, rng);
        }
        mosquito_vitals(mosquito, config, rng, &mut stats);
    }

    // ── Human pass ────────────────────────────────────────────────────────
    for human in humans.iter_mut() {
        human_vitals(human, config, rng, &mut stats);
    }

    stats
}
