//! Bite resolution between one mosquito and one human.

use vb_agent::{Human, HumanState, Mosquito};
use vb_core::{ModelConfig, SimRng, Tick};

use crate::NetPolicy;

/// What a bite did to the disease states involved.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BiteOutcome {
    /// Infected mosquito → susceptible human.
    HumanInfected,
    /// Infected human → uninfected mosquito.
    MosquitoInfected,
    /// The bite happened but nothing was transmitted.
    NoTransmission,
}

/// Try one mosquito/human interaction.
///
/// Eligible only when both share a cell and the mosquito is hungry.  The
/// bite draw comes next, then the bed-net draw (only while nets are active).
/// Returns `None` when no bite took place; no draw is made for a pair that
/// is not eligible.
pub fn interact(
    mosquito: &mut Mosquito,
    human:    &mut Human,
    config:   &ModelConfig,
    nets:     &NetPolicy,
    tick:     Tick,
    rng:      &mut SimRng,
) -> Option<BiteOutcome> {
    if mosquito.position != human.position || !mosquito.hungry {
        return None;
    }
    if !rng.gen_bool(config.bite_prob) {
        return None;
    }
    if !nets.allows_bite(tick, rng) {
        return None;
    }
    Some(bite(
        mosquito,
        human,
        config.human_infection_prob,
        config.mosquito_infection_prob,
        rng,
    ))
}

/// Resolve a bite that is already going ahead.
///
/// At most one direction is tried: an infected mosquito can only pass the
/// disease on, an uninfected one can only pick it up.  The mosquito is fed
/// afterwards whatever happened.
pub fn bite(
    mosquito:                &mut Mosquito,
    human:                   &mut Human,
    human_infection_prob:    f64,
    mosquito_infection_prob: f64,
    rng:                     &mut SimRng,
) -> BiteOutcome {
    let outcome = if mosquito.infected && human.state == HumanState::Susceptible {
        if rng.gen_bool(human_infection_prob) {
            human.state = HumanState::Infected;
            BiteOutcome::HumanInfected
        } else {
            BiteOutcome::NoTransmission
        }
    } else if !mosquito.infected && human.state == HumanState::Infected {
        if rng.gen_bool(mosquito_infection_prob) {
            mosquito.infected = true;
            BiteOutcome::MosquitoInfected
        } else {
            BiteOutcome::NoTransmission
        }
    } else {
        BiteOutcome::NoTransmission
    };

    mosquito.hungry = false;
    outcome
}
