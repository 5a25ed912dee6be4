//! Vital dynamics: per-step death, respawn, hunger and disease progression.

use vb_agent::{Human, HumanState, Mosquito};
use vb_core::{ModelConfig, SimRng};

use crate::StepStatistics;

/// Mosquito update, then its tallies.
///
/// Two independent draws in order: die (respawn clean and fed), then get
/// hungry.  The second can make a just-respawned mosquito hungry again.
pub fn mosquito_vitals(
    mosquito: &mut Mosquito,
    config:   &ModelConfig,
    rng:      &mut SimRng,
    stats:    &mut StepStatistics,
) {
    if rng.gen_bool(config.mosquito_hungry_die_prob) {
        mosquito.respawn();
    }
    if rng.gen_bool(config.mosquito_hungry_prob) {
        mosquito.hungry = true;
    }

    if mosquito.infected {
        stats.mosquito_infected += 1;
    }
    if mosquito.hungry {
        stats.mosquito_hungry += 1;
    }
}

/// Human update interleaved with its tallies.
///
/// Order matters and is fixed:
///
/// 1. a human who died last step respawns `Susceptible`;
/// 2. a susceptible human is counted;
/// 3. background death draw (so a respawned human can die again at once);
/// 4. an infected human is counted, then draws cure and disease death
///    independently, both always drawn, the second overriding the first;
/// 5. a resistant human is counted.
pub fn human_vitals(
    human:  &mut Human,
    config: &ModelConfig,
    rng:    &mut SimRng,
    stats:  &mut StepStatistics,
) {
    if human.state == HumanState::Dead {
        human.state = HumanState::Susceptible;
    }
    if human.state == HumanState::Susceptible {
        stats.human_susceptible += 1;
    }

    if rng.gen_bool(config.human_die_prob) {
        human.state = HumanState::Dead;
    }

    if human.state == HumanState::Infected {
        stats.human_infected += 1;
        if rng.gen_bool(config.human_cure_prob) {
            human.state = HumanState::Resistant;
        }
        if rng.gen_bool(config.human_sick_die_prob) {
            human.state = HumanState::Dead;
        }
    }

    if human.state == HumanState::Resistant {
        stats.human_resistant += 1;
    }
}
