//! Unit tests for vb-agent.

use vb_core::{ModelConfig, SimRng};

fn small_config(n_human: usize, n_mosquito: usize) -> ModelConfig {
    ModelConfig {
        width: 10,
        height: 10,
        n_human,
        n_mosquito,
        ..ModelConfig::default()
    }
}

// ── Agent records ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod record_tests {
    use vb_core::{Cell, HumanId, MosquitoId};

    use crate::{Human, HumanState, Mosquito, Population};

    #[test]
    fn new_mosquito_is_clean() {
        let m = Mosquito::new(Cell::new(1, 2), true);
        assert!(m.hungry);
        assert!(!m.infected);
    }

    #[test]
    fn respawn_clears_both_flags() {
        let mut m = Mosquito { position: Cell::new(1, 1), hungry: true, infected: true };
        m.respawn();
        assert!(!m.hungry);
        assert!(!m.infected);
        assert_eq!(m.position, Cell::new(1, 1));
    }

    #[test]
    fn state_codes() {
        let codes: String = [
            HumanState::Susceptible,
            HumanState::Infected,
            HumanState::Resistant,
            HumanState::Dead,
        ]
        .iter()
        .map(|s| s.code())
        .collect();
        assert_eq!(codes, "SIRD");
        assert_eq!(HumanState::default(), HumanState::Susceptible);
    }

    #[test]
    fn pair_mut_reaches_both() {
        let mut pop = Population::new(
            vec![Human::new(Cell::new(0, 0), HumanState::Susceptible)],
            vec![Mosquito::new(Cell::new(0, 0), true)],
        );
        let (m, h) = pop.pair_mut(MosquitoId(0), HumanId(0));
        m.hungry = false;
        h.state = HumanState::Infected;
        assert!(!pop.mosquito(MosquitoId(0)).hungry);
        assert!(pop.human(HumanId(0)).is_infected());
    }
}

// ── Population factory ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use rustc_hash::FxHashSet;
    use vb_core::ConfigError;

    use super::*;
    use crate::builder::initially_flagged;
    use crate::{HumanState, PopulationBuilder, initialize};

    #[test]
    fn sizes_match_config() {
        let mut rng = SimRng::new(1);
        let pop = initialize(&small_config(10, 20), &mut rng).unwrap();
        assert_eq!(pop.human_count(), 10);
        assert_eq!(pop.mosquito_count(), 20);
    }

    #[test]
    fn humans_never_share_a_cell() {
        let mut rng = SimRng::new(2);
        let pop = initialize(&small_config(60, 0), &mut rng).unwrap();
        let cells: FxHashSet<_> = pop.humans.iter().map(|h| h.position).collect();
        assert_eq!(cells.len(), 60);
    }

    #[test]
    fn full_grid_is_placeable() {
        let cfg = ModelConfig { width: 3, height: 3, n_human: 9, n_mosquito: 4, ..ModelConfig::default() };
        let mut rng = SimRng::new(3);
        let pop = initialize(&cfg, &mut rng).unwrap();
        let cells: FxHashSet<_> = pop.humans.iter().map(|h| h.position).collect();
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn all_positions_in_bounds() {
        let cfg = small_config(30, 200);
        let grid = cfg.grid();
        let mut rng = SimRng::new(4);
        let pop = initialize(&cfg, &mut rng).unwrap();
        assert!(pop.humans.iter().all(|h| grid.contains(h.position)));
        assert!(pop.mosquitoes.iter().all(|m| grid.contains(m.position)));
    }

    #[test]
    fn mosquitoes_start_uninfected() {
        let mut rng = SimRng::new(5);
        let pop = initialize(&small_config(5, 50), &mut rng).unwrap();
        assert!(pop.mosquitoes.iter().all(|m| !m.infected));
    }

    #[test]
    fn infected_humans_are_first_by_index() {
        // 0/10 .. 2/10 <= 0.2, so the first three are infected.
        let cfg = ModelConfig { init_human_infected: 0.2, ..small_config(10, 0) };
        let mut rng = SimRng::new(6);
        let pop = initialize(&cfg, &mut rng).unwrap();
        let states: Vec<_> = pop.humans.iter().map(|h| h.state).collect();
        assert!(states[..3].iter().all(|&s| s == HumanState::Infected));
        assert!(states[3..].iter().all(|&s| s == HumanState::Susceptible));
    }

    #[test]
    fn hungry_mosquitoes_are_first_by_index() {
        // 0/20 .. 10/20 <= 0.5 → 11 hungry.
        let cfg = ModelConfig { init_mosquito_hungry: 0.5, ..small_config(0, 20) };
        let mut rng = SimRng::new(7);
        let pop = initialize(&cfg, &mut rng).unwrap();
        let hungry = pop.mosquitoes.iter().filter(|m| m.hungry).count();
        assert_eq!(hungry, 11);
        assert!(pop.mosquitoes[..11].iter().all(|m| m.hungry));
    }

    #[test]
    fn index_threshold_edges() {
        assert!(initially_flagged(0, 5, 0.0));
        assert!(!initially_flagged(1, 5, 0.0));
        assert!(initially_flagged(1, 5, 0.2));
        assert!(initially_flagged(4, 5, 1.0));
    }

    #[test]
    fn same_seed_same_population() {
        let cfg = small_config(15, 15);
        let a = initialize(&cfg, &mut SimRng::new(99)).unwrap();
        let b = initialize(&cfg, &mut SimRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_many_humans_is_config_error() {
        let cfg = ModelConfig { width: 2, height: 2, n_human: 5, ..ModelConfig::default() };
        let mut rng = SimRng::new(8);
        assert!(matches!(
            initialize(&cfg, &mut rng),
            Err(ConfigError::GridTooSmall { humans: 5, capacity: 4 })
        ));
    }

    #[test]
    fn bad_probability_is_config_error() {
        let cfg = ModelConfig { mosquito_hungry_prob: 3.0, ..ModelConfig::default() };
        let mut rng = SimRng::new(9);
        assert!(matches!(
            initialize(&cfg, &mut rng),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn exhausted_retry_budget_reported() {
        // With one attempt per human, filling a 2x2 grid succeeds only when
        // all four draws are distinct (24/256), so most seeds collide.
        let cfg = ModelConfig { width: 2, height: 2, n_human: 4, n_mosquito: 0, ..ModelConfig::default() };
        let failed = (0..64u64).any(|seed| {
            matches!(
                PopulationBuilder::new(&cfg).max_attempts(1).build(&mut SimRng::new(seed)),
                Err(ConfigError::PlacementExhausted { .. })
            )
        });
        assert!(failed);
    }
}
