//! Unit tests for vb-core primitives.

#[cfg(test)]
mod ids {
    use crate::{HumanId, MosquitoId};

    #[test]
    fn index_roundtrip() {
        let id = HumanId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(HumanId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(HumanId(7).to_string(), "HumanId(7)");
        assert_eq!(MosquitoId(3).to_string(), "MosquitoId(3)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, GridSpace};

    #[test]
    fn capacity_and_contains() {
        let g = GridSpace::new(4, 3);
        assert_eq!(g.capacity(), 12);
        assert!(g.contains(Cell::new(3, 2)));
        assert!(!g.contains(Cell::new(4, 0)));
        assert!(!g.contains(Cell::new(0, 3)));
    }

    #[test]
    fn interior_step_applies_delta() {
        let g = GridSpace::new(5, 5);
        assert_eq!(g.step(Cell::new(2, 2), 1, -1), Cell::new(3, 1));
        assert_eq!(g.step(Cell::new(2, 2), 0, 0), Cell::new(2, 2));
    }

    #[test]
    fn low_edge_reflects_up() {
        let g = GridSpace::new(5, 5);
        assert_eq!(g.step(Cell::new(0, 0), -1, -1), Cell::new(1, 1));
    }

    #[test]
    fn high_edge_reflects_down() {
        let g = GridSpace::new(5, 5);
        assert_eq!(g.step(Cell::new(4, 4), 1, 1), Cell::new(3, 3));
    }

    #[test]
    fn every_delta_stays_inside() {
        let g = GridSpace::new(3, 2);
        for x in 0..3 {
            for y in 0..2 {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        let next = g.step(Cell::new(x, y), dx, dy);
                        assert!(g.contains(next), "({x},{y}) + ({dx},{dy}) -> {next}");
                    }
                }
            }
        }
    }

    #[test]
    fn single_cell_axis_holds_position() {
        let g = GridSpace::new(1, 1);
        for dx in -1..=1 {
            assert_eq!(g.step(Cell::new(0, 0), dx, dx), Cell::new(0, 0));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 2, Tick(5));
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick::ZERO.offset(7), Tick(7));
        assert_eq!(Tick(9).to_string(), "T9");
    }

    #[test]
    fn end_tick_is_total() {
        let run = RunConfig { total_ticks: 12, ..RunConfig::default() };
        assert_eq!(run.end_tick(), Tick(12));
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, ModelConfig};

    #[test]
    fn default_is_valid() {
        ModelConfig::default().validate().unwrap();
    }

    #[test]
    fn probability_above_one_rejected() {
        let cfg = ModelConfig { bite_prob: 1.5, ..ModelConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ProbabilityOutOfRange { name: "bite_prob", value: 1.5 })
        );
    }

    #[test]
    fn negative_probability_rejected() {
        let cfg = ModelConfig { human_die_prob: -0.1, ..ModelConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ProbabilityOutOfRange { name: "human_die_prob", .. })
        ));
    }

    #[test]
    fn nan_probability_rejected() {
        let cfg = ModelConfig { human_cure_prob: f64::NAN, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn initial_fractions_are_checked() {
        let cfg = ModelConfig { init_human_infected: 2.0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn boundary_probabilities_accepted() {
        let cfg = ModelConfig {
            bite_prob:      0.0,
            human_die_prob: 1.0,
            ..ModelConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn too_many_humans_rejected() {
        let cfg = ModelConfig { width: 2, height: 2, n_human: 5, ..ModelConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::GridTooSmall { humans: 5, capacity: 4 })
        );
    }

    #[test]
    fn full_grid_accepted() {
        let cfg = ModelConfig { width: 2, height: 2, n_human: 4, ..ModelConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn empty_grid_rejected() {
        let cfg = ModelConfig { width: 0, n_human: 0, ..ModelConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGrid { .. })));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn unit_delta_range() {
        let mut rng = SimRng::new(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let d = rng.unit_delta();
            assert!((-1..=1).contains(&d));
            seen[(d + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn degenerate_bools() {
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
        }
    }

    #[test]
    fn coordinate_within_extent() {
        let mut rng = SimRng::new(5);
        for _ in 0..100 {
            assert!(rng.coordinate(4) < 4);
        }
    }
}
