//! Configuration error type.
//!
//! A `ConfigError` is raised once, before the first step, and the run must not
//! start.  Nothing inside the per-step update can fail.

use thiserror::Error;

use crate::HumanId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("probability `{name}` must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("grid {width}x{height} has no cells")]
    EmptyGrid { width: u32, height: u32 },

    #[error("{humans} humans do not fit on a grid with {capacity} cells")]
    GridTooSmall { humans: usize, capacity: u64 },

    #[error("no free cell found for {human} after {attempts} attempts")]
    PlacementExhausted { human: HumanId, attempts: u64 },
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
