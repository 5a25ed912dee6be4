use thiserror::Error;
use vb_core::ConfigError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{what} length {got} does not match configured count {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what} {index} is outside the grid")]
    OutOfBounds {
        index: usize,
        what:  &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
