//! The human agent.

use std::fmt;

use vb_core::Cell;

/// Disease state of a human.
///
/// `Dead` is transient: the vital-dynamics pass respawns a dead human as
/// `Susceptible` in place, so the population never shrinks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumanState {
    #[default]
    Susceptible,
    Infected,
    Resistant,
    Dead,
}

impl HumanState {
    /// Single-letter code (`S`, `I`, `R`, `D`).
    pub fn code(self) -> char {
        match self {
            HumanState::Susceptible => 'S',
            HumanState::Infected    => 'I',
            HumanState::Resistant   => 'R',
            HumanState::Dead        => 'D',
        }
    }
}

impl fmt::Display for HumanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Human {
    pub position: Cell,
    pub state:    HumanState,
}

impl Human {
    pub fn new(position: Cell, state: HumanState) -> Self {
        Self { position, state }
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.state == HumanState::Susceptible
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.state == HumanState::Infected
    }
}
