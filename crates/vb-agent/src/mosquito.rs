//! The mosquito agent.

use vb_core::Cell;

/// A mosquito: a silent carrier with no resistant or removed state.
///
/// Mosquitoes are never removed from the population.  Death is an in-place
/// reset to a fed, uninfected individual (see [`Mosquito::respawn`]).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mosquito {
    pub position: Cell,
    /// Only hungry mosquitoes bite.
    pub hungry:   bool,
    pub infected: bool,
}

impl Mosquito {
    /// A new mosquito is always infection-free.
    pub fn new(position: Cell, hungry: bool) -> Self {
        Self { position, hungry, infected: false }
    }

    /// Replace this mosquito by a fresh one at the same cell.
    #[inline]
    pub fn respawn(&mut self) {
        self.infected = false;
        self.hungry = false;
    }
}
