//! Mosquito movement: one random cell per step, never off the grid.

use vb_agent::Mosquito;
use vb_core::{GridSpace, SimRng};

/// Move `mosquito` by a uniformly random delta in `{-1, 0, +1}` per axis.
///
/// Two draws, `x` first.  Boundary handling is [`GridSpace::step`]: a delta
/// that would leave the grid is reflected to point back inside.
#[inline]
pub fn move_mosquito(mosquito: &mut Mosquito, grid: GridSpace, rng: &mut SimRng) {
    let dx = rng.unit_delta();
    let dy = rng.unit_delta();
    mosquito.position = grid.step(mosquito.position, dx, dy);
}
