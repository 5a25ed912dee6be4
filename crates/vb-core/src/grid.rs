//! Integer lattice positions and the grid bounds policy.
//!
//! The world is a `width × height` lattice with no wraparound.  Every agent
//! position satisfies `0 ≤ x < width` and `0 ≤ y < height` at the end of
//! every step.

use std::fmt;

/// A cell on the lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounds of the lattice.
///
/// `GridSpace` is `Copy` and holds no cell storage; it answers containment
/// questions and applies the one-cell boundary correction used by movement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GridSpace {
    pub width:  u32,
    pub height: u32,
}

impl GridSpace {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells, computed in `u64` so large grids cannot overflow.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Apply a step of `(dx, dy)` to `cell`, each delta in `{-1, 0, +1}`.
    ///
    /// Per axis: a step below zero is turned into `+1`, then a step reaching
    /// the extent is turned into `-1`.  The correction is not re-checked, so
    /// an axis of extent 1 would still leave the grid; on such an axis the
    /// agent stays put.
    pub fn step(&self, cell: Cell, dx: i32, dy: i32) -> Cell {
        Cell {
            x: step_axis(cell.x, dx, self.width),
            y: step_axis(cell.y, dy, self.height),
        }
    }
}

fn step_axis(pos: u32, delta: i32, extent: u32) -> u32 {
    let pos = pos as i64;
    let extent = extent as i64;
    let mut delta = delta as i64;
    if pos + delta < 0 {
        delta = 1;
    }
    if pos + delta >= extent {
        delta = -1;
    }
    let next = pos + delta;
    if (0..extent).contains(&next) {
        next as u32
    } else {
        pos as u32
    }
}
