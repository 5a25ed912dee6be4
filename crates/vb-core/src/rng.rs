//! The simulation's single random stream.
//!
//! # Determinism strategy
//!
//! One `SmallRng` per run, seeded from `RunConfig::seed`, is threaded by
//! `&mut` through every component that draws.  Reproducibility therefore
//! depends on the *order* of draws, which the step update fixes:
//!
//! 1. mosquito movement (`x` delta then `y` delta),
//! 2. bite and net draws, nested mosquito → human in population order,
//! 3. mosquito vital dynamics,
//! 4. human vital dynamics.
//!
//! Nothing here is `Sync`; the update is strictly sequential.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`.
    ///
    /// Always consumes exactly one `f64` draw, whatever `p` is, so the stream
    /// position after a decision never depends on the configured rates.
    /// `p <= 0` never succeeds and `p >= 1` always does.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.r#gen::<f64>() < p
    }

    /// One of `-1`, `0`, `+1`, uniformly.
    #[inline]
    pub fn unit_delta(&mut self) -> i32 {
        self.0.gen_range(-1..=1)
    }

    /// A uniformly chosen value in `0..extent`.  `extent` must be non-zero.
    #[inline]
    pub fn coordinate(&mut self, extent: u32) -> u32 {
        self.0.gen_range(0..extent)
    }
}
