//! Bed-net intervention: a time-gated extra hurdle for every bite.

use vb_core::{ModelConfig, SimRng, Tick};

/// Chance that a bite gets past a bed net once nets are active.
pub const NET_PASS_PROB: f64 = 0.2;

/// When (and whether) bed nets filter bites.
///
/// Nets are active on every step strictly after `active_from`.  While
/// inactive the policy lets every bite through without drawing.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct NetPolicy {
    pub enabled:     bool,
    pub active_from: u64,
}

impl NetPolicy {
    pub fn new(enabled: bool, active_from: u64) -> Self {
        Self { enabled, active_from }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.simulate_nets, config.nets_active_from_step)
    }

    #[inline]
    pub fn is_active(&self, tick: Tick) -> bool {
        self.enabled && tick.0 > self.active_from
    }

    /// `true` when nets first take effect on `tick`.
    #[inline]
    pub fn activates_at(&self, tick: Tick) -> bool {
        self.enabled && tick.0 == self.active_from.saturating_add(1)
    }

    /// Whether a bite that already passed its bite draw goes ahead.
    ///
    /// Draws once only while nets are active.
    #[inline]
    pub fn allows_bite(&self, tick: Tick, rng: &mut SimRng) -> bool {
        !self.is_active(tick) || rng.gen_bool(NET_PASS_PROB)
    }
}
