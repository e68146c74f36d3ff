//! Bubbles domain: components for the buoyant projectile pool.

use bevy::prelude::*;

/// A buoyant projectile.
#[derive(Component, Debug)]
pub struct Bubble {
    /// Countdown to a chainless pop.
    pub lifetime_remaining: f32,
    /// Result of the one-way collision rule. Recomputed every tick from the
    /// character's relative position and velocity - never trusted across
    /// ticks.
    pub solid: bool,
    /// Entity captured and carried by this bubble, if any.
    pub carrying: Option<Entity>,
}

impl Bubble {
    pub fn new(lifetime: f32) -> Self {
        Self {
            lifetime_remaining: lifetime,
            solid: false,
            carrying: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.carrying.is_some()
    }
}

/// Marks an entity a bubble may capture on contact.
#[derive(Component, Debug)]
pub struct Capturable;

/// Why a bubble popped. Chain scans run only for causes that represent a
/// deliberate destruction, not for timeouts or cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopCause {
    /// An external hit (weapon, debug command).
    DirectHit,
    /// A staggered pop scheduled by an earlier chain scan.
    Chain,
    /// Evicted to make room for a new bubble at capacity.
    Eviction,
    /// Lifetime ran out.
    Expiry,
    /// Drifted out of the world.
    OutOfBounds,
}

impl PopCause {
    /// Whether this pop triggers a chain scan of its neighborhood.
    ///
    /// Chain pops deliberately do not cascade: the wave covers only bubbles
    /// alive at the moment of the triggering pop.
    pub fn triggers_chain(&self) -> bool {
        matches!(self, PopCause::DirectHit | PopCause::Eviction)
    }
}
