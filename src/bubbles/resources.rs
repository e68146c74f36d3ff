//! Bubbles domain: tuning, pool bookkeeping, scheduled tasks, spatial grid.

use std::collections::{HashMap, VecDeque};

use bevy::prelude::*;
use serde::Deserialize;

use crate::bubbles::components::PopCause;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BubbleTuning {
    /// Maximum live bubbles; exceeding it evicts the oldest first.
    pub capacity: usize,
    /// Seconds before a bubble pops on its own (no chain).
    pub lifetime: f32,
    /// Muzzle speed along the firer's facing (m/s).
    pub fire_speed: f32,
    /// Spawn distance in front of the firer (m).
    pub muzzle_offset: f32,
    /// Velocity kick against the firing direction, applied only while the
    /// firer is airborne (m/s).
    pub recoil_speed: f32,
    pub radius: f32,
    pub mass: f32,
    /// Gravity factor; negative makes the bubble drift against gravity.
    pub buoyancy_scale: f32,
    /// Mass while carrying a captured entity.
    pub carried_mass: f32,
    /// Gravity factor while carrying; buoyancy mostly cancelled.
    pub carried_buoyancy_scale: f32,
    /// Seconds a captured entity is held before release.
    pub carry_duration: f32,
    /// Radius of the chain-reaction scan around a popped bubble (m).
    pub chain_radius: f32,
    /// Delay step between staggered chain pops (s).
    pub chain_stagger: f32,
    /// Descent speed (along down) above which the character counts as
    /// descending for the one-way rule (m/s).
    pub descent_threshold: f32,
    /// Descent speed required for the trampoline response (m/s).
    pub trampoline_min_speed: f32,
    /// Bounce amplification applied to the inverted vertical velocity.
    pub trampoline_restitution: f32,
    /// Bubbles farther than this from the origin are reclaimed.
    pub world_bound_radius: f32,
}

impl Default for BubbleTuning {
    fn default() -> Self {
        Self {
            capacity: 30,
            lifetime: 6.0,
            fire_speed: 12.0,
            muzzle_offset: 1.0,
            recoil_speed: 3.0,
            radius: 0.45,
            mass: 0.2,
            buoyancy_scale: -0.4,
            carried_mass: 2.0,
            carried_buoyancy_scale: -0.05,
            carry_duration: 4.0,
            chain_radius: 1.5,
            chain_stagger: 0.1,
            descent_threshold: 0.2,
            trampoline_min_speed: 6.0,
            trampoline_restitution: 1.15,
            world_bound_radius: 150.0,
        }
    }
}

/// Spawn-ordered bookkeeping of live bubbles. Front = oldest.
#[derive(Resource, Debug, Default)]
pub struct BubbleLedger {
    order: VecDeque<Entity>,
}

impl BubbleLedger {
    pub fn push(&mut self, bubble: Entity) {
        self.order.push_back(bubble);
    }

    pub fn remove(&mut self, bubble: Entity) {
        self.order.retain(|e| *e != bubble);
    }

    /// Pop the oldest live bubble off the ledger (it is about to be evicted).
    pub fn take_oldest(&mut self) -> Option<Entity> {
        self.order.pop_front()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, bubble: Entity) -> bool {
        self.order.contains(&bubble)
    }
}

/// What a scheduled task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Staggered chain pop.
    Pop,
    /// Release a carried entity.
    Release,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduledTask {
    pub target: Entity,
    pub remaining: f32,
    pub kind: TaskKind,
}

/// Cancellable registry of deferred per-entity effects.
///
/// Every delayed effect in the pool goes through here so that a despawn can
/// cancel everything aimed at the dead entity; whatever slips through is
/// liveness-checked at fire time and skipped silently.
#[derive(Resource, Debug, Default)]
pub struct ScheduledTasks {
    entries: Vec<ScheduledTask>,
}

impl ScheduledTasks {
    pub fn schedule(&mut self, target: Entity, delay: f32, kind: TaskKind) {
        self.entries.push(ScheduledTask {
            target,
            remaining: delay,
            kind,
        });
    }

    /// Drop every pending task aimed at `target`.
    pub fn cancel_for(&mut self, target: Entity) {
        self.entries.retain(|t| t.target != target);
    }

    /// Advance timers and drain the tasks that are due, in schedule order.
    pub fn tick(&mut self, dt: f32) -> Vec<ScheduledTask> {
        let mut due = Vec::new();
        self.entries.retain_mut(|task| {
            task.remaining -= dt;
            if task.remaining <= 0.0 {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn pending_for(&self, target: Entity) -> usize {
        self.entries.iter().filter(|t| t.target == target).count()
    }
}

/// Uniform spatial grid over live bubbles, rebuilt every tick.
///
/// Replaces a brute-force scan of all live bubbles for the chain-radius
/// search; cell size matches the largest query radius.
#[derive(Resource, Debug)]
pub struct BubbleGrid {
    cell_size: f32,
    cells: HashMap<IVec3, Vec<(Entity, Vec3)>>,
}

impl Default for BubbleGrid {
    fn default() -> Self {
        Self::new(BubbleTuning::default().chain_radius)
    }
}

impl BubbleGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(0.1),
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, position: Vec3) -> IVec3 {
        (position / self.cell_size).floor().as_ivec3()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn insert(&mut self, bubble: Entity, position: Vec3) {
        let cell = self.cell_of(position);
        self.cells.entry(cell).or_default().push((bubble, position));
    }

    /// All bubbles within `radius` of `center`, excluding `exclude`.
    /// Sorted by entity id so discovery order is deterministic.
    pub fn within_radius(&self, center: Vec3, radius: f32, exclude: Entity) -> Vec<Entity> {
        let min = self.cell_of(center - Vec3::splat(radius));
        let max = self.cell_of(center + Vec3::splat(radius));
        let radius_sq = radius * radius;

        let mut found = Vec::new();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    let Some(cell) = self.cells.get(&IVec3::new(x, y, z)) else {
                        continue;
                    };
                    for (entity, position) in cell {
                        if *entity != exclude
                            && position.distance_squared(center) <= radius_sq
                        {
                            found.push(*entity);
                        }
                    }
                }
            }
        }

        found.sort_unstable();
        found
    }
}

/// A pop that must be resolved at the end of the current tick.
#[derive(Debug, Clone, Copy)]
pub struct PendingPop {
    pub bubble: Entity,
    pub cause: PopCause,
}

/// Pops queued within the tick by the spawn, lifetime, and scheduling
/// systems; drained once by `resolve_pops`.
#[derive(Resource, Debug, Default)]
pub struct PendingPops {
    entries: Vec<PendingPop>,
}

impl PendingPops {
    pub fn queue(&mut self, bubble: Entity, cause: PopCause) {
        self.entries.push(PendingPop { bubble, cause });
    }

    pub fn drain(&mut self) -> Vec<PendingPop> {
        std::mem::take(&mut self.entries)
    }
}
