//! Gravity domain: reorientable gravity field, trigger zones, and the
//! physics handoff every other subsystem reads its up/down from.

mod events;
mod field;
mod systems;
#[cfg(test)]
mod tests;
mod zones;

pub use events::{GravityShiftEvent, GravityZoneEnteredEvent};
pub use field::{GravityField, GravityMode, GravityTuning};
pub use zones::{GravityZone, GravityZoneKind, spawn_gravity_zone};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::gravity::systems::{configure_gravity_field, step_gravity_field, sync_physics_gravity};
use crate::gravity::zones::apply_gravity_zones;

pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravityTuning>()
            .init_resource::<GravityField>()
            .add_message::<GravityShiftEvent>()
            .add_message::<GravityZoneEnteredEvent>()
            .add_systems(Startup, configure_gravity_field)
            .add_systems(
                FixedUpdate,
                (apply_gravity_zones, step_gravity_field, sync_physics_gravity)
                    .chain()
                    .in_set(SimulationSet::Gravity),
            );
    }
}
