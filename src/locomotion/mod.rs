//! Locomotion domain: the character state machine, grounding, and steering.

mod components;
mod events;
mod resources;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{CharacterMotor, CharacterState, GameLayer, Player, SpawnPoint};
pub use events::{
    CharacterResetEvent, DiveImpactEvent, JumpedEvent, LandedEvent, StateChangedEvent,
};
pub use resources::{LocomotionInput, LocomotionTuning};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::locomotion::spawn::spawn_character;
use crate::locomotion::systems::{
    advance_states, apply_state_forces, apply_world_bounds, clear_input_edges, detect_ground,
    read_input, record_motion, turn_toward_input, update_motor_timers,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_message::<StateChangedEvent>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<DiveImpactEvent>()
            .add_message::<CharacterResetEvent>()
            .add_systems(Startup, spawn_character)
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (
                    update_motor_timers,
                    detect_ground,
                    advance_states,
                    apply_state_forces,
                    record_motion,
                    turn_toward_input,
                    apply_world_bounds,
                )
                    .chain()
                    .in_set(SimulationSet::Locomotion),
            )
            // Edge flags live until every consumer has run this tick.
            .add_systems(
                FixedUpdate,
                clear_input_edges.after(SimulationSet::Bubbles),
            );
    }
}
