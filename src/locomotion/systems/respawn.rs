//! Locomotion domain: out-of-bounds safety net.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::locomotion::events::CharacterResetEvent;
use crate::locomotion::{
    CharacterMotor, CharacterState, LocomotionTuning, Player, SpawnPoint,
};

/// Reset (never despawn) a character that has left the world.
///
/// With reorientable gravity there is no single "below the floor" plane, so
/// the bound is a radius around the origin.
pub(crate) fn apply_world_bounds(
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &SpawnPoint,
            &mut CharacterState,
            &mut CharacterMotor,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut reset_events: MessageWriter<CharacterResetEvent>,
) {
    for (entity, mut transform, spawn, mut state, mut motor, mut velocity) in &mut query {
        if transform.translation.length() <= tuning.world_bound_radius {
            continue;
        }

        warn!(
            "Character {:?} left the world at {:?}; resetting",
            entity, transform.translation
        );

        transform.translation = spawn.0;
        transform.rotation = Quat::IDENTITY;
        velocity.0 = Vec3::ZERO;
        *state = CharacterState::Idle;
        *motor = CharacterMotor::default();

        reset_events.write(CharacterResetEvent { entity });
    }
}
