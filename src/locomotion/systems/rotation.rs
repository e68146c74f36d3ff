//! Locomotion domain: smooth facing toward the steering direction.

use bevy::prelude::*;

use crate::gravity::GravityField;
use crate::locomotion::systems::input::camera_relative_direction;
use crate::locomotion::{LocomotionInput, LocomotionTuning, Player};

/// Slerp the character's facing toward the camera-relative input direction.
/// Never instantaneous - visual snapping reads as a glitch.
pub(crate) fn turn_toward_input(
    time: Res<Time>,
    field: Res<GravityField>,
    tuning: Res<LocomotionTuning>,
    input: Res<LocomotionInput>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<Player>)>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    if input.move_axis.length() <= tuning.input_deadzone {
        return;
    }

    let up = field.up().as_vec3();
    let Some(camera_transform) = camera_query.iter().next() else {
        return;
    };
    let Some(direction) = camera_relative_direction(camera_transform.rotation, up, input.move_axis)
    else {
        return;
    };

    let dt = time.delta_secs();
    for mut transform in &mut query {
        let target = Transform::from_translation(transform.translation)
            .looking_to(direction, up)
            .rotation;
        transform.rotation = transform.rotation.slerp(target, (tuning.turn_rate * dt).min(1.0));
    }
}
