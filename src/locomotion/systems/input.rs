//! Locomotion domain: input sampling and camera-relative steering.

use bevy::prelude::*;

use crate::locomotion::LocomotionInput;

/// Decode keyboard state into the per-tick input snapshot.
///
/// Runs in `Update`; edge flags accumulate until the fixed tick consumes
/// them, so a press between ticks is never dropped.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.move_axis = Vec2::new(x, y);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.jump_just_pressed |= keyboard.just_pressed(KeyCode::Space);
    input.fire_just_pressed |=
        keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyZ);
    input.down_held = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::KeyC);
}

/// Consume edge-triggered flags once the simulation tick has run.
pub(crate) fn clear_input_edges(mut input: ResMut<LocomotionInput>) {
    input.clear_edges();
}

/// Map the raw 2D axis through the camera yaw onto the plane perpendicular
/// to `up`. Returns `None` when the axis is zero or the camera looks along
/// `up` (no usable projection) - callers keep their previous direction.
pub(crate) fn camera_relative_direction(
    camera_rotation: Quat,
    up: Vec3,
    axis: Vec2,
) -> Option<Vec3> {
    if axis.length_squared() < 1e-6 {
        return None;
    }

    let camera_forward = camera_rotation * Vec3::NEG_Z;
    let forward = (camera_forward - up * camera_forward.dot(up)).try_normalize()?;
    let right = forward.cross(up);

    (forward * axis.y + right * axis.x).try_normalize()
}
