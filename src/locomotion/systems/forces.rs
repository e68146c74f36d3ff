//! Locomotion domain: per-state velocity application.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::gravity::GravityField;
use crate::locomotion::systems::input::camera_relative_direction;
use crate::locomotion::systems::states::split_velocity;
use crate::locomotion::{CharacterMotor, CharacterState, LocomotionInput, LocomotionTuning, Player};

/// Apply the active state's force rule to the body, at velocity level.
/// Gravity itself comes from the physics engine; these rules only shape the
/// response around it.
pub(crate) fn apply_state_forces(
    time: Res<Time>,
    field: Res<GravityField>,
    tuning: Res<LocomotionTuning>,
    input: Res<LocomotionInput>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<Player>)>,
    mut query: Query<(&CharacterState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let up = field.up().as_vec3();
    let camera_rotation = camera_query
        .iter()
        .next()
        .map(|t| t.rotation)
        .unwrap_or_default();

    let steer = if input.move_axis.length() > tuning.input_deadzone {
        camera_relative_direction(camera_rotation, up, input.move_axis)
    } else {
        None
    };

    for (state, mut velocity) in &mut query {
        let (mut horizontal, mut vertical) = split_velocity(velocity.0, up);

        match state {
            CharacterState::Idle => {
                // Snappy stop: strong damping, no steering.
                let decay = (tuning.idle_damping * dt).min(1.0);
                horizontal *= 1.0 - decay;
            }
            CharacterState::Running => {
                let target = steer.map(|d| d * tuning.run_speed).unwrap_or(Vec3::ZERO);
                horizontal = horizontal.move_towards(target, tuning.run_accel * dt);
            }
            CharacterState::Drifting => {
                // Brake against the slide while still accepting steering.
                horizontal = horizontal.move_towards(Vec3::ZERO, tuning.drift_brake * dt);
                if let Some(dir) = steer {
                    horizontal += dir * tuning.run_accel * dt;
                }
            }
            CharacterState::Jumping | CharacterState::Falling => {
                // Air control at the same accel the ground uses.
                if let Some(dir) = steer {
                    horizontal =
                        horizontal.move_towards(dir * tuning.run_speed, tuning.run_accel * dt);
                }
            }
            CharacterState::Gliding => {
                // Counter most of gravity and bleed descent speed.
                vertical += field.magnitude() * (1.0 - tuning.glide_factor) * dt;
                if vertical < 0.0 {
                    vertical *= 1.0 - (tuning.glide_fall_damping * dt).min(1.0);
                }
                if let Some(dir) = steer {
                    horizontal =
                        horizontal.move_towards(dir * tuning.run_speed, tuning.run_accel * dt);
                }
            }
            CharacterState::DiveAttack => {
                // Locked plunge: no steering, constant speed along down.
                velocity.0 = field.down().as_vec3() * tuning.dive_speed;
                continue;
            }
        }

        velocity.0 = horizontal + up * vertical;
    }
}

/// Record the previous tick's velocity and movement direction for the drift
/// angle check.
pub(crate) fn record_motion(
    field: Res<GravityField>,
    mut query: Query<(&LinearVelocity, &mut CharacterMotor), With<Player>>,
) {
    let up = field.up().as_vec3();

    for (velocity, mut motor) in &mut query {
        motor.previous_velocity = velocity.0;

        let (horizontal, _) = split_velocity(velocity.0, up);
        if horizontal.length_squared() > 0.01 {
            motor.previous_move_direction = horizontal.normalize();
        }
    }
}
