//! Locomotion domain: the state machine transition function and its driver.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::gravity::GravityField;
use crate::locomotion::events::{DiveImpactEvent, JumpedEvent, LandedEvent, StateChangedEvent};
use crate::locomotion::systems::input::camera_relative_direction;
use crate::locomotion::{CharacterMotor, CharacterState, LocomotionInput, LocomotionTuning, Player};

/// Everything `next_state` is allowed to look at. Built from sampled values
/// so the transition logic stays pure and testable without a physics engine.
#[derive(Debug, Clone)]
pub(crate) struct StateContext {
    pub state: CharacterState,
    pub grounded: bool,
    /// Camera-relative steering direction; zero when input is below the
    /// deadzone or the projection is degenerate.
    pub input_direction: Vec3,
    pub input_magnitude: f32,
    pub horizontal_speed: f32,
    /// Signed speed along `up` (positive = rising).
    pub vertical_speed: f32,
    pub previous_move_direction: Vec3,
    pub drift_timer: f32,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub down_held: bool,
}

/// Split a velocity into its component in the plane perpendicular to `up`
/// and its signed speed along `up`.
pub(crate) fn split_velocity(velocity: Vec3, up: Vec3) -> (Vec3, f32) {
    let vertical = velocity.dot(up);
    (velocity - up * vertical, vertical)
}

/// Angle between two directions in degrees; zero if either is degenerate.
pub(crate) fn angle_between_degrees(a: Vec3, b: Vec3) -> f32 {
    if a.length_squared() < 1e-6 || b.length_squared() < 1e-6 {
        return 0.0;
    }
    a.angle_between(b).to_degrees()
}

/// The transition function. Evaluated once per tick, precedence order:
/// dive entry, dive exit, grounded branch (jump / drift / run / idle),
/// airborne branch (glide / fall / rise).
pub(crate) fn next_state(ctx: &StateContext, tuning: &LocomotionTuning) -> CharacterState {
    // Dive attack entry beats everything else, from any aerial state.
    if !ctx.grounded
        && ctx.down_held
        && ctx.jump_held
        && ctx.state != CharacterState::DiveAttack
    {
        return CharacterState::DiveAttack;
    }

    // A dive holds until the ground stops it.
    if ctx.state == CharacterState::DiveAttack {
        return if ctx.grounded {
            CharacterState::Idle
        } else {
            CharacterState::DiveAttack
        };
    }

    if ctx.grounded {
        if ctx.jump_just_pressed {
            return CharacterState::Jumping;
        }

        // An active drift runs its timer out before re-evaluating.
        if ctx.state == CharacterState::Drifting && ctx.drift_timer > 0.0 {
            return CharacterState::Drifting;
        }

        if ctx.horizontal_speed > tuning.drift_speed_threshold
            && ctx.input_magnitude > tuning.input_deadzone
            && angle_between_degrees(ctx.input_direction, ctx.previous_move_direction)
                > tuning.drift_angle_threshold
        {
            return CharacterState::Drifting;
        }

        if ctx.input_magnitude > tuning.input_deadzone {
            CharacterState::Running
        } else {
            CharacterState::Idle
        }
    } else {
        if ctx.vertical_speed < 0.0 && ctx.jump_held {
            return CharacterState::Gliding;
        }
        if ctx.vertical_speed < -tuning.fall_speed_threshold {
            return CharacterState::Falling;
        }
        CharacterState::Jumping
    }
}

/// Run the transition function for each character and apply entry side
/// effects (impulses, timers, events).
pub(crate) fn advance_states(
    field: Res<GravityField>,
    tuning: Res<LocomotionTuning>,
    input: Res<LocomotionInput>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<Player>)>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut CharacterState,
            &mut CharacterMotor,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut state_events: MessageWriter<StateChangedEvent>,
    mut jump_events: MessageWriter<JumpedEvent>,
    mut land_events: MessageWriter<LandedEvent>,
    mut dive_events: MessageWriter<DiveImpactEvent>,
) {
    let up = field.up().as_vec3();
    let camera_rotation = camera_query
        .iter()
        .next()
        .map(|t| t.rotation)
        .unwrap_or_default();

    for (entity, transform, mut state, mut motor, mut velocity) in &mut query {
        let (horizontal, vertical_speed) = split_velocity(velocity.0, up);

        let input_magnitude = input.move_axis.length();
        let input_direction = if input_magnitude > tuning.input_deadzone {
            camera_relative_direction(camera_rotation, up, input.move_axis).unwrap_or(Vec3::ZERO)
        } else {
            Vec3::ZERO
        };

        let ctx = StateContext {
            state: *state,
            grounded: motor.grounded,
            input_direction,
            input_magnitude,
            horizontal_speed: horizontal.length(),
            vertical_speed,
            previous_move_direction: motor.previous_move_direction,
            drift_timer: motor.drift_timer,
            jump_held: input.jump_held,
            jump_just_pressed: input.jump_just_pressed,
            down_held: input.down_held,
        };

        let new_state = next_state(&ctx, &tuning);

        // The jump impulse fires on the input edge even when the state label
        // does not change (landing and jumping on the same tick).
        if new_state == CharacterState::Jumping && ctx.grounded && ctx.jump_just_pressed {
            // One impulse along up; horizontal carry is kept.
            velocity.0 = horizontal + up * tuning.jump_speed;
            motor.post_jump_timer = tuning.post_jump_grace;
            motor.grounded = false;
            jump_events.write(JumpedEvent { entity });
        }

        if new_state == *state {
            continue;
        }

        match new_state {
            CharacterState::DiveAttack => {
                // Large impulse straight down, horizontal velocity zeroed.
                velocity.0 = field.down().as_vec3() * tuning.dive_speed;
            }
            CharacterState::Drifting => {
                motor.drift_timer = tuning.drift_duration;
            }
            _ => {}
        }

        if *state == CharacterState::DiveAttack && ctx.grounded {
            dive_events.write(DiveImpactEvent {
                entity,
                position: transform.translation,
            });
        } else if state.is_airborne() && ctx.grounded {
            land_events.write(LandedEvent { entity });
        }

        debug!("[STATE] {:?} -> {:?}", *state, new_state);
        state_events.write(StateChangedEvent {
            entity,
            from: *state,
            to: new_state,
        });
        *state = new_state;
    }
}
