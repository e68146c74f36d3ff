//! Locomotion domain: unit tests for the transition function and helpers.

use bevy::prelude::*;

use super::systems::input::camera_relative_direction;
use super::systems::states::{
    StateContext, angle_between_degrees, next_state, split_velocity,
};
use super::{CharacterState, LocomotionTuning};

fn grounded_ctx(state: CharacterState) -> StateContext {
    StateContext {
        state,
        grounded: true,
        input_direction: Vec3::ZERO,
        input_magnitude: 0.0,
        horizontal_speed: 0.0,
        vertical_speed: 0.0,
        previous_move_direction: Vec3::ZERO,
        drift_timer: 0.0,
        jump_held: false,
        jump_just_pressed: false,
        down_held: false,
    }
}

fn airborne_ctx(state: CharacterState, vertical_speed: f32) -> StateContext {
    StateContext {
        grounded: false,
        vertical_speed,
        ..grounded_ctx(state)
    }
}

#[test]
fn test_idle_with_input_starts_running() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        input_direction: Vec3::Z,
        input_magnitude: 1.0,
        ..grounded_ctx(CharacterState::Idle)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Running);
}

#[test]
fn test_no_input_settles_to_idle() {
    let tuning = LocomotionTuning::default();
    let ctx = grounded_ctx(CharacterState::Running);

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Idle);
}

#[test]
fn test_deadzone_input_is_no_input() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        input_magnitude: tuning.input_deadzone * 0.5,
        ..grounded_ctx(CharacterState::Idle)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Idle);
}

#[test]
fn test_hard_turn_at_speed_starts_drift() {
    let tuning = LocomotionTuning::default();
    // Speed 10 > threshold 8, input 100 degrees away from travel > 90.
    let turn = Quat::from_rotation_y(100f32.to_radians());
    let ctx = StateContext {
        horizontal_speed: 10.0,
        previous_move_direction: Vec3::Z,
        input_direction: turn * Vec3::Z,
        input_magnitude: 1.0,
        ..grounded_ctx(CharacterState::Running)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Drifting);
}

#[test]
fn test_gentle_turn_keeps_running() {
    let tuning = LocomotionTuning::default();
    let turn = Quat::from_rotation_y(45f32.to_radians());
    let ctx = StateContext {
        horizontal_speed: 10.0,
        previous_move_direction: Vec3::Z,
        input_direction: turn * Vec3::Z,
        input_magnitude: 1.0,
        ..grounded_ctx(CharacterState::Running)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Running);
}

#[test]
fn test_slow_hard_turn_does_not_drift() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        horizontal_speed: 5.0,
        previous_move_direction: Vec3::Z,
        input_direction: Vec3::NEG_Z,
        input_magnitude: 1.0,
        ..grounded_ctx(CharacterState::Running)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Running);
}

#[test]
fn test_drift_holds_while_timer_runs() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        drift_timer: 0.1,
        input_direction: Vec3::Z,
        input_magnitude: 1.0,
        ..grounded_ctx(CharacterState::Drifting)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Drifting);
}

#[test]
fn test_drift_releases_when_timer_elapses() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        drift_timer: 0.0,
        input_direction: Vec3::Z,
        input_magnitude: 1.0,
        ..grounded_ctx(CharacterState::Drifting)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Running);
}

#[test]
fn test_jump_is_edge_triggered() {
    let tuning = LocomotionTuning::default();
    let pressed = StateContext {
        jump_just_pressed: true,
        jump_held: true,
        ..grounded_ctx(CharacterState::Running)
    };
    let held_only = StateContext {
        jump_held: true,
        ..grounded_ctx(CharacterState::Running)
    };

    assert_eq!(next_state(&pressed, &tuning), CharacterState::Jumping);
    assert_ne!(next_state(&held_only, &tuning), CharacterState::Jumping);
}

#[test]
fn test_dive_entry_from_any_aerial_state() {
    let tuning = LocomotionTuning::default();
    for state in [
        CharacterState::Falling,
        CharacterState::Jumping,
        CharacterState::Gliding,
    ] {
        let ctx = StateContext {
            down_held: true,
            jump_held: true,
            ..airborne_ctx(state, -2.0)
        };
        assert_eq!(
            next_state(&ctx, &tuning),
            CharacterState::DiveAttack,
            "expected dive entry from {:?}",
            state
        );
    }
}

#[test]
fn test_dive_is_not_entered_while_grounded() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        down_held: true,
        jump_held: true,
        ..grounded_ctx(CharacterState::Idle)
    };

    assert_ne!(next_state(&ctx, &tuning), CharacterState::DiveAttack);
}

#[test]
fn test_dive_holds_until_grounded() {
    let tuning = LocomotionTuning::default();
    let airborne = airborne_ctx(CharacterState::DiveAttack, -20.0);
    assert_eq!(next_state(&airborne, &tuning), CharacterState::DiveAttack);

    let landed = StateContext {
        grounded: true,
        ..airborne_ctx(CharacterState::DiveAttack, 0.0)
    };
    assert_eq!(next_state(&landed, &tuning), CharacterState::Idle);
}

#[test]
fn test_descending_with_jump_held_glides() {
    let tuning = LocomotionTuning::default();
    let ctx = StateContext {
        jump_held: true,
        ..airborne_ctx(CharacterState::Falling, -3.0)
    };

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Gliding);
}

#[test]
fn test_descending_without_jump_falls() {
    let tuning = LocomotionTuning::default();
    let ctx = airborne_ctx(CharacterState::Jumping, -3.0);

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Falling);
}

#[test]
fn test_rising_stays_jumping() {
    let tuning = LocomotionTuning::default();
    let ctx = airborne_ctx(CharacterState::Jumping, 4.0);

    assert_eq!(next_state(&ctx, &tuning), CharacterState::Jumping);
}

// -----------------------------------------------------------------------------
// Helper tests
// -----------------------------------------------------------------------------

#[test]
fn test_split_velocity_components() {
    let up = Vec3::Y;
    let (horizontal, vertical) = split_velocity(Vec3::new(3.0, -2.0, 4.0), up);

    assert!((horizontal - Vec3::new(3.0, 0.0, 4.0)).length() < 1e-5);
    assert!((vertical + 2.0).abs() < 1e-5);
}

#[test]
fn test_split_velocity_tilted_up() {
    let up = Vec3::X;
    let (horizontal, vertical) = split_velocity(Vec3::new(5.0, 1.0, 0.0), up);

    assert!((horizontal - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    assert!((vertical - 5.0).abs() < 1e-5);
}

#[test]
fn test_angle_between_degenerate_is_zero() {
    assert_eq!(angle_between_degrees(Vec3::ZERO, Vec3::Z), 0.0);
    assert_eq!(angle_between_degrees(Vec3::Z, Vec3::ZERO), 0.0);
}

#[test]
fn test_camera_relative_projection() {
    // Camera looking along -Z, world up: forward input maps to -Z.
    let dir = camera_relative_direction(Quat::IDENTITY, Vec3::Y, Vec2::new(0.0, 1.0)).unwrap();
    assert!((dir - Vec3::NEG_Z).length() < 1e-5);

    let right = camera_relative_direction(Quat::IDENTITY, Vec3::Y, Vec2::new(1.0, 0.0)).unwrap();
    assert!((right - Vec3::X).length() < 1e-5);
}

#[test]
fn test_camera_relative_degenerate_projection() {
    // Camera looking straight along up: nothing to project onto the plane.
    let looking_down = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
    let dir = camera_relative_direction(looking_down, Vec3::Y, Vec2::new(0.0, 1.0));
    assert!(dir.is_none());

    assert!(camera_relative_direction(Quat::IDENTITY, Vec3::Y, Vec2::ZERO).is_none());
}
