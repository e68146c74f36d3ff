//! Locomotion domain: tuning and the decoded input snapshot.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Target horizontal speed while Running (m/s).
    pub run_speed: f32,
    /// Horizontal acceleration toward the target speed (m/s²).
    pub run_accel: f32,
    /// Exponential horizontal damping rate while Idle (1/s). High by design:
    /// the stop is snappy, not floaty.
    pub idle_damping: f32,
    /// Input magnitudes at or below this are "no input".
    pub input_deadzone: f32,
    pub jump_speed: f32,
    /// Ground detection is suppressed for this long after a jump (s).
    pub post_jump_grace: f32,
    /// Horizontal speed required before a hard turn counts as a drift (m/s).
    pub drift_speed_threshold: f32,
    /// Angle between input and previous movement direction that starts a
    /// drift (degrees).
    pub drift_angle_threshold: f32,
    /// How long a drift lasts once started (s).
    pub drift_duration: f32,
    /// Braking deceleration applied against the velocity while Drifting (m/s²).
    pub drift_brake: f32,
    /// Fraction of gravity that still applies while Gliding.
    pub glide_factor: f32,
    /// Extra damping on the vertical velocity while Gliding (1/s).
    pub glide_fall_damping: f32,
    /// Descent speed beyond which an airborne character counts as Falling
    /// rather than Jumping (m/s).
    pub fall_speed_threshold: f32,
    /// Plunge speed of the dive attack (m/s).
    pub dive_speed: f32,
    /// Length of the ground detection ray, from the character's center (m).
    pub ground_ray_length: f32,
    /// Facing slerp rate (1/s).
    pub turn_rate: f32,
    /// Distance from the origin beyond which the character is reset.
    pub world_bound_radius: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            run_speed: 10.0,
            run_accel: 60.0,
            idle_damping: 14.0,
            input_deadzone: 0.2,
            jump_speed: 9.0,
            post_jump_grace: 0.15,
            drift_speed_threshold: 8.0,
            drift_angle_threshold: 90.0,
            drift_duration: 0.2,
            drift_brake: 35.0,
            glide_factor: 0.3,
            glide_fall_damping: 3.0,
            fall_speed_threshold: 0.5,
            dive_speed: 22.0,
            ground_ray_length: 1.1,
            turn_rate: 10.0,
            world_bound_radius: 150.0,
        }
    }
}

/// The per-tick decoded input snapshot. The simulation consumes this
/// resource only; device handling stays in the sampling system.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    pub move_axis: Vec2,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub fire_just_pressed: bool,
    pub down_held: bool,
}

impl LocomotionInput {
    /// Consume the edge-triggered flags at the end of a simulation tick.
    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.fire_just_pressed = false;
    }
}
