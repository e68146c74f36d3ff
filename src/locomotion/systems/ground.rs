//! Locomotion domain: gravity-relative ground detection and motor timers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::gravity::GravityField;
use crate::locomotion::{CharacterMotor, GameLayer, LocomotionTuning, Player};

pub(crate) fn update_motor_timers(
    time: Res<Time>,
    mut query: Query<&mut CharacterMotor, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut motor in &mut query {
        if motor.post_jump_timer > 0.0 {
            motor.post_jump_timer -= dt;
        }
        if motor.drift_timer > 0.0 {
            motor.drift_timer -= dt;
        }
    }
}

/// Cast a short ray along the current "down" to detect ground.
///
/// Detection is skipped entirely while the post-jump window is open, so the
/// jump impulse can separate the body from the surface. A miss means
/// airborne - never an error.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    field: Res<GravityField>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&Transform, &mut CharacterMotor), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut motor) in &mut query {
        if motor.post_jump_timer > 0.0 {
            motor.grounded = false;
            continue;
        }

        let hit = spatial_query.cast_ray(
            transform.translation,
            field.down(),
            tuning.ground_ray_length,
            true,
            &ground_filter,
        );

        motor.grounded = hit.is_some();
    }
}
