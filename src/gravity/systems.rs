//! Gravity domain: per-tick field stepping and physics handoff.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::gravity::field::{GravityField, GravityTuning};
use crate::locomotion::Player;

/// Pick up the tuned transition rate once the content loader has run.
pub(crate) fn configure_gravity_field(
    tuning: Res<GravityTuning>,
    mut field: ResMut<GravityField>,
) {
    field.set_transition_rate(tuning.transition_rate);
    field.set_directional(Vec3::NEG_Y * tuning.magnitude, true);
}

/// Advance the field one tick. Point attraction measures against the
/// character; without one it falls back to measuring from the origin.
pub(crate) fn step_gravity_field(
    mut field: ResMut<GravityField>,
    player_query: Query<&Transform, With<Player>>,
) {
    let subject = player_query
        .iter()
        .next()
        .map(|t| t.translation)
        .unwrap_or(Vec3::ZERO);

    field.step(subject);
}

/// Push the current vector into the physics simulation.
pub(crate) fn sync_physics_gravity(field: Res<GravityField>, mut gravity: ResMut<Gravity>) {
    gravity.0 = field.current();
}
