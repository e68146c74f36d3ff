//! Gravity domain: unit tests for field transitions and direction queries.

use bevy::prelude::*;

use super::{GravityField, GravityMode};

const SUBJECT: Vec3 = Vec3::ZERO;

#[test]
fn test_instant_directional_snaps_same_tick() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.1);

    field.set_directional(Vec3::X * 20.0, true);

    assert_eq!(field.current(), Vec3::X * 20.0);
    assert!(!field.is_transitioning());
}

#[test]
fn test_smooth_transition_converges_monotonically() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.1);
    let target = Vec3::X * 20.0;

    field.set_directional(target, false);
    assert!(field.is_transitioning());

    let mut distance = field.current().distance(target);
    for _ in 0..500 {
        field.step(SUBJECT);
        let next = field.current().distance(target);
        if field.is_transitioning() {
            assert!(next < distance, "distance must strictly decrease");
        }
        distance = next;
    }

    // Converged: exactly at the target and stays there.
    assert_eq!(field.current(), target);
    assert!(!field.is_transitioning());
    field.step(SUBJECT);
    assert_eq!(field.current(), target);
}

#[test]
fn test_up_down_are_unit_negations() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.1);
    field.set_directional(Vec3::new(3.0, -5.0, 1.0), false);

    for _ in 0..10 {
        field.step(SUBJECT);
        let up = field.up().as_vec3();
        let down = field.down().as_vec3();
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!((down.length() - 1.0).abs() < 1e-5);
        assert!((up + down).length() < 1e-5);
    }
}

#[test]
fn test_zero_magnitude_retains_previous_directions() {
    let mut field = GravityField::new(Vec3::X * 20.0, 0.1);
    let down_before = field.down();

    field.set_disabled(true);
    field.step(SUBJECT);

    assert_eq!(field.current(), Vec3::ZERO);
    assert_eq!(field.down(), down_before);
    assert!(field.up().as_vec3().is_finite());
}

#[test]
fn test_set_disabled_twice_is_idempotent() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.1);

    field.set_disabled(true);
    assert_eq!(field.current(), Vec3::ZERO);

    field.set_disabled(true);
    assert_eq!(field.current(), Vec3::ZERO);
    assert!(matches!(field.mode(), GravityMode::Disabled));
}

#[test]
fn test_point_attraction_recomputes_directly() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.1);
    let center = Vec3::new(10.0, 0.0, 0.0);

    field.set_point_attraction(center, 15.0);

    // Subject left of center: gravity points +X at full magnitude, no easing.
    field.step(Vec3::ZERO);
    assert!((field.current() - Vec3::X * 15.0).length() < 1e-4);

    // Subject moves; the vector tracks it the very next tick.
    field.step(Vec3::new(20.0, 0.0, 0.0));
    assert!((field.current() - Vec3::NEG_X * 15.0).length() < 1e-4);
}

#[test]
fn test_point_attraction_at_center_keeps_previous_vector() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.1);
    let center = Vec3::new(10.0, 0.0, 0.0);

    field.set_point_attraction(center, 15.0);
    field.step(Vec3::ZERO);
    let before = field.current();

    // Subject exactly at the attractor: no direction exists, keep the old one.
    field.step(center);
    assert_eq!(field.current(), before);
}

#[test]
fn test_transition_rate_is_clamped() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 5.0);
    field.set_directional(Vec3::X * 20.0, false);
    field.step(SUBJECT);
    // A rate above the clamp would overshoot past the target in one step.
    assert!(field.current().distance(Vec3::X * 20.0) > 10.0);

    let mut slow = GravityField::new(Vec3::NEG_Y * 20.0, 0.0);
    slow.set_directional(Vec3::X * 20.0, false);
    let d0 = slow.current().distance(Vec3::X * 20.0);
    slow.step(SUBJECT);
    // Clamped up to 0.01, so it still makes progress.
    assert!(slow.current().distance(Vec3::X * 20.0) < d0);
}

#[test]
fn test_instant_cancels_pending_transition() {
    let mut field = GravityField::new(Vec3::NEG_Y * 20.0, 0.05);

    field.set_directional(Vec3::X * 20.0, false);
    field.step(SUBJECT);
    assert!(field.is_transitioning());

    field.set_directional(Vec3::Z * 20.0, true);
    assert!(!field.is_transitioning());
    assert_eq!(field.current(), Vec3::Z * 20.0);
}
