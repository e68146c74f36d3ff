//! Core domain: simulation ordering and scene setup.

use bevy::prelude::*;

/// Per-tick simulation stages. Strict and load-bearing: locomotion reads the
/// gravity field stepped this tick, and the bubble rules read both.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SimulationSet {
    Gravity,
    Locomotion,
    Bubbles,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Gravity,
                SimulationSet::Locomotion,
                SimulationSet::Bubbles,
            )
                .chain(),
        )
        .add_systems(Startup, setup_scene);
    }
}

fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 24.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(12.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
