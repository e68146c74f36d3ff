//! Locomotion domain: character bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{CharacterMotor, CharacterState, GameLayer, Player, SpawnPoint};

const CHARACTER_RADIUS: f32 = 0.4;
const CHARACTER_LENGTH: f32 = 1.0;

/// Spawn the player character with its rigid body and collision layers.
pub(crate) fn spawn_character(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let spawn_position = Vec3::new(0.0, 3.0, 0.0);

    commands.spawn((
        // Identity & state machine
        (
            Player,
            CharacterState::default(),
            CharacterMotor::default(),
            SpawnPoint(spawn_position),
        ),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(CHARACTER_RADIUS, CHARACTER_LENGTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.9, 0.9),
            ..default()
        })),
        Transform::from_translation(spawn_position),
        // Physics: facing is written to the transform by the state machine,
        // so the solver never rotates the body.
        (
            RigidBody::Dynamic,
            Collider::capsule(CHARACTER_RADIUS, CHARACTER_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Character,
                [
                    GameLayer::Ground,
                    GameLayer::Bubble,
                    GameLayer::Capturable,
                    GameLayer::Zone,
                ],
            ),
        ),
    ));

    info!("Spawned character at {:?}", spawn_position);
}
