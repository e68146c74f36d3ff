//! Arena domain: the demo world - static geometry, gravity zones, and
//! capturable props.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::gravity::{GravityZoneKind, spawn_gravity_zone};
use crate::locomotion::GameLayer;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

fn ground_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Ground,
        [
            GameLayer::Character,
            GameLayer::Bubble,
            GameLayer::Capturable,
            GameLayer::Ground,
        ],
    )
}

fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let slab_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.4, 0.45),
        ..default()
    });
    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.45, 0.35),
        ..default()
    });

    // Main floor
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(60.0, 2.0, 60.0))),
        MeshMaterial3d(slab_material.clone()),
        Transform::from_xyz(0.0, -1.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(60.0, 2.0, 60.0),
        ground_layers(),
    ));

    // Raised platforms
    let platforms = [
        (Vec3::new(10.0, 2.0, -6.0), Vec3::new(8.0, 1.0, 6.0)),
        (Vec3::new(-12.0, 4.0, 4.0), Vec3::new(6.0, 1.0, 6.0)),
        (Vec3::new(2.0, 7.0, 12.0), Vec3::new(6.0, 1.0, 4.0)),
    ];
    for (position, size) in platforms {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers(),
        ));
    }

    // A ceiling slab to land on after a gravity flip.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(30.0, 2.0, 30.0))),
        MeshMaterial3d(slab_material),
        Transform::from_xyz(0.0, 20.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(30.0, 2.0, 30.0),
        ground_layers(),
    ));

    // Gravity zones: walk through to retarget the field.
    spawn_gravity_zone(
        &mut commands,
        Vec3::new(16.0, 2.0, 8.0),
        Vec3::new(2.0, 2.0, 2.0),
        GravityZoneKind::Redirect {
            direction: Vec3::Y,
            instant: false,
        },
    );
    spawn_gravity_zone(
        &mut commands,
        Vec3::new(-16.0, 2.0, -8.0),
        Vec3::new(2.0, 2.0, 2.0),
        GravityZoneKind::Attract { magnitude: 14.0 },
    );
    spawn_gravity_zone(
        &mut commands,
        Vec3::new(0.0, 2.0, -16.0),
        Vec3::new(2.0, 2.0, 2.0),
        GravityZoneKind::Nullify { instant: false },
    );

    // Capturable props for the bubbles to pick up.
    let prop_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.3, 0.3),
        ..default()
    });
    let prop_mesh = meshes.add(Cuboid::new(0.8, 0.8, 0.8));
    for x in [-4.0, 4.0] {
        commands.spawn((
            crate::bubbles::Capturable,
            Mesh3d(prop_mesh.clone()),
            MeshMaterial3d(prop_material.clone()),
            Transform::from_xyz(x, 0.4, -4.0),
            RigidBody::Dynamic,
            Collider::cuboid(0.8, 0.8, 0.8),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Capturable,
                [GameLayer::Ground, GameLayer::Bubble, GameLayer::Character],
            ),
        ));
    }

    info!("Arena spawned");
}
