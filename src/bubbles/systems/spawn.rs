//! Bubbles domain: firing, recoil, and capacity eviction.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::bubbles::components::{Bubble, PopCause};
use crate::bubbles::events::BubbleSpawnedEvent;
use crate::bubbles::resources::{BubbleLedger, BubbleTuning, PendingPops};
use crate::bubbles::systems::solidity::ghost_layers;
use crate::locomotion::{CharacterMotor, LocomotionInput, Player};

/// Shared render handles so firing does not allocate new assets per shot.
#[derive(Resource, Debug)]
pub struct BubbleAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub loaded_material: Handle<StandardMaterial>,
}

pub(crate) fn setup_bubble_assets(
    mut commands: Commands,
    tuning: Res<BubbleTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(BubbleAssets {
        mesh: meshes.add(Sphere::new(tuning.radius)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.5, 0.8, 1.0, 0.6),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        loaded_material: materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.7, 0.4, 0.8),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
    });
}

/// Spawn a bubble on fire input.
///
/// At capacity the oldest live bubble is popped first (with its normal pop
/// side effects). Recoil only applies to an airborne firer - kicking a
/// grounded character around would disrupt ground movement.
pub(crate) fn fire_bubbles(
    mut commands: Commands,
    input: Res<LocomotionInput>,
    tuning: Res<BubbleTuning>,
    assets: Res<BubbleAssets>,
    mut ledger: ResMut<BubbleLedger>,
    mut pending: ResMut<PendingPops>,
    mut firer_query: Query<(&Transform, &CharacterMotor, &mut LinearVelocity), With<Player>>,
    mut spawn_events: MessageWriter<BubbleSpawnedEvent>,
) {
    if !input.fire_just_pressed {
        return;
    }

    let Some((transform, motor, mut velocity)) = firer_query.iter_mut().next() else {
        return;
    };

    // Evict before spawning so the pool never exceeds capacity.
    while ledger.len() >= tuning.capacity.max(1) {
        let Some(oldest) = ledger.take_oldest() else {
            break;
        };
        debug!("[BUBBLE] Pool full, evicting {:?}", oldest);
        pending.queue(oldest, PopCause::Eviction);
    }

    let facing = transform.rotation * Vec3::NEG_Z;
    let position = transform.translation + facing * tuning.muzzle_offset;

    let bubble = commands
        .spawn((
            Bubble::new(tuning.lifetime),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            Transform::from_translation(position),
            (
                RigidBody::Dynamic,
                Collider::sphere(tuning.radius),
                Mass(tuning.mass),
                GravityScale(tuning.buoyancy_scale),
                LinearVelocity(facing * tuning.fire_speed),
                LinearDamping(0.4),
                CollisionEventsEnabled,
                ghost_layers(),
            ),
        ))
        .id();

    ledger.push(bubble);
    spawn_events.write(BubbleSpawnedEvent { bubble, position });

    if !motor.grounded {
        velocity.0 -= facing * tuning.recoil_speed;
    }
}
