//! Gravity domain: trigger zones the character walks through.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::gravity::events::{GravityShiftEvent, GravityZoneEnteredEvent};
use crate::gravity::field::{GravityField, GravityTuning};
use crate::locomotion::{GameLayer, Player};

/// What crossing the zone does to the gravity field.
#[derive(Debug, Clone, Copy)]
pub enum GravityZoneKind {
    /// Linear redirection along `direction` at the field's tuned magnitude.
    Redirect { direction: Vec3, instant: bool },
    /// Point attraction toward the zone's own translation.
    Attract { magnitude: f32 },
    /// Gravity off.
    Nullify { instant: bool },
}

#[derive(Component, Debug)]
pub struct GravityZone {
    pub kind: GravityZoneKind,
}

/// Spawn a box-shaped gravity trigger volume.
pub fn spawn_gravity_zone(
    commands: &mut Commands,
    position: Vec3,
    half_extents: Vec3,
    kind: GravityZoneKind,
) -> Entity {
    commands
        .spawn((
            GravityZone { kind },
            Transform::from_translation(position),
            Sensor,
            RigidBody::Static,
            Collider::cuboid(
                half_extents.x * 2.0,
                half_extents.y * 2.0,
                half_extents.z * 2.0,
            ),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Zone, [GameLayer::Character]),
        ))
        .id()
}

/// Retarget the gravity field when the character enters a zone.
pub(crate) fn apply_gravity_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    zone_query: Query<(&GravityZone, &Transform)>,
    player_query: Query<Entity, With<Player>>,
    tuning: Res<GravityTuning>,
    mut field: ResMut<GravityField>,
    mut shift_events: MessageWriter<GravityShiftEvent>,
    mut entered_events: MessageWriter<GravityZoneEnteredEvent>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (zone_entity, other) = if zone_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if zone_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }

        let Ok((zone, zone_transform)) = zone_query.get(zone_entity) else {
            continue;
        };

        let instant = match zone.kind {
            GravityZoneKind::Redirect { direction, instant } => {
                // A degenerate direction would zero gravity by accident;
                // treat it as no trigger.
                let Some(dir) = direction.try_normalize() else {
                    warn!("[GRAVITY] Redirect zone {:?} has zero direction", zone_entity);
                    continue;
                };
                field.set_directional(dir * tuning.magnitude, instant);
                instant
            }
            GravityZoneKind::Attract { magnitude } => {
                field.set_point_attraction(zone_transform.translation, magnitude);
                false
            }
            GravityZoneKind::Nullify { instant } => {
                field.set_disabled(instant);
                instant
            }
        };

        info!(
            "[GRAVITY] Zone {:?} triggered: {:?} (instant: {})",
            zone_entity,
            field.mode(),
            instant
        );
        shift_events.write(GravityShiftEvent {
            mode: field.mode(),
            instant,
        });
        entered_events.write(GravityZoneEnteredEvent {
            zone: zone_entity,
            subject: player_entity,
        });
    }
}
