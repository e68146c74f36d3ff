//! Bubbles domain: capture-and-carry behavior.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bubbles::components::{Bubble, Capturable};
use crate::bubbles::events::CaptureEvent;
use crate::bubbles::resources::{BubbleTuning, ScheduledTasks, TaskKind};
use crate::bubbles::systems::spawn::BubbleAssets;

/// Load a bubble when it touches a capturable entity.
///
/// The bubble gains mass and loses most of its buoyancy; the rigid
/// attachment of the captured entity is a collaborator concern - this core
/// only holds the reference. Release goes through the cancellable task
/// registry so a popped bubble never leaves a timer behind.
pub(crate) fn capture_on_contact(
    mut collision_start_events: MessageReader<CollisionStart>,
    tuning: Res<BubbleTuning>,
    assets: Res<BubbleAssets>,
    capturable_query: Query<Entity, With<Capturable>>,
    mut bubble_query: Query<(
        &mut Bubble,
        &mut Mass,
        &mut GravityScale,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
    mut tasks: ResMut<ScheduledTasks>,
    mut capture_events: MessageWriter<CaptureEvent>,
) {
    for event in collision_start_events.read() {
        let (bubble_entity, other) = if bubble_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if bubble_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if capturable_query.get(other).is_err() {
            continue;
        }

        let Ok((mut bubble, mut mass, mut gravity_scale, mut material)) =
            bubble_query.get_mut(bubble_entity)
        else {
            continue;
        };

        // One passenger per bubble.
        if bubble.is_loaded() {
            continue;
        }

        bubble.carrying = Some(other);
        mass.0 = tuning.carried_mass;
        gravity_scale.0 = tuning.carried_buoyancy_scale;
        material.0 = assets.loaded_material.clone();

        tasks.schedule(bubble_entity, tuning.carry_duration, TaskKind::Release);

        info!("[BUBBLE] {:?} captured {:?}", bubble_entity, other);
        capture_events.write(CaptureEvent {
            bubble: bubble_entity,
            captured: other,
        });
    }
}
