//! Bubbles domain: the one-way collision rule and trampoline response.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bubbles::components::Bubble;
use crate::bubbles::events::TrampolineEvent;
use crate::bubbles::resources::BubbleTuning;
use crate::gravity::GravityField;
use crate::locomotion::{GameLayer, Player};

/// Layers of a solid bubble: part of `Ground`, so the character's ground ray
/// hits it and it carries weight like any platform.
pub(crate) fn solid_layers() -> CollisionLayers {
    CollisionLayers::new(
        [GameLayer::Bubble, GameLayer::Ground],
        [
            GameLayer::Character,
            GameLayer::Ground,
            GameLayer::Bubble,
            GameLayer::Capturable,
        ],
    )
}

/// Layers of a ghost bubble: the character passes straight through, the rest
/// of the world still collides.
pub(crate) fn ghost_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Bubble,
        [GameLayer::Ground, GameLayer::Bubble, GameLayer::Capturable],
    )
}

/// The one-way rule: a bubble is solid only for a character that is above it
/// (along `up`) and descending beyond a small threshold. Pure, recomputed
/// every tick.
pub(crate) fn is_solid(
    character_position: Vec3,
    bubble_position: Vec3,
    character_velocity: Vec3,
    up: Vec3,
    descent_threshold: f32,
) -> bool {
    let above = (character_position - bubble_position).dot(up) > 0.0;
    let descending = character_velocity.dot(-up) > descent_threshold;
    above && descending
}

/// Recompute solidity for every live bubble and swap collision layers to
/// match. Without a character everything is a ghost.
pub(crate) fn update_solidity(
    field: Res<GravityField>,
    tuning: Res<BubbleTuning>,
    player_query: Query<(&Transform, &LinearVelocity), With<Player>>,
    mut bubble_query: Query<(&Transform, &mut Bubble, &mut CollisionLayers)>,
) {
    let up = field.up().as_vec3();
    let character = player_query
        .iter()
        .next()
        .map(|(t, v)| (t.translation, v.0));

    for (transform, mut bubble, mut layers) in &mut bubble_query {
        let solid = match character {
            Some((position, velocity)) => is_solid(
                position,
                transform.translation,
                velocity,
                up,
                tuning.descent_threshold,
            ),
            None => false,
        };

        if solid != bubble.solid {
            bubble.solid = solid;
            *layers = if solid { solid_layers() } else { ghost_layers() };
        }
    }
}

/// Landing hard on a solid bubble inverts and amplifies the character's
/// vertical velocity.
pub(crate) fn apply_trampoline(
    mut collision_start_events: MessageReader<CollisionStart>,
    field: Res<GravityField>,
    tuning: Res<BubbleTuning>,
    bubble_query: Query<&Bubble>,
    mut player_query: Query<(Entity, &mut LinearVelocity), With<Player>>,
    mut trampoline_events: MessageWriter<TrampolineEvent>,
) {
    let Some((player_entity, mut velocity)) = player_query.iter_mut().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    let up = field.up().as_vec3();

    for event in collision_start_events.read() {
        let (bubble_entity, other) = if bubble_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if bubble_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }

        let Ok(bubble) = bubble_query.get(bubble_entity) else {
            continue;
        };
        if !bubble.solid {
            continue;
        }

        let descent = velocity.0.dot(-up);
        if descent < tuning.trampoline_min_speed {
            continue;
        }

        // Invert and amplify the vertical component, keep the horizontal.
        let horizontal = velocity.0 + up * descent;
        velocity.0 = horizontal + up * descent * tuning.trampoline_restitution;

        debug!(
            "[BUBBLE] Trampoline off {:?} at descent {:.1}",
            bubble_entity, descent
        );
        trampoline_events.write(TrampolineEvent {
            bubble: bubble_entity,
            character: player_entity,
        });
    }
}
