//! Debug overlay for fast iteration (dev-tools feature).
//!
//! Features:
//! - Gravity vector and bubble solidity gizmos
//! - Manual gravity retargeting hotkeys
//! - Pop the bubble nearest the character

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::bubbles::{Bubble, PopBubbleEvent};
use crate::gravity::{GravityField, GravityShiftEvent, GravityTuning};
use crate::locomotion::{CharacterState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_gizmos: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, draw_debug_gizmos).chain());
    }
}

/// F1 toggles gizmos; Ctrl+G/R/N retarget gravity; Ctrl+P pops the nearest
/// bubble (exercises the direct-hit chain path without a weapon).
fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    tuning: Res<GravityTuning>,
    mut field: ResMut<GravityField>,
    mut shift_events: MessageWriter<GravityShiftEvent>,
    mut pop_events: MessageWriter<PopBubbleEvent>,
    player_query: Query<(&Transform, &CharacterState), With<Player>>,
    bubble_query: Query<(Entity, &Transform), With<Bubble>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("[DEBUG] Gizmos: {}", debug_state.show_gizmos);
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+G: flip gravity upward
    if keyboard.just_pressed(KeyCode::KeyG) {
        field.set_directional(Vec3::Y * tuning.magnitude, false);
        shift_events.write(GravityShiftEvent {
            mode: field.mode(),
            instant: false,
        });
        info!("[DEBUG] Gravity flipped up");
    }

    // Ctrl+R: restore downward gravity
    if keyboard.just_pressed(KeyCode::KeyR) {
        field.set_directional(Vec3::NEG_Y * tuning.magnitude, false);
        shift_events.write(GravityShiftEvent {
            mode: field.mode(),
            instant: false,
        });
        info!("[DEBUG] Gravity restored");
    }

    // Ctrl+N: nullify
    if keyboard.just_pressed(KeyCode::KeyN) {
        field.set_disabled(false);
        shift_events.write(GravityShiftEvent {
            mode: field.mode(),
            instant: false,
        });
        info!("[DEBUG] Gravity nullified");
    }

    // Ctrl+P: pop the bubble nearest the character
    if keyboard.just_pressed(KeyCode::KeyP) {
        let Some((player_transform, state)) = player_query.iter().next() else {
            return;
        };
        let origin = player_transform.translation;

        let nearest = bubble_query
            .iter()
            .min_by(|(_, a), (_, b)| {
                a.translation
                    .distance_squared(origin)
                    .total_cmp(&b.translation.distance_squared(origin))
            })
            .map(|(entity, _)| entity);

        if let Some(bubble) = nearest {
            info!("[DEBUG] Popping {:?} (character state {:?})", bubble, state);
            pop_events.write(PopBubbleEvent { bubble });
        }
    }
}

fn draw_debug_gizmos(
    debug_state: Res<DebugState>,
    field: Res<GravityField>,
    player_query: Query<&Transform, With<Player>>,
    bubble_query: Query<(&Transform, &Bubble)>,
    mut gizmos: Gizmos,
) {
    if !debug_state.show_gizmos {
        return;
    }

    // Gravity direction from the character
    if let Some(transform) = player_query.iter().next() {
        let origin = transform.translation;
        gizmos.arrow(
            origin,
            origin + field.down().as_vec3() * 2.0,
            Color::srgb(0.9, 0.3, 0.3),
        );
    }

    // Solidity per bubble: green solid, gray ghost
    for (transform, bubble) in &bubble_query {
        let color = if bubble.solid {
            Color::srgb(0.3, 0.9, 0.3)
        } else {
            Color::srgb(0.5, 0.5, 0.5)
        };
        gizmos.sphere(transform.translation, 0.55, color);
    }
}
