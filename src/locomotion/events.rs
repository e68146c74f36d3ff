//! Locomotion domain: state machine events for presentation consumers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::locomotion::CharacterState;

/// Emitted on every state machine transition
#[derive(Debug)]
pub struct StateChangedEvent {
    pub entity: Entity,
    pub from: CharacterState,
    pub to: CharacterState,
}

impl Message for StateChangedEvent {}

#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Emitted when a dive attack reaches the ground
#[derive(Debug)]
pub struct DiveImpactEvent {
    pub entity: Entity,
    pub position: Vec3,
}

impl Message for DiveImpactEvent {}

/// Emitted when the out-of-bounds safety net resets the character
#[derive(Debug)]
pub struct CharacterResetEvent {
    pub entity: Entity,
}

impl Message for CharacterResetEvent {}
