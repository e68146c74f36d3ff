//! Gravity domain: events emitted when the field is retargeted.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::gravity::GravityMode;

/// Emitted whenever a trigger (zone or debug hotkey) retargets the field.
/// Presentation listens to this for screen effects; the simulation does not.
#[derive(Debug)]
pub struct GravityShiftEvent {
    pub mode: GravityMode,
    pub instant: bool,
}

impl Message for GravityShiftEvent {}

/// Marker payload identifying which entity crossed a gravity zone.
#[derive(Debug)]
pub struct GravityZoneEnteredEvent {
    pub zone: Entity,
    pub subject: Entity,
}

impl Message for GravityZoneEnteredEvent {}
