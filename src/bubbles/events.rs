//! Bubbles domain: pool events for presentation and external triggers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::bubbles::components::PopCause;

/// Emitted for every new bubble.
#[derive(Debug)]
pub struct BubbleSpawnedEvent {
    pub bubble: Entity,
    pub position: Vec3,
}

impl Message for BubbleSpawnedEvent {}

/// External request to pop a bubble (a weapon hit, a debug command).
/// Counts as a direct hit and runs the chain scan.
#[derive(Debug)]
pub struct PopBubbleEvent {
    pub bubble: Entity,
}

impl Message for PopBubbleEvent {}

/// Emitted after a bubble has been destroyed.
#[derive(Debug)]
pub struct BubblePoppedEvent {
    pub bubble: Entity,
    pub position: Vec3,
    pub cause: PopCause,
}

impl Message for BubblePoppedEvent {}

/// Emitted when the character bounces off a solid bubble.
#[derive(Debug)]
pub struct TrampolineEvent {
    pub bubble: Entity,
    pub character: Entity,
}

impl Message for TrampolineEvent {}

#[derive(Debug)]
pub struct CaptureEvent {
    pub bubble: Entity,
    pub captured: Entity,
}

impl Message for CaptureEvent {}

#[derive(Debug)]
pub struct ReleaseEvent {
    pub bubble: Entity,
    pub released: Entity,
}

impl Message for ReleaseEvent {}
