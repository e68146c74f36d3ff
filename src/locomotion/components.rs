//! Locomotion domain: components and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Standable surfaces (floors, platforms, solid bubbles)
    Ground,
    /// The player character
    Character,
    /// Buoyant projectiles
    Bubble,
    /// Entities a bubble can capture and carry
    Capturable,
    /// Gravity trigger volumes - never block movement
    Zone,
}

#[derive(Component, Debug)]
pub struct Player;

/// The locomotion state machine. Exactly one state at a time; transitions
/// are a total function of (grounded, input, velocity), evaluated once per
/// tick in `advance_states`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterState {
    #[default]
    Idle,
    Running,
    Drifting,
    Jumping,
    Gliding,
    Falling,
    DiveAttack,
}

impl CharacterState {
    pub fn is_airborne(&self) -> bool {
        matches!(
            self,
            CharacterState::Jumping
                | CharacterState::Gliding
                | CharacterState::Falling
                | CharacterState::DiveAttack
        )
    }
}

/// Per-character bookkeeping the state machine reads and writes each tick.
#[derive(Component, Debug)]
pub struct CharacterMotor {
    /// Only trusted while `post_jump_timer <= 0`.
    pub grounded: bool,
    /// Suppresses ground detection briefly after a jump impulse so the body
    /// can separate from the surface.
    pub post_jump_timer: f32,
    /// Time remaining in the Drifting state.
    pub drift_timer: f32,
    pub previous_velocity: Vec3,
    /// Unit horizontal movement direction of the previous tick; zero until
    /// the character has moved.
    pub previous_move_direction: Vec3,
}

impl Default for CharacterMotor {
    fn default() -> Self {
        Self {
            grounded: false,
            post_jump_timer: 0.0,
            drift_timer: 0.0,
            previous_velocity: Vec3::ZERO,
            previous_move_direction: Vec3::ZERO,
        }
    }
}

/// Where the character returns on an out-of-bounds reset.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec3);
