//! Gravity domain: the reorientable gravity field.

use bevy::prelude::*;
use serde::Deserialize;

/// Remaining distance below which a directional transition snaps to its target.
pub(crate) const TRANSITION_EPSILON: f32 = 0.01;

/// Magnitude below which a gravity vector is considered degenerate and the
/// previously valid up/down directions are retained.
pub(crate) const DIRECTION_EPSILON: f32 = 1e-4;

/// How the gravity vector is produced each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GravityMode {
    /// Constant vector, possibly still interpolating toward a new target.
    Directional,
    /// Recomputed toward `center` every tick from the subject's position.
    /// Deliberately unsmoothed: the attractor has to track a moving subject
    /// continuously.
    PointAttraction { center: Vec3, magnitude: f32 },
    /// Zero vector.
    Disabled,
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GravityTuning {
    /// Field strength used by redirect zones and the initial field (m/s²).
    pub magnitude: f32,
    /// Fraction of the remaining distance covered per tick while a
    /// directional transition is in flight. Clamped to [0.01, 0.2].
    pub transition_rate: f32,
}

impl Default for GravityTuning {
    fn default() -> Self {
        Self {
            magnitude: 20.0,
            transition_rate: 0.08,
        }
    }
}

/// The single process-wide gravity state.
///
/// Everything physical in the game derives "up" and "down" from here instead
/// of a hard-coded world axis.
#[derive(Resource, Debug, Clone)]
pub struct GravityField {
    current: Vec3,
    target: Vec3,
    mode: GravityMode,
    transition_rate: f32,
    transitioning: bool,
    /// Last valid normalized gravity direction. Never zero, never NaN.
    last_down: Dir3,
}

impl Default for GravityField {
    fn default() -> Self {
        let tuning = GravityTuning::default();
        Self::new(Vec3::NEG_Y * tuning.magnitude, tuning.transition_rate)
    }
}

impl GravityField {
    pub fn new(initial: Vec3, transition_rate: f32) -> Self {
        let last_down = Dir3::new(initial).unwrap_or(Dir3::NEG_Y);
        Self {
            current: initial,
            target: initial,
            mode: GravityMode::Directional,
            transition_rate: transition_rate.clamp(0.01, 0.2),
            transitioning: false,
            last_down,
        }
    }

    /// Retarget gravity along a constant vector.
    ///
    /// With `instant` the current vector snaps and any in-flight transition
    /// is cancelled; otherwise the field eases toward the target at
    /// `transition_rate` per tick.
    pub fn set_directional(&mut self, vector: Vec3, instant: bool) {
        self.mode = GravityMode::Directional;
        self.retarget(vector, instant);
    }

    /// Switch to point attraction toward `center`, scaled by `magnitude`.
    pub fn set_point_attraction(&mut self, center: Vec3, magnitude: f32) {
        self.mode = GravityMode::PointAttraction { center, magnitude };
        self.transitioning = false;
    }

    /// Turn gravity off. Idempotent.
    pub fn set_disabled(&mut self, instant: bool) {
        self.mode = GravityMode::Disabled;
        self.retarget(Vec3::ZERO, instant);
    }

    fn retarget(&mut self, vector: Vec3, instant: bool) {
        self.target = vector;
        if instant {
            self.current = vector;
            self.transitioning = false;
        } else {
            self.transitioning = self.current.distance(self.target) > TRANSITION_EPSILON;
        }
        self.remember_direction();
    }

    pub fn set_transition_rate(&mut self, rate: f32) {
        self.transition_rate = rate.clamp(0.01, 0.2);
    }

    /// Advance the field one tick. `subject` is the position the
    /// point-attraction mode measures against (the character).
    pub fn step(&mut self, subject: Vec3) {
        match self.mode {
            GravityMode::PointAttraction { center, magnitude } => {
                // No smoothing here: recomputed outright every tick.
                let toward = center - subject;
                if toward.length_squared() > DIRECTION_EPSILON * DIRECTION_EPSILON {
                    self.current = toward.normalize() * magnitude;
                }
            }
            GravityMode::Directional | GravityMode::Disabled => {
                if self.transitioning {
                    self.current = self.current.lerp(self.target, self.transition_rate);
                    if self.current.distance(self.target) < TRANSITION_EPSILON {
                        self.current = self.target;
                        self.transitioning = false;
                    }
                }
            }
        }
        self.remember_direction();
    }

    fn remember_direction(&mut self) {
        if let Ok(dir) = Dir3::new(self.current) {
            self.last_down = dir;
        }
    }

    /// Unit direction opposite gravity. Falls back to the last valid
    /// direction while the vector is near zero.
    pub fn up(&self) -> Dir3 {
        -self.last_down
    }

    /// Unit direction along gravity.
    pub fn down(&self) -> Dir3 {
        self.last_down
    }

    pub fn current(&self) -> Vec3 {
        self.current
    }

    pub fn magnitude(&self) -> f32 {
        self.current.length()
    }

    pub fn mode(&self) -> GravityMode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }
}
