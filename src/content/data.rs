//! Content domain: serde definitions for the tuning file.

use serde::Deserialize;

use crate::bubbles::BubbleTuning;
use crate::gravity::GravityTuning;
use crate::locomotion::LocomotionTuning;

/// Top-level layout of `assets/data/tuning.ron`.
///
/// Every section is optional; missing sections fall back to the compiled-in
/// defaults so a partial file can override just one domain.
#[derive(Debug, Default, Deserialize)]
pub struct TuningFile {
    #[serde(default)]
    pub gravity: GravityTuning,
    #[serde(default)]
    pub locomotion: LocomotionTuning,
    #[serde(default)]
    pub bubbles: BubbleTuning,
}
