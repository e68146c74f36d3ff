//! Content domain: startup tuning data loaded from RON.

mod data;
mod loader;

pub use data::TuningFile;
pub use loader::{ContentLoadError, load_tuning_file};

use bevy::prelude::*;

use crate::content::loader::load_tuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so every domain's Startup systems see the final values.
        app.add_systems(PreStartup, load_tuning);
    }
}
