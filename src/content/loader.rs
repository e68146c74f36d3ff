//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the tuning file from disk.
pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Read `assets/data/tuning.ron` and overwrite the domain tuning resources.
///
/// A missing or malformed file is not fatal: the compiled-in defaults stay in
/// place and the failure is logged.
pub(crate) fn load_tuning(mut commands: Commands) {
    let path = Path::new("assets/data/tuning.ron");

    match load_tuning_file(path) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", path.display());
            commands.insert_resource(tuning.gravity);
            commands.insert_resource(tuning.locomotion);
            commands.insert_resource(tuning.bubbles);
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
        }
    }
}
