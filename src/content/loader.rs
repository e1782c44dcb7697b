//! Loader for the RON movement profiles file.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementProfiles;

/// Error type for profile loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse profiles from RON text. `source` only labels errors.
pub fn parse_profiles(source: &str, contents: &str) -> Result<MovementProfiles, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load profiles from a RON file on disk.
pub fn load_profiles(path: &Path) -> Result<MovementProfiles, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_profiles(&file_name, &contents)
}
