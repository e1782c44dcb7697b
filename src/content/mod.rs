//! Content domain: data-driven movement profiles loaded from RON.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

pub use loader::{ConfigLoadError, load_profiles, parse_profiles};
pub use validation::{ValidationError, validate_profiles};

use crate::movement::MovementProfiles;

/// Where the profiles file is read from at startup.
#[derive(Resource, Debug, Clone)]
pub struct ProfilesPath(pub PathBuf);

impl Default for ProfilesPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data/movement.ron"))
    }
}

/// System set for content loading, so spawners can run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoaded;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProfilesPath>()
            .init_resource::<MovementProfiles>()
            .add_systems(Startup, load_movement_profiles.in_set(ContentLoaded));
    }
}

/// Resolve profiles from disk, falling back to defaults on any failure.
pub fn resolve_profiles(path: &Path) -> MovementProfiles {
    let profiles = match load_profiles(path) {
        Ok(profiles) => profiles,
        Err(e) => {
            warn!("{}; using default movement profiles", e);
            return MovementProfiles::default();
        }
    };

    let errors = validate_profiles(&profiles);
    if errors.is_empty() {
        info!("Movement profiles loaded from {}", path.display());
        return profiles;
    }

    for e in &errors {
        error!("Invalid movement profile: {}", e);
    }
    error!(
        "{} invalid value(s) in {}; using default movement profiles",
        errors.len(),
        path.display()
    );
    MovementProfiles::default()
}

fn load_movement_profiles(mut commands: Commands, path: Res<ProfilesPath>) {
    commands.insert_resource(resolve_profiles(&path.0));
}
