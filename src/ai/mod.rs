//! AI domain: bot input drivers.

use bevy::prelude::*;

mod random_input;


pub use random_input::{DelayRange, JumpPhase, RandomInputConfig, RandomInputDriver};

use crate::movement::MovementSet;

pub struct AiPlugin;

impl Plugin for AiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            random_input::drive_random_input.in_set(MovementSet::Input),
        );
    }
}
