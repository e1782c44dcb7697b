//! Movement domain: platformer locomotion with jump assists and fall shaping.

use bevy::prelude::*;

mod body;
mod components;
mod controller;
pub mod dev;
mod resources;
mod systems;


pub use body::{MovementBody, RigidBodyDriver};
pub use components::*;
pub use controller::{
    HORIZONTAL_INPUT_EPSILON, HorizontalDrive, HorizontalMode, TickReport, VerticalShaping,
    horizontal_drive, vertical_shaping,
};
pub use resources::{MovementProfiles, MovementTuning};

/// Ordering for the per-frame movement pipeline.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Keyboard and bot drivers write input
    Input,
    /// Ground overlap sampling
    Sense,
    /// Jump trigger and buffer decay
    Tick,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (MovementSet::Input, MovementSet::Sense, MovementSet::Tick).chain(),
        )
        .add_systems(
            Update,
            (
                systems::read_input.in_set(MovementSet::Input),
                systems::detect_ground.in_set(MovementSet::Sense),
                systems::update_jump_state.in_set(MovementSet::Tick),
            ),
        )
        .add_systems(FixedUpdate, systems::apply_movement_forces);

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            systems::draw_movement_gizmos.after(MovementSet::Tick),
        );
    }
}
