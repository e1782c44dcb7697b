//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
#[cfg(feature = "dev-tools")]
pub(crate) mod gizmos;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
#[cfg(feature = "dev-tools")]
pub(crate) use gizmos::draw_movement_gizmos;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_movement_forces, update_jump_state};
