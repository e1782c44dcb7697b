//! Sprites domain: presentation helpers driven by movement state.

pub mod flip;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use flip::*;

use crate::movement::MovementSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_sprite_flip.after(MovementSet::Input));
    }
}
