//! Platformer character controller for Bevy + avian2d: acceleration curves,
//! jump buffering, coyote time, variable jump height and fall shaping.

use bevy::prelude::*;

pub mod ai;
pub mod content;
pub mod movement;
pub mod sprites;

pub mod prelude {
    pub use crate::PlatformerPlugin;
    pub use crate::ai::{RandomInputConfig, RandomInputDriver};
    pub use crate::movement::{
        GameLayer, MovementBody, MovementGizmos, MovementProfiles, MovementTuning,
        PlatformerMovement, Player,
    };
    pub use crate::sprites::SpriteFlip;
}

/// Everything needed to drive characters: profile loading, movement, bot
/// input and sprite flipping. Physics plugins are left to the host.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            content::ContentPlugin,
            movement::MovementPlugin,
            ai::AiPlugin,
            sprites::SpritesPlugin,
        ));
    }
}
