//! Sprites domain: mirror a character when its walk direction changes sign.

use bevy::prelude::*;

use crate::movement::PlatformerMovement;

/// Negates `Transform::scale.x` whenever the owning character's input
/// direction changes sign. Zero input keeps the current facing.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SpriteFlip {
    flipped: bool,
}

impl SpriteFlip {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Record a new horizontal direction. Returns true when the scale should
    /// be negated.
    pub fn observe(&mut self, direction_x: f32) -> bool {
        if direction_x == 0.0 {
            return false;
        }

        let was_flipped = self.flipped;
        self.flipped = direction_x < 0.0;
        was_flipped != self.flipped
    }
}

pub fn update_sprite_flip(
    mut query: Query<(&PlatformerMovement, &mut SpriteFlip, &mut Transform)>,
) {
    for (movement, mut flip, mut transform) in &mut query {
        if flip.observe(movement.direction().x) {
            transform.scale.x *= -1.0;
        }
    }
}
