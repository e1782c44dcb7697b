//! Movement domain: keyboard input sampling for the player character.

use bevy::prelude::*;

use crate::movement::{MovementTuning, PlatformerMovement, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut PlatformerMovement, &MovementTuning), With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);

    for (mut movement, tuning) in &mut query {
        movement.set_walk_input(Vec2::new(x, 0.0));

        // A tap can be pressed and released within one frame: arm first, then
        // settle on the held level.
        if jump_just_pressed {
            movement.press_jump(tuning);
        }
        if !jump_held {
            movement.release_jump();
        }
    }
}
