//! Sprites domain: tests for direction-driven flipping.

use bevy::prelude::*;

use super::{SpriteFlip, update_sprite_flip};
use crate::movement::PlatformerMovement;

#[test]
fn test_observe_flips_only_on_sign_change() {
    let mut flip = SpriteFlip::default();

    assert!(!flip.observe(1.0));
    assert!(flip.observe(-0.3));
    assert!(flip.is_flipped());
    assert!(!flip.observe(-1.0));
    assert!(flip.observe(0.8));
    assert!(!flip.is_flipped());
}

#[test]
fn test_zero_direction_keeps_facing() {
    let mut flip = SpriteFlip::default();
    flip.observe(-1.0);

    assert!(!flip.observe(0.0));
    assert!(flip.is_flipped());
}

#[test]
fn test_flip_system_negates_scale() {
    let mut app = App::new();
    app.add_systems(Update, update_sprite_flip);

    let mut movement = PlatformerMovement::default();
    movement.set_walk_input(Vec2::new(-1.0, 0.0));
    let entity = app
        .world_mut()
        .spawn((movement, SpriteFlip::default(), Transform::from_scale(Vec3::splat(2.0))))
        .id();

    app.update();
    assert_eq!(app.world().get::<Transform>(entity).unwrap().scale.x, -2.0);

    // Holding the same direction leaves the scale alone
    app.update();
    assert_eq!(app.world().get::<Transform>(entity).unwrap().scale.x, -2.0);

    app.world_mut()
        .get_mut::<PlatformerMovement>(entity)
        .unwrap()
        .set_walk_input(Vec2::new(1.0, 0.0));
    app.update();
    assert_eq!(app.world().get::<Transform>(entity).unwrap().scale.x, 2.0);
}
