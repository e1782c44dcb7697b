//! Movement domain: demo room and character spawners.
//!
//! World units are meters; the camera zooms in so a 1x2 character is
//! readable on screen.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::ai::RandomInputDriver;
use crate::movement::{
    GameLayer, Ground, MovementGizmos, MovementProfiles, PlatformerMovement, Player,
};
use crate::sprites::SpriteFlip;

const CHARACTER_SIZE: Vec2 = Vec2::new(1.0, 2.0);
const CHARACTER_MASS: f32 = 1.0;
/// avian2d's default `Gravity` magnitude
const GRAVITY: f32 = 9.81;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / 32.0,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
}

fn spawn_ground(commands: &mut Commands, position: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Character]),
    ));
}

pub fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_ground(
        &mut commands,
        Vec2::new(0.0, -6.0),
        Vec2::new(36.0, 1.0),
        ground_color,
    );

    // Side walls so characters stay in view
    spawn_ground(
        &mut commands,
        Vec2::new(-18.5, 2.0),
        Vec2::new(1.0, 17.0),
        ground_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(18.5, 2.0),
        Vec2::new(1.0, 17.0),
        ground_color,
    );

    // Platforms
    spawn_ground(
        &mut commands,
        Vec2::new(-8.0, -2.0),
        Vec2::new(5.0, 0.5),
        platform_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(8.0, 0.5),
        Vec2::new(5.0, 0.5),
        platform_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(0.0, 3.5),
        Vec2::new(4.0, 0.5),
        platform_color,
    );
}

/// Physics bundle shared by every movement-driven character.
fn character_body() -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::rectangle(CHARACTER_SIZE.x, CHARACTER_SIZE.y),
        Mass(CHARACTER_MASS),
        LockedAxes::ROTATION_LOCKED,
        Friction::new(0.0),
        CollisionLayers::new(GameLayer::Character, [GameLayer::Ground]),
    )
}

pub fn spawn_characters(mut commands: Commands, profiles: Res<MovementProfiles>) {
    commands.spawn((
        Name::new("Player"),
        Player,
        PlatformerMovement::default(),
        profiles.player.clone(),
        SpriteFlip::default(),
        MovementGizmos {
            walking: true,
            jumping: true,
        },
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(CHARACTER_SIZE),
            ..default()
        },
        Transform::from_xyz(-4.0, -3.0, 1.0),
        character_body(),
    ));

    commands.spawn((
        Name::new("Bot"),
        PlatformerMovement::default(),
        profiles.bot.clone(),
        RandomInputDriver::new(profiles.bot_driver.clone()),
        SpriteFlip::default(),
        MovementGizmos::default(),
        Sprite {
            color: Color::srgb(0.9, 0.5, 0.4),
            custom_size: Some(CHARACTER_SIZE),
            ..default()
        },
        Transform::from_xyz(4.0, -3.0, 1.0),
        character_body(),
    ));

    info!(
        "Spawned player and bot: player_jump_height={:.2}, bot_jump_height={:.2}",
        profiles.player.jump_height(GRAVITY, CHARACTER_MASS),
        profiles.bot.jump_height(GRAVITY, CHARACTER_MASS)
    );
}
