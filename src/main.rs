use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_movement::PlatformerPlugin;
use platformer_movement::content::ContentLoaded;
use platformer_movement::movement::dev;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Movement".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(PlatformerPlugin)
        .add_systems(
            Startup,
            (
                dev::spawn_camera,
                dev::spawn_test_room,
                dev::spawn_characters.after(ContentLoaded),
            ),
        )
        .run();
}
