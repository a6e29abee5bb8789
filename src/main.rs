use avian2d::prelude::*;
use bevy::prelude::*;
use platformer_kit::content::ContentPlugin;
use platformer_kit::platformer::{DemoLevelPlugin, PlatformerPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Kit".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            ContentPlugin::default(),
            PlatformerPlugin,
            DemoLevelPlugin,
        ))
        .run();
}
