//! Platformer domain: data-driven spawning of the demo level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlatformerContent;
use crate::controller::PlatformerController;
use crate::platformer::{GameLayer, Ground, Patrol, Platformer, PlatformerInput, Player, Wall};

/// World units shown per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);
const PLAYER_SPAWN: Vec3 = Vec3::new(3.0, 0.0, 0.0);

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Spawn the player with the controller tuning from content.
pub(crate) fn spawn_player(
    mut commands: Commands,
    content: Option<Res<PlatformerContent>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = match &content {
        Some(content) => content.controller.clone(),
        None => {
            warn!("PlatformerContent not available, using default controller tuning");
            default()
        }
    };

    info!(
        "Spawning player: speed={}, gravity_scale={}, jump duration={:.2}s, jump height={:.2}",
        config.speed,
        config.gravity_scale,
        config.jump_curve.duration(),
        config.jump_curve.max_value()
    );

    commands.spawn((
        Player,
        Platformer(PlatformerController::new(config)),
        PlatformerInput::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        RigidBody::Kinematic,
        Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Ground, GameLayer::Wall, GameLayer::Enemy],
        ),
    ));
}

pub(crate) fn spawn_patrollers(mut commands: Commands, content: Option<Res<PlatformerContent>>) {
    let Some(content) = content else {
        return;
    };

    for def in &content.patrollers {
        let size = def.body_size();
        commands.spawn((
            Name::new(def.id.clone()),
            Patrol {
                patroller: def.to_patroller(),
                size,
            },
            Sprite {
                color: Color::srgb(0.85, 0.3, 0.3),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(def.origin()),
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
        ));
    }

    info!("Spawned {} patroller(s)", content.patrollers.len());
}

pub(crate) fn spawn_demo_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    // (center, size, color)
    let grounds = [
        (Vec2::new(0.0, -4.5), Vec2::new(20.0, 1.0), ground_color),
        (Vec2::new(-5.0, -1.5), Vec2::new(3.0, 0.4), platform_color),
        (Vec2::new(1.5, 2.0), Vec2::new(3.0, 0.4), platform_color),
        (Vec2::new(6.0, 0.0), Vec2::new(2.5, 0.4), platform_color),
    ];
    for (center, size, color) in grounds {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    let walls = [
        // Left and right bounds
        (Vec2::new(-10.5, 0.0), Vec2::new(1.0, 10.0)),
        (Vec2::new(10.5, 0.0), Vec2::new(1.0, 10.0)),
        // Low ceiling to bump into
        (Vec2::new(-1.5, -1.0), Vec2::new(2.0, 0.4)),
    ];
    for (center, size) in walls {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }
}
