//! Platformer domain: bevy plugin wiring for controllers and patrollers.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod probe;
mod systems;

pub use components::{GameLayer, Ground, Patrol, Platformer, PlatformerInput, Player, Wall};
pub use events::{PlatformerEvent, ResetPlatformer};
pub use probe::{SpatialProbe, collider_half_extents};

use bevy::prelude::*;

use crate::platformer::bootstrap::{spawn_camera, spawn_demo_room, spawn_patrollers, spawn_player};
use crate::platformer::systems::{
    apply_resets, drive_controllers, drive_patrollers, read_player_input,
};

/// Drives every `Platformer` entity once per frame and republishes its
/// events as [`PlatformerEvent`] messages.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlatformerEvent>()
            .add_message::<ResetPlatformer>()
            .add_systems(
                Update,
                (
                    read_player_input,
                    apply_resets,
                    drive_controllers,
                    drive_patrollers,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            (dev::draw_cast_gizmos, dev::log_controller_events).after(drive_controllers),
        );
    }
}

/// Spawns the demo level: camera, room, player and patrollers from content.
pub struct DemoLevelPlugin;

impl Plugin for DemoLevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_camera, spawn_demo_room, spawn_player, spawn_patrollers),
        );
    }
}
