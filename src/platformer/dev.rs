//! Platformer domain: debug-only cast gizmos and event logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controller::ControllerEvent;
use crate::platformer::{Patrol, Platformer, PlatformerEvent};

/// Draws the last horizontal (blue) and vertical (magenta) obstacle sweeps
/// of every controller, and the path covered by every patroller (red).
pub(crate) fn draw_cast_gizmos(
    mut gizmos: Gizmos,
    controllers: Query<(&Transform, &Platformer)>,
    patrols: Query<&Patrol>,
) {
    for (transform, platformer) in &controllers {
        let controller = &platformer.0;
        let position = transform.translation.truncate();
        let size = controller.extents().size().truncate();

        let movement_cast = controller.orientation().truncate()
            * controller.movement().last_cast_distance();
        gizmos.rect_2d(
            Isometry2d::from_translation(position + movement_cast),
            size,
            Color::srgb(0.2, 0.4, 1.0),
        );

        let jump_cast = Vec2::Y * controller.jump().last_cast_distance();
        gizmos.rect_2d(
            Isometry2d::from_translation(position + jump_cast),
            size,
            Color::srgb(1.0, 0.2, 1.0),
        );
    }

    for patrol in &patrols {
        let (center, size) = patrol.patroller.path_bounds(patrol.size);
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            size,
            Color::srgb(1.0, 0.2, 0.2),
        );
    }
}

pub(crate) fn log_controller_events(mut events: MessageReader<PlatformerEvent>) {
    for PlatformerEvent { entity, event } in events.read() {
        match event {
            ControllerEvent::BeginJump(info) => {
                debug!(
                    "{:?} jumped from {:?} (axis {})",
                    entity, info.jump_origin, info.movement
                );
            }
            ControllerEvent::Land(info) => {
                debug!(
                    "{:?} landed at {:?} after {:.2}s",
                    entity, info.landing_position, info.falling_time
                );
            }
            ControllerEvent::ChangeOrientation(orientation) => {
                debug!("{:?} now facing {:?}", entity, orientation);
            }
            _ => {}
        }
    }
}
