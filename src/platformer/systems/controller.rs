//! Platformer domain: per-frame controller updates.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::controller::{ControllerEvent, Extents};
use crate::platformer::probe::{SpatialProbe, collider_half_extents};
use crate::platformer::{Platformer, PlatformerEvent, PlatformerInput, ResetPlatformer};

pub(crate) fn drive_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &mut Transform,
        &mut Platformer,
        &PlatformerInput,
        Option<&Collider>,
        Option<&mut Sprite>,
    )>,
    mut messages: MessageWriter<PlatformerEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut platformer, input, collider, sprite) in &mut query {
        let controller = &mut platformer.0;

        // Config override first, then the attached collider, then a unit box.
        if controller.config().half_extents.is_none() {
            controller.set_extents(Extents::resolve(collider.and_then(collider_half_extents)));
        }

        let probe = SpatialProbe::new(&spatial_query, entity);
        let mut position = transform.translation;
        let events = controller.update(&mut position, &input.0, dt, &probe);
        transform.translation = position;

        if let Some(mut sprite) = sprite {
            let flip = controller.orientation().x < 0.0;
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
        }

        write_events(entity, events, &mut messages);
    }
}

pub(crate) fn apply_resets(
    mut requests: MessageReader<ResetPlatformer>,
    mut query: Query<&mut Platformer>,
    mut messages: MessageWriter<PlatformerEvent>,
) {
    for request in requests.read() {
        let Ok(mut platformer) = query.get_mut(request.entity) else {
            warn!("Reset requested for {:?}, which has no controller", request.entity);
            continue;
        };
        let events = platformer.0.reset();
        write_events(request.entity, events, &mut messages);
    }
}

fn write_events(
    entity: Entity,
    events: Vec<ControllerEvent>,
    messages: &mut MessageWriter<PlatformerEvent>,
) {
    for event in events {
        messages.write(PlatformerEvent { entity, event });
    }
}
