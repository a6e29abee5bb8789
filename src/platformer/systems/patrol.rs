//! Platformer domain: patrol path updates.

use bevy::prelude::*;

use crate::platformer::Patrol;

pub(crate) fn drive_patrollers(time: Res<Time>, mut query: Query<(&mut Transform, &mut Patrol)>) {
    let dt = time.delta_secs();

    for (mut transform, mut patrol) in &mut query {
        transform.translation = patrol.patroller.step(dt);
    }
}
