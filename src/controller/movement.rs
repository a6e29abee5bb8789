//! Controller domain: horizontal movement with obstacle sweeping and facing.

use bevy::prelude::*;

use super::events::{ControllerEvent, MovementInfo};
use super::probe::{CollisionProbe, Extents, ObstacleMask};

/// Per-call settings of a movement step.
#[derive(Debug, Clone, Copy)]
pub struct MoveSettings {
    pub speed: f32,
    pub extents: Extents,
    pub obstacles: ObstacleMask,
}

/// Resolves directional input into position changes and tracks orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementAxis {
    /// Forward vector of the entity; obstacle sweeps are cast along it.
    facing: Vec3,
    /// Last orientation reported through `ChangeOrientation`.
    last_orientation: Vec3,
    /// X component of the last applied direction (0 when idle).
    last_axis: f32,
    moving: bool,
    last_cast_distance: f32,
}

impl Default for MovementAxis {
    fn default() -> Self {
        Self {
            facing: Vec3::X,
            last_orientation: Vec3::ZERO,
            last_axis: 0.0,
            moving: false,
            last_cast_distance: 0.0,
        }
    }
}

impl MovementAxis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Horizontal axis of the last movement, 0 when idle.
    pub fn last_axis(&self) -> f32 {
        self.last_axis
    }

    /// Current forward vector of the entity.
    pub fn orientation(&self) -> Vec3 {
        self.facing
    }

    /// Length of the last obstacle sweep, kept for debug drawing.
    pub fn last_cast_distance(&self) -> f32 {
        self.last_cast_distance
    }

    /// Moves `position` along `direction` (clamped to a length of 1).
    ///
    /// Returns true if a movement was resolved, even when an obstacle kept the
    /// position unchanged. A zero direction resolves nothing and only closes
    /// the current movement, if any.
    pub fn step<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        direction: Vec3,
        delta: f32,
        settings: MoveSettings,
        probe: &P,
        events: &mut Vec<ControllerEvent>,
    ) -> bool {
        // Slower than full speed is fine, faster is not.
        let direction = direction.clamp_length_max(1.0);

        if direction == Vec3::ZERO {
            if self.moving {
                self.moving = false;
                self.last_axis = 0.0;
                events.push(ControllerEvent::StopMove);
            }
            return false;
        }

        let last_position = *position;
        let mut target_position = last_position;

        if !self.moving {
            events.push(ControllerEvent::BeginMove(MovementInfo {
                speed: settings.speed,
                last_position,
                current_position: target_position,
            }));
        }

        // Only the X magnitude drives the sweep: the movement axis is horizontal.
        let cast_distance = settings.speed * direction.x.abs() * delta;
        self.last_cast_distance = cast_distance;
        let blocked = probe
            .sweep(
                last_position,
                settings.extents.half(),
                self.facing,
                cast_distance,
                settings.obstacles,
            )
            .is_some();
        if !blocked {
            target_position = last_position + direction * settings.speed * delta;
        }

        *position = target_position;
        self.face(direction, events);
        events.push(ControllerEvent::UpdateMove(MovementInfo {
            speed: settings.speed,
            last_position,
            current_position: target_position,
        }));

        self.moving = true;
        self.last_axis = direction.x;
        true
    }

    fn face(&mut self, direction: Vec3, events: &mut Vec<ControllerEvent>) {
        let orientation = direction.normalize_or_zero();
        if orientation == self.last_orientation {
            return;
        }
        self.facing = orientation;
        self.last_orientation = orientation;
        events.push(ControllerEvent::ChangeOrientation(orientation));
    }
}
