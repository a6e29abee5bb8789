//! Patrol domain: back-and-forth movers for hazards and simple enemies.


use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum PatrolDirection {
    Left,
    #[default]
    Right,
}

impl PatrolDirection {
    pub fn forward(self) -> Vec3 {
        match self {
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
        }
    }
}

/// Walks `distance` units away from its origin, then back, forever.
#[derive(Debug, Clone, PartialEq)]
pub struct Patroller {
    pub speed: f32,
    pub direction: PatrolDirection,
    pub distance: f32,
    origin: Vec3,
    current_distance: f32,
    outbound: bool,
}

impl Patroller {
    pub fn new(origin: Vec3, speed: f32, direction: PatrolDirection, distance: f32) -> Self {
        Self {
            speed,
            direction,
            distance,
            origin,
            current_distance: 0.0,
            outbound: true,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Distance covered from the origin, in `[0, distance]`.
    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    pub fn is_outbound(&self) -> bool {
        self.outbound
    }

    pub fn position(&self) -> Vec3 {
        self.origin + self.direction.forward() * self.current_distance
    }

    /// Advances along the path and returns the new position.
    pub fn step(&mut self, delta: f32) -> Vec3 {
        let movement = self.speed * delta;
        self.current_distance = if self.outbound {
            (self.current_distance + movement).min(self.distance)
        } else {
            (self.current_distance - movement).max(0.0)
        };

        let reached_end = if self.outbound {
            self.current_distance >= self.distance
        } else {
            self.current_distance <= 0.0
        };
        if reached_end {
            self.outbound = !self.outbound;
        }

        self.position()
    }

    /// Center and size of the area swept by a body of `size` along the path.
    pub fn path_bounds(&self, size: Vec2) -> (Vec2, Vec2) {
        let forward = self.direction.forward().truncate();
        let bounds = Vec2::new(size.x + self.distance, size.y);
        let center = self.origin.truncate() - forward * (size.x * 0.5) + forward * (bounds.x * 0.5);
        (center, bounds)
    }
}
