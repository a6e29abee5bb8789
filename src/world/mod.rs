//! World domain: headless collision world made of axis-aligned boxes.
//!
//! `StaticWorld` answers the controller's sweeps without a physics engine,
//! which makes it suitable for simulations, tools and tests. Sweeps run in
//! the XY plane; Z is carried through untouched.

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::controller::{CollisionProbe, ObstacleMask, SweepHit};

/// Directions shorter than this on an axis are treated as parallel to it.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A solid box on one or more layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub layers: ObstacleMask,
}

impl Obstacle {
    pub fn new(center: Vec2, size: Vec2, layers: ObstacleMask) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
            layers,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Top face height, handy for placing characters on it.
    pub fn top(&self) -> f32 {
        self.max().y
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    obstacles: Vec<Obstacle>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }
}

impl CollisionProbe for StaticWorld {
    fn cast_box(
        &self,
        origin: Vec3,
        extents: Vec3,
        direction: Vec3,
        distance: f32,
        mask: ObstacleMask,
    ) -> Option<SweepHit> {
        let origin2 = origin.truncate();
        let direction2 = direction.truncate();

        self.obstacles
            .iter()
            .filter(|obstacle| obstacle.layers.intersects(mask))
            .filter_map(|obstacle| {
                sweep_against(origin2, extents.truncate(), direction2, distance, obstacle)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, point)| SweepHit::new(t, point.extend(origin.z)))
    }
}

/// Slab test of a box moving from `origin` against `obstacle` grown by the
/// moving box's extents. Boxes overlapping at the origin are ignored.
fn sweep_against(
    origin: Vec2,
    extents: Vec2,
    direction: Vec2,
    distance: f32,
    obstacle: &Obstacle,
) -> Option<(f32, Vec2)> {
    let min = obstacle.min() - extents;
    let max = obstacle.max() + extents;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut entry_axis = 0;

    for axis in 0..2 {
        let (o, d) = (origin[axis], direction[axis]);
        if d.abs() < PARALLEL_EPSILON {
            // Moving parallel: only a strict overlap on this axis can collide.
            if o <= min[axis] || o >= max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if near > t_near {
            t_near = near;
            entry_axis = axis;
        }
        t_far = t_far.min(far);
    }

    if t_near >= t_far || t_near < 0.0 || t_near > distance {
        return None;
    }

    let center = origin + direction * t_near;
    let mut point = center.clamp(obstacle.min(), obstacle.max());
    point[entry_axis] = if direction[entry_axis] > 0.0 {
        obstacle.min()[entry_axis]
    } else {
        obstacle.max()[entry_axis]
    };
    Some((t_near, point))
}
