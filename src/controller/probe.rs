//! Controller domain: swept box queries against the physical world.
//!
//! The controller never talks to a physics engine directly. Everything it
//! needs from the world goes through [`CollisionProbe`], which the owning
//! application supplies (see `world::StaticWorld` for a headless one and
//! `platformer::SpatialProbe` for the avian2d one).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of a sweep that touched something.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweepHit {
    /// Distance travelled along the cast direction before the first contact.
    pub distance: f32,
    /// Contact point on the surface that was hit, in world space.
    pub point: Vec3,
}

impl SweepHit {
    pub fn new(distance: f32, point: Vec3) -> Self {
        Self { distance, point }
    }
}

/// Bit mask selecting which obstacle layers a sweep collides with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ObstacleMask(pub u32);

impl ObstacleMask {
    pub const ALL: Self = Self(!0);
    pub const NONE: Self = Self(0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two masks share at least one layer.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ObstacleMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u32> for ObstacleMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Half-size of the controller's bounding box along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents(Vec3);

impl Extents {
    /// Half extents of a unit box, used when no collider is available.
    pub const UNIT: Self = Self(Vec3::splat(0.5));

    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self(half_extents)
    }

    pub fn from_size(size: Vec3) -> Self {
        Self(size * 0.5)
    }

    /// Uses the given half extents if any, otherwise the unit box.
    pub fn resolve(half_extents: Option<Vec3>) -> Self {
        half_extents.map_or(Self::UNIT, Self::from_half_extents)
    }

    pub fn half(self) -> Vec3 {
        self.0
    }

    pub fn size(self) -> Vec3 {
        self.0 * 2.0
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A world that can sweep an axis-aligned box and report the first contact.
pub trait CollisionProbe {
    /// Raw query. Implementors can assume `direction` is normalized,
    /// `distance` is strictly positive and `mask` is not empty.
    fn cast_box(
        &self,
        origin: Vec3,
        extents: Vec3,
        direction: Vec3,
        distance: f32,
        mask: ObstacleMask,
    ) -> Option<SweepHit>;

    /// Sweeps a box of `extents` from `origin` along `direction`.
    ///
    /// Degenerate sweeps (no distance, no direction, nothing to collide with)
    /// report no hit without querying the world.
    fn sweep(
        &self,
        origin: Vec3,
        extents: Vec3,
        direction: Vec3,
        distance: f32,
        mask: ObstacleMask,
    ) -> Option<SweepHit> {
        if distance <= 0.0 || !distance.is_finite() || mask.is_empty() {
            return None;
        }
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }
        self.cast_box(origin, extents, direction, distance, mask)
    }
}

impl<P: CollisionProbe + ?Sized> CollisionProbe for &P {
    fn cast_box(
        &self,
        origin: Vec3,
        extents: Vec3,
        direction: Vec3,
        distance: f32,
        mask: ObstacleMask,
    ) -> Option<SweepHit> {
        (**self).cast_box(origin, extents, direction, distance, mask)
    }
}

/// A probe for an empty world: nothing is ever hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstacles;

impl CollisionProbe for NoObstacles {
    fn cast_box(&self, _: Vec3, _: Vec3, _: Vec3, _: f32, _: ObstacleMask) -> Option<SweepHit> {
        None
    }
}
