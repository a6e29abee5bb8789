//! Platformer domain: avian2d spatial queries behind the controller's probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{CollisionProbe, ObstacleMask, SweepHit};

/// Sweeps rectangles through avian's spatial query pipeline.
pub struct SpatialProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    /// The casting entity, never reported as its own obstacle.
    exclude: Entity,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, exclude: Entity) -> Self {
        Self {
            spatial_query,
            exclude,
        }
    }
}

impl CollisionProbe for SpatialProbe<'_, '_, '_> {
    fn cast_box(
        &self,
        origin: Vec3,
        extents: Vec3,
        direction: Vec3,
        distance: f32,
        mask: ObstacleMask,
    ) -> Option<SweepHit> {
        let direction = Dir2::new(direction.truncate()).ok()?;
        let shape = Collider::rectangle(extents.x * 2.0, extents.y * 2.0);
        let filter = SpatialQueryFilter::from_mask(LayerMask(mask.bits()))
            .with_excluded_entities([self.exclude]);
        // Shapes already overlapping at the origin are not obstacles.
        let config = ShapeCastConfig {
            max_distance: distance,
            ignore_origin_penetration: true,
            ..default()
        };

        self.spatial_query
            .cast_shape(&shape, origin.truncate(), 0.0, direction, &config, &filter)
            .map(|hit| SweepHit::new(hit.distance, hit.point1.extend(origin.z)))
    }
}

/// Half extents of a rectangle collider, if the collider is one.
pub fn collider_half_extents(collider: &Collider) -> Option<Vec3> {
    collider
        .shape_scaled()
        .as_cuboid()
        .map(|c| Vec3::new(c.half_extents.x, c.half_extents.y, 0.5))
}
