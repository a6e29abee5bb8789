//! World domain: tests for the headless box sweeps.

use bevy::prelude::*;

use super::{Obstacle, StaticWorld};
use crate::controller::{CollisionProbe, ObstacleMask};

const HALF: Vec3 = Vec3::splat(0.5);

fn block(center: (f32, f32), size: (f32, f32)) -> Obstacle {
    Obstacle::new(Vec2::from(center), Vec2::from(size), ObstacleMask::ALL)
}

// -----------------------------------------------------------------------------
// Obstacle tests
// -----------------------------------------------------------------------------

#[test]
fn test_obstacle_bounds() {
    let obstacle = block((1.0, 2.0), (4.0, 2.0));
    assert_eq!(obstacle.half_extents, Vec2::new(2.0, 1.0));
    assert_eq!(obstacle.min(), Vec2::new(-1.0, 1.0));
    assert_eq!(obstacle.max(), Vec2::new(3.0, 3.0));
    assert_eq!(obstacle.top(), 3.0);
}

#[test]
fn test_world_builders() {
    let mut world = StaticWorld::new()
        .with(block((0.0, 0.0), (1.0, 1.0)))
        .with(block((5.0, 0.0), (1.0, 1.0)))
        .with(block((9.0, 0.0), (1.0, 1.0)));
    assert_eq!(world.obstacles().len(), 3);

    world.clear();
    assert!(world.obstacles().is_empty());
}

// -----------------------------------------------------------------------------
// Sweep tests
// -----------------------------------------------------------------------------

#[test]
fn test_downward_sweep_hits_floor_top() {
    let world = StaticWorld::new().with(block((0.0, -0.5), (10.0, 1.0)));

    let hit = world
        .sweep(Vec3::new(1.0, 2.0, 3.0), HALF, Vec3::NEG_Y, 5.0, ObstacleMask::ALL)
        .expect("floor should be hit");

    assert_eq!(hit.distance, 1.5);
    assert_eq!(hit.point, Vec3::new(1.0, 0.0, 3.0));
}

#[test]
fn test_sweep_out_of_range_misses() {
    let world = StaticWorld::new().with(block((0.0, -0.5), (10.0, 1.0)));
    let hit = world.sweep(Vec3::new(0.0, 2.0, 0.0), HALF, Vec3::NEG_Y, 1.0, ObstacleMask::ALL);
    assert!(hit.is_none());
}

#[test]
fn test_horizontal_sweep_hits_wall_face() {
    let world = StaticWorld::new().with(block((3.0, 0.0), (1.0, 4.0)));

    let hit = world
        .sweep(Vec3::ZERO, HALF, Vec3::X, 5.0, ObstacleMask::ALL)
        .expect("wall should be hit");

    assert_eq!(hit.distance, 2.0);
    assert_eq!(hit.point.x, 2.5);
    assert_eq!(hit.point.y, 0.0);
}

#[test]
fn test_sweep_ignores_obstacles_behind() {
    let world = StaticWorld::new().with(block((-3.0, 0.0), (1.0, 4.0)));
    assert!(
        world
            .sweep(Vec3::ZERO, HALF, Vec3::X, 10.0, ObstacleMask::ALL)
            .is_none()
    );
}

#[test]
fn test_sweep_ignores_obstacle_overlapping_origin() {
    // Box center sits 0.1 inside the floor's top.
    let world = StaticWorld::new().with(block((0.0, -0.5), (10.0, 1.0)));
    let hit = world.sweep(Vec3::new(0.0, 0.4, 0.0), HALF, Vec3::NEG_Y, 2.0, ObstacleMask::ALL);
    assert!(hit.is_none());
}

#[test]
fn test_sliding_along_floor_is_not_blocked() {
    // Resting exactly on the floor: touching, not overlapping.
    let world = StaticWorld::new().with(block((0.0, -0.5), (10.0, 1.0)));
    let hit = world.sweep(Vec3::new(0.0, 0.5, 0.0), HALF, Vec3::X, 2.0, ObstacleMask::ALL);
    assert!(hit.is_none());
}

#[test]
fn test_nearest_obstacle_wins() {
    let world = StaticWorld::new()
        .with(block((6.0, 0.0), (1.0, 2.0)))
        .with(block((3.0, 0.0), (1.0, 2.0)))
        .with(block((9.0, 0.0), (1.0, 2.0)));

    let hit = world
        .sweep(Vec3::ZERO, HALF, Vec3::X, 20.0, ObstacleMask::ALL)
        .expect("a wall should be hit");
    assert_eq!(hit.distance, 2.0);
}

#[test]
fn test_sweep_respects_layers() {
    let ground = ObstacleMask(0b010);
    let wall = ObstacleMask(0b100);
    let world = StaticWorld::new()
        .with(Obstacle::new(Vec2::new(2.0, 0.0), Vec2::new(1.0, 2.0), wall))
        .with(Obstacle::new(Vec2::new(5.0, 0.0), Vec2::new(1.0, 2.0), ground));

    let hit = world
        .sweep(Vec3::ZERO, HALF, Vec3::X, 10.0, ground)
        .expect("ground block should be hit");
    assert_eq!(hit.distance, 4.0);

    let hit = world
        .sweep(Vec3::ZERO, HALF, Vec3::X, 10.0, ground.union(wall))
        .expect("wall should be hit first");
    assert_eq!(hit.distance, 1.0);
}

#[test]
fn test_diagonal_sweep_reports_entry_face() {
    let world = StaticWorld::new().with(block((0.0, -0.5), (10.0, 1.0)));
    let direction = Vec3::new(1.0, -1.0, 0.0).normalize();

    let hit = world
        .sweep(Vec3::new(0.0, 2.5, 0.0), HALF, direction, 10.0, ObstacleMask::ALL)
        .expect("floor should be hit");

    assert!((hit.distance - 2.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
    assert_eq!(hit.point.y, 0.0);
    assert!((hit.point.x - 2.0).abs() < 1e-4);
}
