//! Platformer domain: components and physics layers for controlled entities.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{ControllerInput, PlatformerController};
use crate::patrol::Patroller;

/// Physics layers for collision filtering.
/// Obstacle masks in controller tuning use the same bits (1 << variant index).
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemies and hazards
    Enemy,
}

/// Marker for the entity driven by keyboard input.
#[derive(Component, Debug)]
pub struct Player;

/// A platformer controller attached to an entity; its `Transform` is the
/// controlled position.
#[derive(Component, Debug, Clone, Default)]
pub struct Platformer(pub PlatformerController);

/// Input snapshot consumed by the entity's controller on the next update.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlatformerInput(pub ControllerInput);

/// Back-and-forth mover.
#[derive(Component, Debug, Clone)]
pub struct Patrol {
    pub patroller: Patroller,
    /// Body size, used to draw the path.
    pub size: Vec2,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
