//! Controller domain: tuning read by a controller instance.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::curve::JumpCurve;
use super::probe::ObstacleMask;

/// Gravity acceleration on the Y axis, before `gravity_scale`.
pub const DEFAULT_GRAVITY: f32 = -9.81;

/// Upward bias applied to the landing sweep origin (see `JumpState`).
pub const DEFAULT_GROUND_PROBE_OFFSET: f32 = 1.0;

/// Read-only settings of a `PlatformerController`.
///
/// Values are taken as-is: range validation is up to whoever loads them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Maximum horizontal speed, in units per second.
    pub speed: f32,
    pub gravity: f32,
    /// Multiplier applied to `gravity` while falling.
    pub gravity_scale: f32,
    pub jump_curve: JumpCurve,
    /// If true, the jump curve is read until the button is released (after
    /// `min_jump_duration`) or the curve completes. If false, a press always
    /// runs the full curve.
    pub hold_input_mode: bool,
    pub min_jump_duration: f32,
    pub movement_obstacles: ObstacleMask,
    pub jump_obstacles: ObstacleMask,
    pub ground_probe_offset: f32,
    /// Overrides the bounding box. `None` uses the attached collider, or a
    /// unit box when there is none.
    pub half_extents: Option<[f32; 3]>,
    pub freeze_controller: bool,
    pub freeze_movement: bool,
    pub freeze_jump: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            gravity: DEFAULT_GRAVITY,
            gravity_scale: 1.0,
            jump_curve: JumpCurve::default(),
            hold_input_mode: true,
            min_jump_duration: 0.2,
            movement_obstacles: ObstacleMask::ALL,
            jump_obstacles: ObstacleMask::ALL,
            ground_probe_offset: DEFAULT_GROUND_PROBE_OFFSET,
            half_extents: None,
            freeze_controller: false,
            freeze_movement: false,
            freeze_jump: false,
        }
    }
}

impl ControllerConfig {
    pub fn half_extents(&self) -> Option<Vec3> {
        self.half_extents.map(Vec3::from_array)
    }
}
