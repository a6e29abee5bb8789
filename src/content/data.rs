//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::controller::ControllerConfig;
use crate::patrol::{PatrolDirection, Patroller};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Patrollers (patrollers.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatrolDef {
    pub id: String,
    /// Start of the path, in world units.
    pub position: (f32, f32),
    pub speed: f32,
    #[serde(default)]
    pub direction: PatrolDirection,
    pub distance: f32,
    /// Size of the patrolling body.
    pub size: (f32, f32),
}

impl PatrolDef {
    pub fn origin(&self) -> Vec3 {
        Vec3::new(self.position.0, self.position.1, 0.0)
    }

    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }

    pub fn to_patroller(&self) -> Patroller {
        Patroller::new(self.origin(), self.speed, self.direction, self.distance)
    }
}

// ============================================================================
// Loaded content, as a resource
// ============================================================================

/// Everything read from assets/data at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlatformerContent {
    pub controller: ControllerConfig,
    pub patrollers: Vec<PatrolDef>,
}

impl PlatformerContent {
    /// Returns a summary of loaded content for logging.
    pub fn summary(&self) -> String {
        format!(
            "PlatformerContent loaded:\n\
             - Controller: speed={}, curve keys={}, hold_input_mode={}\n\
             - Patrollers: {}",
            self.controller.speed,
            self.controller.jump_curve.keys().len(),
            self.controller.hold_input_mode,
            self.patrollers.len()
        )
    }
}
