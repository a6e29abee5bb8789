//! Controller domain: events emitted while resolving a tick.

use bevy::prelude::*;

/// Snapshot of a horizontal movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementInfo {
    pub speed: f32,
    pub last_position: Vec3,
    pub current_position: Vec3,
}

/// Emitted when a jump begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpInfo {
    pub jump_origin: Vec3,
    /// Horizontal movement axis at take-off (-1..1, 0 when idle).
    pub movement: f32,
}

/// Progress of the jump currently running (or the one that just ended).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpUpdateInfo {
    pub jump_origin: Vec3,
    pub jump_time: f32,
    pub jump_ratio: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingInfo {
    /// How long the character was falling before touching the ground.
    pub falling_time: f32,
    pub landing_position: Vec3,
}

/// Everything a collaborator can observe from the controller.
///
/// Within a tick, movement events always come before jump events, and every
/// `StopJump` is immediately preceded by a final `UpdateJump`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    BeginMove(MovementInfo),
    UpdateMove(MovementInfo),
    StopMove,
    ChangeOrientation(Vec3),
    BeginJump(JumpInfo),
    UpdateJump(JumpUpdateInfo),
    StopJump,
    Land(LandingInfo),
    Fall { falling_time: f32 },
}

impl ControllerEvent {
    /// Short name of the event kind, for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BeginMove(_) => "BeginMove",
            Self::UpdateMove(_) => "UpdateMove",
            Self::StopMove => "StopMove",
            Self::ChangeOrientation(_) => "ChangeOrientation",
            Self::BeginJump(_) => "BeginJump",
            Self::UpdateJump(_) => "UpdateJump",
            Self::StopJump => "StopJump",
            Self::Land(_) => "Land",
            Self::Fall { .. } => "Fall",
        }
    }
}
