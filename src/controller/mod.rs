//! Controller domain: the platformer movement and jump controller.
//!
//! A [`PlatformerController`] turns a per-tick [`ControllerInput`] into
//! position changes, resolving collisions through a [`CollisionProbe`]. Each
//! tick runs horizontal movement first, then the vertical jump/fall state
//! machine, and returns the events both produced, in order.

mod config;
mod curve;
mod events;
mod input;
mod jump;
mod movement;
mod probe;


pub use config::{ControllerConfig, DEFAULT_GRAVITY, DEFAULT_GROUND_PROBE_OFFSET};
pub use curve::{JumpCurve, Keyframe};
pub use events::{ControllerEvent, JumpInfo, JumpUpdateInfo, LandingInfo, MovementInfo};
pub use input::ControllerInput;
pub use jump::{JumpContext, JumpState};
pub use movement::{MoveSettings, MovementAxis};
pub use probe::{CollisionProbe, Extents, NoObstacles, ObstacleMask, SweepHit};

use bevy::prelude::*;

/// Character controller for a side-scrolling platformer: X axis movement and
/// curve-driven jumps.
#[derive(Debug, Clone)]
pub struct PlatformerController {
    config: ControllerConfig,
    extents: Extents,
    movement: MovementAxis,
    jump: JumpState,
}

impl Default for PlatformerController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl PlatformerController {
    /// Creates a controller. The bounding box comes from the config override,
    /// or is the unit box until [`Self::set_extents`] provides a collider's.
    pub fn new(config: ControllerConfig) -> Self {
        let extents = Extents::resolve(config.half_extents());
        Self {
            config,
            extents,
            movement: MovementAxis::new(),
            jump: JumpState::new(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn curve(&self) -> &JumpCurve {
        &self.config.jump_curve
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    pub fn set_extents(&mut self, extents: Extents) {
        self.extents = extents;
    }

    pub fn movement(&self) -> &MovementAxis {
        &self.movement
    }

    pub fn jump(&self) -> &JumpState {
        &self.jump
    }

    // ------------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------------

    /// Runs one tick: movement, then jump. Frozen parts are skipped and keep
    /// their state untouched, so a frozen jump resumes where it paused.
    pub fn update<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        input: &ControllerInput,
        delta: f32,
        probe: &P,
    ) -> Vec<ControllerEvent> {
        let mut events = Vec::new();

        if !self.config.freeze_movement && !self.config.freeze_controller {
            let direction = Vec3::X * input.horizontal_axis;
            self.step_movement(position, direction, delta, probe, &mut events);
        }

        if !self.config.freeze_jump && !self.config.freeze_controller {
            let ctx = JumpContext {
                curve: &self.config.jump_curve,
                gravity: self.config.gravity,
                gravity_scale: self.config.gravity_scale,
                hold_input_mode: self.config.hold_input_mode,
                min_jump_duration: self.config.min_jump_duration,
                obstacles: self.config.jump_obstacles,
                ground_probe_offset: self.config.ground_probe_offset,
                extents: self.extents,
                movement_axis: self.movement.last_axis(),
            };
            self.jump.step(position, input, delta, &ctx, probe, &mut events);
        }

        events
    }

    /// Moves along an arbitrary direction, bypassing the input snapshot.
    /// Returns true if a movement was resolved (even if blocked).
    pub fn move_in_direction<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        direction: Vec3,
        delta: f32,
        probe: &P,
        events: &mut Vec<ControllerEvent>,
    ) -> bool {
        self.step_movement(position, direction, delta, probe, events)
    }

    fn step_movement<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        direction: Vec3,
        delta: f32,
        probe: &P,
        events: &mut Vec<ControllerEvent>,
    ) -> bool {
        let settings = MoveSettings {
            speed: self.config.speed,
            extents: self.extents,
            obstacles: self.config.movement_obstacles,
        };
        self.movement
            .step(position, direction, delta, settings, probe, events)
    }

    /// Forcibly cancels a running jump (respawn, death...).
    pub fn reset(&mut self) -> Vec<ControllerEvent> {
        let mut events = Vec::new();
        if self.jump.cancel(&self.config.jump_curve, &mut events) {
            debug!("Controller reset: jump cancelled");
        }
        events
    }

    // ------------------------------------------------------------------------
    // State queries
    // ------------------------------------------------------------------------

    pub fn is_moving(&self) -> bool {
        self.movement.is_moving()
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping()
    }

    pub fn is_on_floor(&self) -> bool {
        self.jump.is_grounded()
    }

    pub fn is_falling(&self) -> bool {
        self.jump.is_falling()
    }

    pub fn jump_ratio(&self) -> f32 {
        self.jump.jump_ratio(&self.config.jump_curve)
    }

    pub fn orientation(&self) -> Vec3 {
        self.movement.orientation()
    }

    // ------------------------------------------------------------------------
    // Freeze flags
    // ------------------------------------------------------------------------

    pub fn freeze_controller(&self) -> bool {
        self.config.freeze_controller
    }

    /// Disables both movement and jump.
    pub fn set_freeze_controller(&mut self, frozen: bool) {
        self.config.freeze_controller = frozen;
    }

    pub fn freeze_movement(&self) -> bool {
        self.config.freeze_movement
    }

    pub fn set_freeze_movement(&mut self, frozen: bool) {
        self.config.freeze_movement = frozen;
    }

    pub fn freeze_jump(&self) -> bool {
        self.config.freeze_jump
    }

    pub fn set_freeze_jump(&mut self, frozen: bool) {
        self.config.freeze_jump = frozen;
    }
}
