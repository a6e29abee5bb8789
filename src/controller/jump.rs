//! Controller domain: vertical state machine (grounded, jumping, falling).

use bevy::prelude::*;

use super::curve::JumpCurve;
use super::events::{ControllerEvent, JumpInfo, JumpUpdateInfo, LandingInfo};
use super::input::ControllerInput;
use super::probe::{CollisionProbe, Extents, ObstacleMask};

/// Everything a jump step reads besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct JumpContext<'a> {
    pub curve: &'a JumpCurve,
    pub gravity: f32,
    pub gravity_scale: f32,
    pub hold_input_mode: bool,
    pub min_jump_duration: f32,
    pub obstacles: ObstacleMask,
    pub ground_probe_offset: f32,
    pub extents: Extents,
    /// Horizontal movement axis resolved earlier in the tick.
    pub movement_axis: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Released,
    Obstacle,
    Completed,
    Reset,
}

/// Vertical state of a controller.
///
/// Only "jumping" and "grounded" are stored; falling is whatever is neither.
/// Starting a jump leaves the ground, so both flags are never set together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JumpState {
    jumping: bool,
    grounded: bool,
    jump_time: f32,
    jump_origin: Vec3,
    y_velocity: f32,
    falling_time: f32,
    last_cast_distance: f32,
}

impl JumpState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_falling(&self) -> bool {
        !self.jumping && !self.grounded
    }

    /// Time elapsed on the jump curve. Only meaningful while jumping.
    pub fn jump_time(&self) -> f32 {
        self.jump_time
    }

    pub fn jump_origin(&self) -> Vec3 {
        self.jump_origin
    }

    pub fn y_velocity(&self) -> f32 {
        self.y_velocity
    }

    pub fn falling_time(&self) -> f32 {
        self.falling_time
    }

    /// Signed length of the last vertical sweep (negative when probing down),
    /// kept for debug drawing.
    pub fn last_cast_distance(&self) -> f32 {
        self.last_cast_distance
    }

    /// Elapsed jump time over the curve duration, in `[0, 1]`.
    /// Reads as 1 whenever no jump is running.
    pub fn jump_ratio(&self, curve: &JumpCurve) -> f32 {
        let duration = curve.duration();
        if !self.jumping || duration <= 0.0 {
            return 1.0;
        }
        (self.jump_time / duration).clamp(0.0, 1.0)
    }

    /// Resolves one tick of vertical motion.
    pub fn step<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        input: &ControllerInput,
        delta: f32,
        ctx: &JumpContext<'_>,
        probe: &P,
        events: &mut Vec<ControllerEvent>,
    ) {
        if self.jumping {
            self.step_jumping(position, input, delta, ctx, probe, events);
        } else {
            self.step_airborne_or_grounded(position, input, delta, ctx, probe, events);
        }
    }

    /// Cancels the running jump, if any. Returns true if a jump was stopped.
    pub fn cancel(&mut self, curve: &JumpCurve, events: &mut Vec<ControllerEvent>) -> bool {
        self.stop(curve, StopReason::Reset, events)
    }

    fn step_jumping<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        input: &ControllerInput,
        delta: f32,
        ctx: &JumpContext<'_>,
        probe: &P,
        events: &mut Vec<ControllerEvent>,
    ) {
        let curve = ctx.curve;

        if ctx.hold_input_mode && !input.jump_held {
            let min_duration = ctx.min_jump_duration.min(curve.duration());
            if self.jump_time >= min_duration {
                self.stop(curve, StopReason::Released, events);
                return;
            }
        }

        let last_jump_time = self.jump_time;
        self.jump_time += delta;

        let last_height = curve.evaluate(last_jump_time);
        let target_height = curve.evaluate(self.jump_time);
        let cast_distance = target_height - last_height;
        self.last_cast_distance = cast_distance;

        if let Some(hit) = probe.sweep(
            *position,
            ctx.extents.half(),
            Vec3::Y,
            cast_distance,
            ctx.obstacles,
        ) {
            // Ride up to the obstacle, never through it.
            position.y = self.jump_origin.y + last_height + hit.distance;
            self.stop(curve, StopReason::Obstacle, events);
        } else if self.jump_time >= curve.duration() {
            position.y = self.jump_origin.y + curve.evaluate(curve.duration());
            self.stop(curve, StopReason::Completed, events);
        } else {
            position.y = self.jump_origin.y + target_height;
            events.push(ControllerEvent::UpdateJump(JumpUpdateInfo {
                jump_origin: self.jump_origin,
                jump_time: self.jump_time,
                jump_ratio: self.jump_ratio(curve),
            }));
        }
    }

    fn step_airborne_or_grounded<P: CollisionProbe + ?Sized>(
        &mut self,
        position: &mut Vec3,
        input: &ControllerInput,
        delta: f32,
        ctx: &JumpContext<'_>,
        probe: &P,
        events: &mut Vec<ControllerEvent>,
    ) {
        let offset = ctx.ground_probe_offset;
        let extents = ctx.extents.half();
        let cast_distance = self.y_velocity.abs() * delta + offset;
        self.last_cast_distance = -(cast_distance - offset);

        // The cast starts above the character: resting exactly on a surface,
        // rounding could otherwise put the origin inside the floor and miss it.
        let origin = *position + Vec3::Y * offset;

        match probe.sweep(origin, extents, Vec3::NEG_Y, cast_distance, ctx.obstacles) {
            Some(hit) => {
                if !self.grounded {
                    position.y = hit.point.y + extents.y;
                    self.y_velocity = 0.0;
                    self.grounded = true;
                    events.push(ControllerEvent::Land(LandingInfo {
                        falling_time: self.falling_time,
                        landing_position: *position,
                    }));
                    debug!(
                        "Landed at {:?} after falling {:.3}s",
                        *position, self.falling_time
                    );
                    self.falling_time = 0.0;
                }
            }
            None => {
                position.y += self.y_velocity * delta;

                if self.grounded {
                    self.grounded = false;
                    self.falling_time = 0.0;
                    debug!("Left ground at {:?}", *position);
                } else {
                    self.falling_time += delta;
                }

                events.push(ControllerEvent::Fall {
                    falling_time: self.falling_time,
                });

                self.y_velocity += ctx.gravity * ctx.gravity_scale * delta;
            }
        }

        if self.grounded && input.jump_pressed {
            self.grounded = false;
            self.jumping = true;
            self.jump_time = 0.0;
            self.jump_origin = *position;
            events.push(ControllerEvent::BeginJump(JumpInfo {
                jump_origin: self.jump_origin,
                movement: ctx.movement_axis,
            }));
            debug!(
                "Jump from {:?}, movement axis {}",
                self.jump_origin, ctx.movement_axis
            );
        }
    }

    /// Shared exit of every jump: final progress snapshot, then `StopJump`.
    fn stop(
        &mut self,
        curve: &JumpCurve,
        reason: StopReason,
        events: &mut Vec<ControllerEvent>,
    ) -> bool {
        if !self.jumping {
            return false;
        }
        self.jumping = false;
        self.y_velocity = 0.0;
        events.push(ControllerEvent::UpdateJump(JumpUpdateInfo {
            jump_origin: self.jump_origin,
            jump_time: self.jump_time,
            jump_ratio: self.jump_ratio(curve),
        }));
        events.push(ControllerEvent::StopJump);
        debug!("Jump stopped ({:?}) after {:.3}s", reason, self.jump_time);
        true
    }
}
