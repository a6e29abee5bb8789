//! Controller domain: per-tick input snapshot.

/// What the driver of a controller wants to do this tick.
///
/// The controller never polls a device; whoever owns the entity fills this
/// in (keyboard sampling for players, scripts for AI).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerInput {
    /// Horizontal axis in `[-1, 1]`.
    pub horizontal_axis: f32,
    /// Jump button is down.
    pub jump_held: bool,
    /// Jump button went down this tick.
    pub jump_pressed: bool,
}

impl ControllerInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn axis(horizontal_axis: f32) -> Self {
        Self {
            horizontal_axis,
            ..Self::default()
        }
    }

    /// Builder: jump pressed this tick (and therefore held).
    pub fn with_jump_pressed(mut self) -> Self {
        self.jump_pressed = true;
        self.jump_held = true;
        self
    }

    pub fn with_jump_held(mut self, held: bool) -> Self {
        self.jump_held = held;
        self
    }
}
