//! Character-control building blocks for 2D side-scrolling platformers.
//!
//! - [`controller`]: the movement/jump controller and its collision probe
//!   contract.
//! - [`world`]: a headless box world implementing the probe.
//! - [`patrol`]: back-and-forth movers.
//! - [`content`]: RON tuning files.
//! - [`platformer`]: bevy + avian2d integration.

pub mod content;
pub mod controller;
pub mod patrol;
pub mod platformer;
pub mod world;

pub mod prelude {
    pub use crate::content::{ContentPlugin, PlatformerContent};
    pub use crate::controller::{
        CollisionProbe, ControllerConfig, ControllerEvent, ControllerInput, Extents, JumpCurve,
        Keyframe, ObstacleMask, PlatformerController, SweepHit,
    };
    pub use crate::patrol::{PatrolDirection, Patroller};
    pub use crate::platformer::{
        DemoLevelPlugin, GameLayer, Platformer, PlatformerEvent, PlatformerInput,
        PlatformerPlugin, Player, ResetPlatformer,
    };
    pub use crate::world::{Obstacle, StaticWorld};
}
