//! Platformer domain: controller events republished as bevy messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::controller::ControllerEvent;

/// One controller event, tagged with the entity that produced it.
/// Written in the order the controller emitted them.
#[derive(Debug, Clone, Copy)]
pub struct PlatformerEvent {
    pub entity: Entity,
    pub event: ControllerEvent,
}

impl Message for PlatformerEvent {}

/// Request to cancel an entity's running jump (respawn, death...).
#[derive(Debug, Clone, Copy)]
pub struct ResetPlatformer {
    pub entity: Entity,
}

impl Message for ResetPlatformer {}
