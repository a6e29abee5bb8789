//! Platformer domain: system modules for controlled entities.

pub(crate) mod controller;
pub(crate) mod input;
pub(crate) mod patrol;

pub(crate) use controller::{apply_resets, drive_controllers};
pub(crate) use input::read_player_input;
pub(crate) use patrol::drive_patrollers;
