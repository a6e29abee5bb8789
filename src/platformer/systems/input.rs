//! Platformer domain: keyboard sampling for the player.

use bevy::prelude::*;

use crate::controller::ControllerInput;
use crate::platformer::{Player, PlatformerInput};

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut PlatformerInput, With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let snapshot = ControllerInput {
        horizontal_axis: x,
        jump_held: keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK),
        jump_pressed: keyboard.just_pressed(KeyCode::Space)
            || keyboard.just_pressed(KeyCode::KeyK),
    };

    for mut input in &mut query {
        input.0 = snapshot;
    }
}
