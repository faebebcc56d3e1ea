//! Input handling systems
//!
//! Space throws the dice again from where they started; F3 toggles the
//! collider debug overlay.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_rapier3d::render::DebugRenderContext;

use crate::dice3d::types::*;

use super::dice::throw_motion;

/// Handle keyboard input for re-throwing dice
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<DemoConfig>,
    mut rng: ResMut<ThrowRng>,
    mut dice_query: Query<(&Die, &mut Transform, &mut Velocity, &mut ExternalImpulse)>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    for (die, mut transform, mut velocity, mut impulse) in dice_query.iter_mut() {
        let (new_velocity, new_impulse) = throw_motion(&config, &mut rng);
        transform.translation = die.spawn_point;
        *velocity = new_velocity;
        *impulse = new_impulse;
    }
    info!("Dice re-thrown");
}

/// Toggle the Rapier collider overlay
pub fn toggle_collider_debug(
    keyboard: Res<ButtonInput<KeyCode>>,
    debug_context: Option<ResMut<DebugRenderContext>>,
) {
    let Some(mut debug_context) = debug_context else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F3) {
        debug_context.enabled = !debug_context.enabled;
        info!("Collider debug rendering: {}", debug_context.enabled);
    }
}
