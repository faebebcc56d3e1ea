//! Physics world configuration

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::types::DemoConfig;

/// Keep every Rapier context's gravity at the configured vector
pub fn apply_gravity(config: Res<DemoConfig>, mut rapier_query: Query<&mut RapierConfiguration>) {
    let gravity = config.gravity();
    for mut rapier in rapier_query.iter_mut() {
        if rapier.gravity != gravity {
            info!("Physics gravity set to {:?}", gravity);
            rapier.gravity = gravity;
        }
    }
}
