//! Dice bodies
//!
//! This module spawns a loaded die as a dynamic rigid body and draws the
//! random motion it starts with.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::types::*;

/// Random spin, plus an impulse when the variant uses one
pub fn throw_motion(config: &DemoConfig, rng: &mut ThrowRng) -> (Velocity, ExternalImpulse) {
    let angvel = config.spin().sample_vec3(&mut rng.0);
    let impulse = config
        .impulse()
        .map(|range| range.sample_vec3(&mut rng.0))
        .unwrap_or(Vec3::ZERO);

    (
        Velocity {
            linvel: Vec3::ZERO,
            angvel,
        },
        ExternalImpulse {
            impulse,
            torque_impulse: Vec3::ZERO,
        },
    )
}

/// One rendered primitive of a die, placed in the die's model space
#[derive(Debug, Clone)]
pub struct DieVisual {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
}

/// Spawn a single die entity with physics.
///
/// The body carries the collider; each primitive is a child mesh so it keeps
/// its own material.
pub fn spawn_die(
    commands: &mut Commands,
    collider: Collider,
    visuals: &[DieVisual],
    die_type: DiceType,
    position: Vec3,
    config: &DemoConfig,
    rng: &mut ThrowRng,
) -> Entity {
    let (velocity, impulse) = throw_motion(config, rng);
    let body = config.die_body;

    debug!(
        "Spawning {} ({} faces, {} primitives) at {:?} with angvel {:?} and impulse {:?}",
        die_type.name(),
        die_type.face_count(),
        visuals.len(),
        position,
        velocity.angvel,
        impulse.impulse
    );

    commands
        .spawn((
            Name::new(format!("Die {}", die_type.name())),
            Transform::from_translation(position).with_scale(Vec3::splat(config.die_scale())),
            Visibility::default(),
            RigidBody::Dynamic,
            collider,
            ColliderMassProperties::Mass(body.mass),
            Restitution::coefficient(body.restitution),
            Friction::coefficient(body.friction),
            // Fast spins against thin walls would otherwise tunnel.
            Ccd::enabled(),
            velocity,
            impulse,
            Die {
                die_type,
                spawn_point: position,
            },
        ))
        .with_children(|parent| {
            for visual in visuals {
                parent.spawn((
                    Mesh3d(visual.mesh.clone()),
                    MeshMaterial3d(visual.material.clone()),
                    visual.transform,
                ));
            }
        })
        .id()
}
