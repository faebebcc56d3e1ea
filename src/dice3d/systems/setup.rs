//! Scene setup system
//!
//! This module initializes the 3D scene: clear color, orthographic camera,
//! light and the invisible box the dice are dropped into.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::meshes::inverted_box_collider;
use crate::dice3d::types::*;

/// Main setup system - initializes camera, light and the dice box
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    config: Res<DemoConfig>,
) {
    commands.insert_resource(ClearColor(config.clear_color()));

    // Camera straight above the origin; screen right is +X, screen up is -Z.
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: 2.0,
                height: 2.0,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, config.camera_height, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
        MainCamera,
    ));

    // Light from above
    commands.spawn((
        Name::new("Light"),
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
    ));

    spawn_dice_box(&mut commands, &mut meshes, &config);
}

/// Spawn the invisible static box; its scale is set by the resize systems.
pub fn spawn_dice_box(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    config: &DemoConfig,
) -> Entity {
    let bounds = config.bounds;

    commands
        .spawn((
            Name::new("DiceBox"),
            Mesh3d(meshes.add(Cuboid::new(bounds.width, bounds.height, bounds.depth))),
            Visibility::Hidden,
            Transform::IDENTITY,
            RigidBody::Fixed,
            inverted_box_collider(
                bounds.width,
                bounds.height,
                bounds.depth,
                bounds.wall_thickness,
            ),
            Friction::coefficient(bounds.friction),
            DiceBox,
        ))
        .id()
}

/// Calculate the spawn position for a die based on its index
pub fn calculate_dice_position(index: usize, total: usize, spacing: f32) -> Vec3 {
    let cols = ((total as f32).sqrt().ceil() as usize).max(1);
    let rows = total.div_ceil(cols).max(1);
    let row = index / cols;
    let col = index % cols;

    let start_x = -((cols - 1) as f32 * spacing) / 2.0;
    let start_z = -((rows - 1) as f32 * spacing) / 2.0;

    Vec3::new(
        start_x + col as f32 * spacing,
        0.0,
        start_z + row as f32 * spacing,
    )
}
