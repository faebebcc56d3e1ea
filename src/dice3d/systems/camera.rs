//! Camera sizing systems
//!
//! The orthographic view always spans the window at a fixed number of pixels
//! per world unit, and the dice box is stretched to fill the view.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::dice3d::types::*;

/// Recompute the view and box scale whenever the window is resized
pub fn fit_view_to_window(
    mut resized: MessageReader<WindowResized>,
    config: Res<DemoConfig>,
    mut view_frame: ResMut<ViewFrame>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
    mut box_query: Query<&mut Transform, With<DiceBox>>,
) {
    // Only the latest size matters.
    let Some(event) = resized.read().last() else {
        return;
    };

    if let Some(frame) = apply_window_size(
        event.width,
        event.height,
        &config,
        &mut camera_query,
        &mut box_query,
    ) {
        *view_frame = frame;
    }
}

/// Size the view once from the primary window's initial resolution
pub fn size_view_to_primary_window(
    window_query: Query<&Window, With<PrimaryWindow>>,
    config: Res<DemoConfig>,
    mut view_frame: ResMut<ViewFrame>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
    mut box_query: Query<&mut Transform, With<DiceBox>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    if let Some(frame) = apply_window_size(
        window.resolution.width(),
        window.resolution.height(),
        &config,
        &mut camera_query,
        &mut box_query,
    ) {
        *view_frame = frame;
    }
}

fn apply_window_size(
    width: f32,
    height: f32,
    config: &DemoConfig,
    camera_query: &mut Query<&mut Projection, With<MainCamera>>,
    box_query: &mut Query<&mut Transform, With<DiceBox>>,
) -> Option<ViewFrame> {
    // Minimized windows report zero; keep the last usable frame.
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let frame = ortho_frame(width, height, config.ortho_divisor());

    for mut projection in camera_query.iter_mut() {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scaling_mode = ScalingMode::Fixed {
                width: frame.width(),
                height: frame.height(),
            };
            ortho.viewport_origin = Vec2::new(0.5, 0.5);
        }
    }

    for mut transform in box_query.iter_mut() {
        transform.scale = frame.box_scale;
    }

    Some(frame)
}
