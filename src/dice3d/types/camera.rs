//! Camera-related types and components
//!
//! This module contains the main camera marker and the orthographic frame
//! derived from the window size.

use bevy::prelude::*;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Current orthographic bounds of the view and the matching box scale.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewFrame {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub box_scale: Vec3,
}

impl ViewFrame {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// Map a window size to orthographic bounds of ±width/k and ±height/k.
///
/// The box spans the whole view: its X scale is the view width and its Z scale
/// the view height (the camera looks straight down the Y axis).
pub fn ortho_frame(width: f32, height: f32, divisor: f32) -> ViewFrame {
    let half_width = width / divisor;
    let half_height = height / divisor;

    ViewFrame {
        left: -half_width,
        right: half_width,
        top: half_height,
        bottom: -half_height,
        box_scale: Vec3::new(half_width * 2.0, 1.0, half_height * 2.0),
    }
}
