//! Systems module for dice3d
//!
//! This module contains all the Bevy systems for the dice drop demo,
//! organized into submodules by functionality:
//!
//! - `setup`: Scene initialization (camera, light, dice box)
//! - `camera`: Orthographic view and box sizing from the window size
//! - `physics`: Gravity of the physics world
//! - `loading`: Die model requests and attaching dice once loaded
//! - `dice`: Dice bodies and their random initial motion
//! - `input`: Re-throw and collider overlay keys

mod camera;
mod dice;
mod input;
mod loading;
mod physics;
mod setup;

// Re-export all public systems
pub use camera::{fit_view_to_window, size_view_to_primary_window};
pub use dice::{spawn_die, throw_motion, DieVisual};
pub use input::{handle_input, toggle_collider_debug};
pub use loading::{
    assemble_die, request_dice_assets, spawn_dice_when_loaded, AssembledDie, DiePart,
    GltfCollections,
};
pub use physics::apply_gravity;
pub use setup::{calculate_dice_position, setup, spawn_dice_box};
