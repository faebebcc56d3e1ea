//! Type definitions for the dice drop demo
//!
//! This module is organized into submodules:
//! - `dice` - Dice types, components, pending assets and the demo phase
//! - `camera` - Camera marker and the window-derived orthographic frame
//! - `settings` - Demo settings and settings file loading
//! - `throw` - Random spin/impulse ranges and the shared random source

pub mod camera;
pub mod dice;
pub mod settings;
pub mod throw;

// Re-export all public types for convenient access
pub use camera::*;
pub use dice::*;
pub use settings::*;
pub use throw::*;
