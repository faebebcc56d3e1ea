//! Demo settings types and loading
//!
//! Every literal the scene is built from lives here, with defaults for both
//! demo variants. A settings file may override any of them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::dice::DiceType;
use super::throw::SpinRange;

/// Which set of die models the demo drops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DemoVariant {
    /// One pre-baked die from `scene.gltf`
    #[default]
    Single,
    /// Six dice, one `.glb` per die type
    Set,
}

impl DemoVariant {
    /// Window pixels per world unit on each side of the view center.
    pub fn default_ortho_divisor(self) -> f32 {
        match self {
            Self::Single => 125.0,
            Self::Set => 100.0,
        }
    }

    pub fn default_spin(self) -> SpinRange {
        match self {
            Self::Single => SpinRange::new(10.0, 30.0),
            Self::Set => SpinRange::new(25.0, 50.0),
        }
    }

    pub fn default_impulse(self) -> Option<SpinRange> {
        match self {
            Self::Single => None,
            Self::Set => Some(SpinRange::new(25.0, 50.0)),
        }
    }

    pub fn default_die_scale(self) -> f32 {
        match self {
            Self::Single => 30.0,
            Self::Set => 1.0,
        }
    }

    /// Model files to load, relative to the asset root.
    pub fn die_assets(self) -> Vec<(DiceType, String)> {
        match self {
            Self::Single => vec![(DiceType::D20, "scene.gltf".to_string())],
            Self::Set => DiceType::ALL
                .iter()
                .map(|die_type| (*die_type, die_type.asset_file()))
                .collect(),
        }
    }
}

/// Physical material of a die body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodySetting {
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl Default for BodySetting {
    fn default() -> Self {
        Self {
            mass: 1.0,
            friction: 0.75,
            restitution: 0.3,
        }
    }
}

/// Dimensions of the invisible box before window scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsSetting {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub wall_thickness: f32,
    pub friction: f32,
}

impl Default for BoundsSetting {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 5.0,
            depth: 1.0,
            wall_thickness: 0.5,
            friction: 0.75,
        }
    }
}

/// Demo configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub variant: DemoVariant,
    pub asset_root: String,
    pub camera_height: f32,
    pub gravity: [f32; 3],
    pub bounds: BoundsSetting,
    pub die_body: BodySetting,
    /// Index of the die mesh inside `scene.gltf`
    pub scene_mesh_index: usize,
    pub die_spacing: f32,
    pub die_scale: Option<f32>,
    pub ortho_divisor: Option<f32>,
    pub spin: Option<SpinRange>,
    pub impulse: Option<SpinRange>,
    /// Linear RGBA; fully transparent lets the page behind the canvas show through.
    pub clear_color: [f32; 4],
    pub seed: Option<u64>,
    pub debug_colliders: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            variant: DemoVariant::default(),
            asset_root: "assets".to_string(),
            camera_height: 20.0,
            gravity: [0.0, -9.8, 0.0],
            bounds: BoundsSetting::default(),
            die_body: BodySetting::default(),
            scene_mesh_index: 0,
            die_spacing: 2.0,
            die_scale: None,
            ortho_divisor: None,
            spin: None,
            impulse: None,
            clear_color: [0.0, 0.0, 0.0, 0.0],
            seed: None,
            debug_colliders: false,
        }
    }
}

impl DemoConfig {
    pub fn for_variant(variant: DemoVariant) -> Self {
        Self {
            variant,
            ..default()
        }
    }

    pub fn ortho_divisor(&self) -> f32 {
        self.ortho_divisor
            .filter(|k| *k > 0.0)
            .unwrap_or_else(|| self.variant.default_ortho_divisor())
    }

    pub fn spin(&self) -> SpinRange {
        self.spin.unwrap_or_else(|| self.variant.default_spin())
    }

    pub fn impulse(&self) -> Option<SpinRange> {
        self.impulse.or_else(|| self.variant.default_impulse())
    }

    pub fn die_scale(&self) -> f32 {
        self.die_scale
            .unwrap_or_else(|| self.variant.default_die_scale())
    }

    pub fn gravity(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    pub fn clear_color(&self) -> Color {
        let [r, g, b, a] = self.clear_color;
        Color::linear_rgba(r, g, b, a)
    }

    /// Load settings from a `.ron` or `.json` file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("json") => {
                serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Settings loading errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported settings format: {0} (expected .ron or .json)")]
    UnsupportedFormat(String),
}
