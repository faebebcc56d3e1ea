//! Dice-related types and components
//!
//! This module contains all types related to dice: DiceType, the Die and
//! DiceBox components, the pending asset handles and the demo phase.

use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Component attached to each die entity
#[derive(Component, Debug, Clone)]
pub struct Die {
    pub die_type: DiceType,
    /// Where the die was first placed; re-throws start from here.
    pub spawn_point: Vec3,
}

/// Marker component for the invisible floor/wall box
#[derive(Component)]
pub struct DiceBox;

/// All supported dice types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiceType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DiceType {
    pub const ALL: [DiceType; 6] = [
        DiceType::D4,
        DiceType::D6,
        DiceType::D8,
        DiceType::D10,
        DiceType::D12,
        DiceType::D20,
    ];

    /// Number of faces, which is also the highest roll.
    pub fn face_count(&self) -> u32 {
        match self {
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DiceType::D4 => "D4",
            DiceType::D6 => "D6",
            DiceType::D8 => "D8",
            DiceType::D10 => "D10",
            DiceType::D12 => "D12",
            DiceType::D20 => "D20",
        }
    }

    /// File name of the die's model inside the asset root.
    pub fn asset_file(&self) -> String {
        format!("{}.glb", self.name())
    }

    /// Material used when the glTF primitive carries none.
    pub fn color(&self) -> Color {
        match self {
            DiceType::D4 => Color::srgb(0.3, 0.4, 0.9),
            DiceType::D6 => Color::srgb(0.1, 0.1, 0.1),
            DiceType::D8 => Color::srgb(0.6, 0.2, 0.8),
            DiceType::D10 => Color::srgb(0.95, 0.95, 0.95),
            DiceType::D12 => Color::srgb(0.95, 0.5, 0.1),
            DiceType::D20 => Color::srgb(0.95, 0.85, 0.2),
        }
    }
}

/// A die model that has been requested from the asset server
#[derive(Debug, Clone)]
pub struct PendingDie {
    pub die_type: DiceType,
    pub path: String,
    pub handle: Handle<Gltf>,
}

/// Resource holding every die model requested at startup
#[derive(Resource, Default, Debug, Clone)]
pub struct DiceAssets {
    pub pending: Vec<PendingDie>,
}

/// Lifecycle of the demo: dice are attached once their models have loaded.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoPhase {
    #[default]
    Loading,
    Running,
    Failed,
}
