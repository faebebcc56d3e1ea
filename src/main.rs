// Hide console window on Windows for release builds (GUI app).
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use dicedrop::dice3d::{DemoConfig, DemoVariant, DiceDemoPlugin};

/// Dice drop - die models tumbling in a box that fills the window
#[derive(Parser, Debug)]
#[command(name = "dicedrop", author, version, about, long_about = None)]
struct Cli {
    /// Which dice to drop: one die from scene.gltf, or the D4-D20 set
    #[arg(short, long, value_enum)]
    variant: Option<DemoVariant>,

    /// Settings file (.ron or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the die models are loaded from
    #[arg(short, long)]
    assets: Option<String>,

    /// Seed for the random spin and impulse
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw physics colliders (toggle at runtime with F3)
    #[arg(long)]
    debug_colliders: bool,
}

impl Cli {
    fn into_config(self) -> Result<DemoConfig, dicedrop::dice3d::ConfigError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load_from_file(path)?,
            None => DemoConfig::for_variant(self.variant.unwrap_or_default()),
        };

        // Command line values win over the settings file.
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(assets) = self.assets {
            config.asset_root = assets;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.debug_colliders |= self.debug_colliders;

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dice Drop".to_string(),
                        resolution: (1280u32, 720u32).into(),
                        // On the web the canvas follows the browser window.
                        fit_canvas_to_parent: true,
                        transparent: config.clear_color[3] < 1.0,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: config.asset_root.clone(),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn,dicedrop=debug".to_string(),
                    ..default()
                }),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin {
            enabled: config.debug_colliders,
            ..default()
        })
        .insert_resource(config)
        .add_plugins(DiceDemoPlugin)
        .run();
}
