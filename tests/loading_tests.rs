//! Tests for requesting die models and the Loading phase

use bevy::asset::AssetPlugin;
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use dicedrop::dice3d::{
    request_dice_assets, spawn_dice_when_loaded, DemoConfig, DemoPhase, DemoVariant, DiceAssets,
    DiceType, Die, ThrowRng,
};

fn loading_app(variant: DemoVariant) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
        .init_asset::<Gltf>()
        .init_asset::<GltfMesh>()
        .init_asset::<GltfNode>()
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .insert_resource(DemoConfig::for_variant(variant))
        .insert_resource(ThrowRng::new(Some(3)))
        .init_resource::<DiceAssets>()
        .init_state::<DemoPhase>()
        .add_systems(Startup, request_dice_assets)
        .add_systems(
            Update,
            spawn_dice_when_loaded.run_if(in_state(DemoPhase::Loading)),
        );
    app
}

fn phase(app: &App) -> DemoPhase {
    *app.world().resource::<State<DemoPhase>>().get()
}

#[test]
fn requests_one_model_per_die_of_the_variant() {
    let mut app = loading_app(DemoVariant::Set);
    app.update();

    let assets = app.world().resource::<DiceAssets>();
    let paths: Vec<&str> = assets.pending.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["D4.glb", "D6.glb", "D8.glb", "D10.glb", "D12.glb", "D20.glb"]
    );

    let mut single = loading_app(DemoVariant::Single);
    single.update();
    let assets = single.world().resource::<DiceAssets>();
    assert_eq!(assets.pending.len(), 1);
    assert_eq!(assets.pending[0].die_type, DiceType::D20);
    assert_eq!(assets.pending[0].path, "scene.gltf");
}

#[test]
fn unloadable_model_moves_demo_to_failed() {
    // No glTF loader is registered, so every request fails.
    let mut app = loading_app(DemoVariant::Single);

    for _ in 0..500 {
        app.update();
        if phase(&app) != DemoPhase::Loading {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    assert_eq!(phase(&app), DemoPhase::Failed);
    let mut dice = app.world_mut().query::<&Die>();
    assert_eq!(dice.iter(app.world()).count(), 0);
}
