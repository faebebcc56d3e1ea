//! Die model loading
//!
//! Models are requested at startup. Dice are attached to the physics world
//! only once every model and its dependencies are available, which also moves
//! the demo from `Loading` to `Running`.

use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::dice3d::meshes::{die_collider, merge_primitives, place_meshes, placement_of, NodeView};
use crate::dice3d::types::*;

use super::dice::{spawn_die, DieVisual};
use super::setup::calculate_dice_position;

/// Request the die models for the configured variant
pub fn request_dice_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<DemoConfig>,
) {
    let pending = config
        .variant
        .die_assets()
        .into_iter()
        .map(|(die_type, path)| {
            info!("Loading {} model from '{}'", die_type.name(), path);
            PendingDie {
                die_type,
                handle: asset_server.load(path.clone()),
                path,
            }
        })
        .collect();

    commands.insert_resource(DiceAssets { pending });
}

/// Loaded glTF collections needed to assemble dice
#[derive(bevy::ecs::system::SystemParam)]
pub struct GltfCollections<'w> {
    pub gltfs: Res<'w, Assets<Gltf>>,
    pub gltf_meshes: Res<'w, Assets<GltfMesh>>,
    pub gltf_nodes: Res<'w, Assets<GltfNode>>,
}

/// Attach every die once its model is loaded
#[allow(clippy::too_many_arguments)]
pub fn spawn_dice_when_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    dice_assets: Res<DiceAssets>,
    collections: GltfCollections,
    meshes: Res<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<DemoConfig>,
    mut rng: ResMut<ThrowRng>,
    mut next_phase: ResMut<NextState<DemoPhase>>,
) {
    for pending in &dice_assets.pending {
        let failed = matches!(asset_server.load_state(&pending.handle), LoadState::Failed(_))
            || matches!(
                asset_server.recursive_dependency_load_state(&pending.handle),
                RecursiveDependencyLoadState::Failed(_)
            );
        if failed {
            error!(
                "Failed to load {} model '{}' from asset root '{}'",
                pending.die_type.name(),
                pending.path,
                config.asset_root
            );
            next_phase.set(DemoPhase::Failed);
            return;
        }
    }

    let all_loaded = dice_assets
        .pending
        .iter()
        .all(|pending| asset_server.is_loaded_with_dependencies(&pending.handle));
    if !all_loaded {
        return;
    }

    let total = dice_assets.pending.len();
    let mut spawned = 0;

    for (i, pending) in dice_assets.pending.iter().enumerate() {
        let Some(gltf) = collections.gltfs.get(&pending.handle) else {
            continue;
        };

        let parts = die_parts(gltf, config.variant, config.scene_mesh_index, &collections);
        let Some(die) = assemble_die(&parts, pending.die_type, &meshes, &mut materials) else {
            warn!(
                "'{}' has no usable mesh for {}; skipping",
                pending.path,
                pending.die_type.name()
            );
            continue;
        };

        let position = calculate_dice_position(i, total, config.die_spacing);
        spawn_die(
            &mut commands,
            die.collider,
            &die.visuals,
            pending.die_type,
            position,
            &config,
            &mut rng,
        );
        spawned += 1;
    }

    info!("Spawned {} of {} dice", spawned, total);
    if spawned == 0 {
        next_phase.set(DemoPhase::Failed);
    } else {
        next_phase.set(DemoPhase::Running);
    }
}

/// A glTF primitive placed in the die's model space
#[derive(Debug, Clone)]
pub struct DiePart {
    pub mesh: Handle<Mesh>,
    pub material: Option<Handle<StandardMaterial>>,
    pub transform: Transform,
}

/// Physics shape and rendered primitives of one die
pub struct AssembledDie {
    pub collider: Collider,
    pub visuals: Vec<DieVisual>,
}

/// Build one die from its placed primitives.
///
/// The collider wraps every primitive merged together. Each primitive keeps
/// its own material; primitives without one share the die type's color.
pub fn assemble_die(
    parts: &[DiePart],
    die_type: DiceType,
    meshes: &Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Option<AssembledDie> {
    let placed: Vec<(&DiePart, Mesh)> = parts
        .iter()
        .filter_map(|part| {
            meshes
                .get(&part.mesh)
                .map(|mesh| (part, mesh.clone().transformed_by(part.transform)))
        })
        .collect();

    let refs: Vec<&Mesh> = placed.iter().map(|(_, mesh)| mesh).collect();
    let merged = merge_primitives(&refs)?;

    let mut fallback: Option<Handle<StandardMaterial>> = None;
    let visuals = placed
        .iter()
        .map(|(part, _)| {
            let material = match &part.material {
                Some(material) => material.clone(),
                None => fallback
                    .get_or_insert_with(|| {
                        materials.add(StandardMaterial {
                            base_color: die_type.color(),
                            perceptual_roughness: 0.3,
                            ..default()
                        })
                    })
                    .clone(),
            };
            DieVisual {
                mesh: part.mesh.clone(),
                material,
                transform: part.transform,
            }
        })
        .collect();

    Some(AssembledDie {
        collider: die_collider(&merged),
        visuals,
    })
}

/// Primitives making up the die in one model file, placed by the node hierarchy.
///
/// The single-die scene contributes only its configured mesh; a set file
/// contributes every mesh its nodes hold.
fn die_parts(
    gltf: &Gltf,
    variant: DemoVariant,
    mesh_index: usize,
    collections: &GltfCollections,
) -> Vec<DiePart> {
    let placed = place_meshes(&gltf.nodes, |handle| {
        collections.gltf_nodes.get(handle).map(|node| NodeView {
            transform: node.transform,
            mesh: node.mesh.clone(),
            children: node.children.clone(),
        })
    });

    let selected = match variant {
        DemoVariant::Set => placed,
        DemoVariant::Single => {
            let Some(target) = gltf.meshes.get(mesh_index) else {
                warn!(
                    "glTF has {} meshes; mesh index {} is out of range",
                    gltf.meshes.len(),
                    mesh_index
                );
                return Vec::new();
            };
            vec![(target.clone(), placement_of(&placed, target))]
        }
    };

    selected
        .iter()
        .filter_map(|(handle, transform)| {
            collections
                .gltf_meshes
                .get(handle)
                .map(|gltf_mesh| (gltf_mesh, *transform))
        })
        .flat_map(|(gltf_mesh, transform)| {
            gltf_mesh.primitives.iter().map(move |primitive| DiePart {
                mesh: primitive.mesh.clone(),
                material: primitive.material.clone(),
                transform,
            })
        })
        .collect()
}
