//! Geometry helpers for the box and the loaded dice.

use bevy::log::warn;
use bevy::prelude::*;
use bevy_mesh::VertexAttributeValues;
use bevy_rapier3d::prelude::*;

/// One slab of the box: center and half extents
pub type BoxPart = (Vec3, Vec3);

/// Six slabs lying just outside a `width x height x depth` box centered on the origin.
///
/// Together they only block from the inside, like a box rendered with its back faces.
pub fn inverted_box_parts(width: f32, height: f32, depth: f32, thickness: f32) -> [BoxPart; 6] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;
    let t = thickness / 2.0;

    [
        // Floor and ceiling overlap the walls at the edges.
        (Vec3::new(0.0, -hh - t, 0.0), Vec3::new(hw + thickness, t, hd + thickness)),
        (Vec3::new(0.0, hh + t, 0.0), Vec3::new(hw + thickness, t, hd + thickness)),
        (Vec3::new(-hw - t, 0.0, 0.0), Vec3::new(t, hh, hd + thickness)),
        (Vec3::new(hw + t, 0.0, 0.0), Vec3::new(t, hh, hd + thickness)),
        (Vec3::new(0.0, 0.0, -hd - t), Vec3::new(hw, hh, t)),
        (Vec3::new(0.0, 0.0, hd + t), Vec3::new(hw, hh, t)),
    ]
}

/// Compound collider made of [`inverted_box_parts`].
pub fn inverted_box_collider(width: f32, height: f32, depth: f32, thickness: f32) -> Collider {
    let shapes = inverted_box_parts(width, height, depth, thickness)
        .into_iter()
        .map(|(center, half)| (center, Quat::IDENTITY, Collider::cuboid(half.x, half.y, half.z)))
        .collect();
    Collider::compound(shapes)
}

/// Merge the sub-meshes of one glTF mesh into a single mesh.
///
/// Parts whose vertex layout doesn't match the first part are skipped.
pub fn merge_primitives(parts: &[&Mesh]) -> Option<Mesh> {
    let (first, rest) = parts.split_first()?;
    let mut merged = (*first).clone();

    for (i, part) in rest.iter().enumerate() {
        if let Err(err) = merged.merge(part) {
            warn!("Skipping die sub-mesh {} while merging: {}", i + 1, err);
        }
    }

    Some(merged)
}

/// What a model node contributes to the walk in [`place_meshes`]
pub struct NodeView<N, M> {
    pub transform: Transform,
    pub mesh: Option<M>,
    pub children: Vec<N>,
}

/// Every mesh reachable from the root nodes, paired with the transform
/// accumulated from its root down to the node holding it.
///
/// Roots are the nodes that are nobody's child. Nodes `view` can't resolve
/// are skipped along with their subtrees.
pub fn place_meshes<N: PartialEq, M>(
    nodes: &[N],
    view: impl Fn(&N) -> Option<NodeView<N, M>>,
) -> Vec<(M, Transform)> {
    let children: Vec<N> = nodes
        .iter()
        .filter_map(&view)
        .flat_map(|node| node.children)
        .collect();

    let mut placed = Vec::new();
    for root in nodes.iter().filter(|node| !children.contains(node)) {
        place_node(root, Transform::IDENTITY, &view, &mut placed);
    }
    placed
}

fn place_node<N, M>(
    node: &N,
    parent: Transform,
    view: &impl Fn(&N) -> Option<NodeView<N, M>>,
    out: &mut Vec<(M, Transform)>,
) {
    let Some(NodeView {
        transform,
        mesh,
        children,
    }) = view(node)
    else {
        return;
    };

    let placed = parent.mul_transform(transform);
    if let Some(mesh) = mesh {
        out.push((mesh, placed));
    }
    for child in &children {
        place_node(child, placed, view, out);
    }
}

/// Where `mesh` sits in a model: its first placement, or the mesh's own
/// space when no node instantiates it.
pub fn placement_of<M: PartialEq>(placed: &[(M, Transform)], mesh: &M) -> Transform {
    placed
        .iter()
        .find(|(candidate, _)| candidate == mesh)
        .map(|(_, transform)| *transform)
        .unwrap_or(Transform::IDENTITY)
}

/// Vertex positions of a mesh, if it stores them as `Float32x3`.
pub fn mesh_points(mesh: &Mesh) -> Vec<Vec3> {
    match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => positions
            .iter()
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect(),
        _ => Vec::new(),
    }
}

/// Convex hull around the die mesh, or a ball of its bounding radius.
pub fn die_collider(mesh: &Mesh) -> Collider {
    let points = mesh_points(mesh);
    let radius = points
        .iter()
        .map(|p| p.length())
        .fold(0.0_f32, f32::max)
        .max(0.01);

    Collider::convex_hull(&points).unwrap_or_else(|| {
        warn!(
            "Convex hull failed for die mesh ({} points); using a ball of radius {:.3}",
            points.len(),
            radius
        );
        Collider::ball(radius)
    })
}
