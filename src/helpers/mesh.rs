use bevy::asset::RenderAssetUsages;
use bevy::math::Vec2;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::Mesh;

/// Build a filled 2D mesh from a convex polygon given in world space.
///
/// Vertices are fanned out from the first point, which is enough for the
/// convex shapes this diagram draws (boxes and triangles).
pub fn polygon_mesh(points: &[Vec2]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, p.y, 0.0]).collect();
    let normals = vec![[0.0, 0.0, 1.0]; points.len()];
    let uvs = polygon_uvs(points);

    let mut indices = Vec::new();
    for i in 1..points.len().saturating_sub(1) {
        indices.extend_from_slice(&[0, i as u32, i as u32 + 1]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Map each vertex into the polygon's bounding box, 0..1 on both axes.
fn polygon_uvs(points: &[Vec2]) -> Vec<[f32; 2]> {
    let min = points.iter().copied().reduce(Vec2::min).unwrap_or(Vec2::ZERO);
    let max = points.iter().copied().reduce(Vec2::max).unwrap_or(Vec2::ONE);
    let span = (max - min).max(Vec2::splat(f32::EPSILON));
    points
        .iter()
        .map(|p| [(p.x - min.x) / span.x, (p.y - min.y) / span.y])
        .collect()
}
