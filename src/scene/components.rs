use bevy::prelude::*;

/// Everything spawned for one render pass carries this marker, so a
/// redraw can despawn the whole scene at once.
#[derive(Component)]
pub struct SceneEntity;

/// Polyline drawn with gizmos on top of the filled meshes, in world
/// space. Closed strokes outline polygons, open ones draw the sun path.
#[derive(Component)]
pub struct Stroke {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub closed: bool,
}

/// Circle outline for the sun disc.
#[derive(Component)]
pub struct RingStroke {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}
