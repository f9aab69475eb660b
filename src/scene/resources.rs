use bevy::prelude::Resource;
use scenegen::location::Coordinate;
use scenegen::sun::Season;

/// Resolved location plus the season to approximate the sun for.
/// Inserted by `main` before the app starts; the season can be flipped
/// at runtime with the `S` key.
#[derive(Resource, Clone)]
pub struct SceneSettings {
    pub coordinate: Coordinate,
    pub season: Season,
}
