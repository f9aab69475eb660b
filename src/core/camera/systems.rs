use bevy::prelude::*;

/// The diagram is a fixed-size canvas, so one static 2D camera at the
/// world origin covers it: world units map 1:1 to canvas pixels.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
