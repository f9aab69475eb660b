pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

use crate::scene::events::RedrawScene;
use crate::scene::systems::*;
use bevy::prelude::*;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RedrawScene>()
            .add_systems(Startup, request_initial_draw)
            .add_systems(
                Update,
                (toggle_season, redraw_scene_on_event, draw_strokes),
            );
    }
}
