mod core;
mod helpers;
pub mod location;
mod scene;

pub use crate::scene::resources::SceneSettings;

use crate::core::camera::CameraPlugin;
use crate::scene::ScenePlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct DiagramPlugin;

impl Plugin for DiagramPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, ScenePlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
