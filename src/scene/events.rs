use bevy::prelude::*;

/// Request a full rebuild of the diagram from the current settings.
#[derive(Message)]
pub struct RedrawScene;
