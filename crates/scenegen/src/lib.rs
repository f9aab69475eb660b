pub mod config;
pub mod constants;
pub mod geometry;
pub mod location;
pub mod prelude;
pub mod scene;
pub mod sun;

pub use config::{get_config, reload_config};
