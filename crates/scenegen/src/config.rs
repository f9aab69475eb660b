use serde::{Deserialize, Serialize};
use std::sync::{Mutex, OnceLock};

const CONFIG_FILE: &str = "sunhouse_config.toml";

static CONFIG: OnceLock<Mutex<SceneConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading from file on first use.
/// A missing or unreadable file yields the compiled-in defaults.
pub fn get_config() -> SceneConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        let config = SceneConfig::load_from_file(CONFIG_FILE).unwrap_or_default();
        Mutex::new(config)
    });
    config_mutex.lock().unwrap().clone()
}

/// Re-read the configuration file. Keeps the current values when the file
/// is missing or does not parse.
pub fn reload_config() {
    let Ok(new_config) = SceneConfig::load_from_file(CONFIG_FILE) else {
        return;
    };
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex.lock().unwrap() = new_config;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub canvas: CanvasConfig,
    pub sun_path: SunPathConfig,
    pub compass: CompassConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunPathConfig {
    pub radius: f32,
    pub marker_radius: f32,
    /// Number of line segments the arc polyline is sampled into.
    pub segments: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompassConfig {
    pub margin: f32,
    pub font_size: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig {
                width: 600.0,
                height: 400.0,
            },
            sun_path: SunPathConfig {
                radius: 120.0,
                marker_radius: 15.0,
                segments: 64,
            },
            compass: CompassConfig {
                margin: 30.0,
                font_size: 14.0,
            },
        }
    }
}

impl SceneConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: SceneConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas_contract() {
        let config = SceneConfig::default();
        assert_eq!(config.canvas.width, 600.0);
        assert_eq!(config.canvas.height, 400.0);
        assert_eq!(config.sun_path.radius, 120.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SceneConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.canvas.width, config.canvas.width);
        assert_eq!(parsed.sun_path.segments, config.sun_path.segments);
        assert_eq!(parsed.compass.margin, config.compass.margin);
    }
}
