//! Tunable game configuration.
//!
//! Every simulation constant lives here so a JSON file can override it.
//! Missing fields fall back to the reference values in [`super::constants`].

use super::constants::*;
use crate::utils::persistence::{data_path, read_json, write_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_interval_ms: u64,

    pub player_width: f64,
    pub player_height: f64,
    /// Player x as a fraction of the field width, fixed when a run starts.
    pub player_x_fraction: f64,

    pub gravity: f64,
    pub flap_impulse: f64,
    pub terminal_velocity: f64,

    pub obstacle_speed: f64,
    pub obstacle_width: f64,
    pub gap_height: f64,
    pub gap_margin: f64,
    pub spawn_interval_ms: u64,
    pub despawn_x: f64,

    pub collision_h_buffer: f64,
    pub collision_v_buffer: f64,

    pub units_per_column: f64,
    pub units_per_row: f64,

    /// Directory holding the sprite files. Relative paths resolve against
    /// the working directory.
    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_x_fraction: PLAYER_X_FRACTION,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            despawn_x: DESPAWN_X,
            collision_h_buffer: COLLISION_H_BUFFER,
            collision_v_buffer: COLLISION_V_BUFFER,
            units_per_column: UNITS_PER_COLUMN,
            units_per_row: UNITS_PER_ROW,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Option<GameConfig> = read_json(path).map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                ConfigError::Invalid {
                    path: path.to_path_buf(),
                    reason: source.to_string(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config = config.unwrap_or_default();
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Write this config as pretty JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        write_json(path, self).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path of the per-user config file.
    pub fn default_path() -> io::Result<PathBuf> {
        data_path(CONFIG_FILE_NAME)
    }

    /// Load `~/.dragonflap/config.json`, falling back to defaults on any
    /// problem. Problems are logged, never fatal.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("no data directory, using default config: {}", e);
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("config loaded from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using default config", e);
                Self::default()
            }
        }
    }

    /// Reject values that would stall or invert the simulation.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be positive".to_string());
        }
        if self.spawn_interval_ms == 0 {
            return Err("spawn_interval_ms must be positive".to_string());
        }
        let positive = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("terminal_velocity", self.terminal_velocity),
            ("units_per_column", self.units_per_column),
            ("units_per_row", self.units_per_row),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number", name));
            }
        }
        if !(0.0..=1.0).contains(&self.player_x_fraction) {
            return Err("player_x_fraction must be within 0..=1".to_string());
        }
        if self.flap_impulse >= 0.0 {
            return Err("flap_impulse must be negative (upward)".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "dragonflap-config-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_reference() {
        let config = GameConfig::new();
        assert_eq!(config.gravity, 0.05);
        assert_eq!(config.flap_impulse, -4.0);
        assert_eq!(config.terminal_velocity, 5.0);
        assert_eq!(config.obstacle_width, 600.0);
        assert_eq!(config.gap_height, 300.0);
        assert_eq!(config.spawn_interval_ms, 2000);
        assert_eq!(config.collision_h_buffer, 200.0);
        assert_eq!(config.collision_v_buffer, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = scratch_file("partial", r#"{ "gravity": 0.1, "collision_h_buffer": 0.0 }"#);
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config.gravity, 0.1);
        assert_eq!(config.collision_h_buffer, 0.0);
        assert_eq!(config.gap_height, GAP_HEIGHT);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("dragonflap-config-does-not-exist.json");
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_is_invalid() {
        let path = scratch_file("malformed", "gravity = 3");
        let err = GameConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_positive_flap_rejected() {
        let path = scratch_file("flap", r#"{ "flap_impulse": 4.0 }"#);
        let err = GameConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("flap_impulse"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_saved_config_loads_back() {
        let path = scratch_file("save", "{}");
        let mut config = GameConfig::default();
        config.gap_height = 360.0;
        config.assets_dir = PathBuf::from("/opt/dragonflap/art");
        config.save_to(&path).unwrap();

        let loaded = GameConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        fs::remove_file(path).ok();
    }
}
