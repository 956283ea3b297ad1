//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [map]
//! width = 40
//! height = 30
//! tile_size = 32
//!
//! [player]
//! speed = 175
//!
//! [camera]
//! pan_speed = 400
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::locomotion::DEFAULT_WALK_SPEED;
use crate::resources::worldbounds::WorldBounds;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAP_WIDTH: u32 = 40;
const DEFAULT_MAP_HEIGHT: u32 = 30;
const DEFAULT_TILE_SIZE: u32 = 32;
const DEFAULT_CAMERA_PAN_SPEED: f32 = 400.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    /// Tile size in pixels.
    pub tile_size: u32,
    /// Player walking speed in world units per second.
    pub player_speed: f32,
    /// Camera scroll speed in the explore scene.
    pub camera_pan_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            player_speed: DEFAULT_WALK_SPEED,
            camera_pan_speed: DEFAULT_CAMERA_PAN_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or malformed values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = read_u32(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_u32(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = read_u32(&config, "window", "target_fps") {
            self.target_fps = fps;
        }

        // [map] section; the pixel size must fit in a u32 or the map keeps its old size
        let map_width = read_u32(&config, "map", "width").unwrap_or(self.map_width);
        let map_height = read_u32(&config, "map", "height").unwrap_or(self.map_height);
        let tile_size = match read_u32(&config, "map", "tile_size") {
            Some(0) | None => self.tile_size,
            Some(tile_size) => tile_size,
        };
        if map_width.checked_mul(tile_size).is_some() && map_height.checked_mul(tile_size).is_some()
        {
            self.map_width = map_width;
            self.map_height = map_height;
            self.tile_size = tile_size;
        } else {
            warn!(
                "Ignoring [map] {}x{} tiles of {}px: map too large",
                map_width, map_height, tile_size
            );
        }

        // [player] section
        if let Some(speed) = read_speed(&config, "player", "speed") {
            self.player_speed = speed;
        }

        // [camera] section
        if let Some(speed) = read_speed(&config, "camera", "pan_speed") {
            self.camera_pan_speed = speed;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, map {}x{} tiles of {}px, speed={}, pan={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.map_width,
            self.map_height,
            self.tile_size,
            self.player_speed,
            self.camera_pan_speed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("map", "width", Some(self.map_width.to_string()));
        config.set("map", "height", Some(self.map_height.to_string()));
        config.set("map", "tile_size", Some(self.tile_size.to_string()));

        config.set("player", "speed", Some(self.player_speed.to_string()));

        config.set("camera", "pan_speed", Some(self.camera_pan_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Map bounds described by the `[map]` section.
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(self.map_width, self.map_height, self.tile_size)
    }
}

/// Unsigned value that fits in a u32; anything else is ignored.
fn read_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring [{}] {} = {}: out of range", section, key, value);
            None
        }
    }
}

/// Finite, non-negative speed.
fn read_speed(config: &Ini, section: &str, key: &str) -> Option<f32> {
    let speed = config.getfloat(section, key).ok().flatten()? as f32;
    if speed.is_finite() && speed >= 0.0 {
        Some(speed)
    } else {
        warn!("Ignoring [{}] {} = {}", section, key, speed);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tilewalk-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.player_speed, 175.0);
        assert_eq!(config.world_bounds(), WorldBounds::new(40, 30, 32));
        assert_eq!(config.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.player_speed, 175.0);
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_config_path("partial");
        std::fs::write(
            &path,
            "[player]\nspeed = 90.5\n\n[map]\nwidth = 12\ntile_size = 0\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.player_speed, 90.5);
        assert_eq!(config.map_width, 12);
        assert_eq!(config.map_height, 30);
        // zero tile size is ignored
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_load_rejects_oversized_map() {
        let path = temp_config_path("oversized");
        std::fs::write(
            &path,
            "[map]\nwidth = 70000\nheight = 10\ntile_size = 70000\n\n[window]\nwidth = 5000000000\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.world_bounds(), WorldBounds::new(40, 30, 32));
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_load_rejects_non_finite_speed() {
        let path = temp_config_path("infspeed");
        std::fs::write(&path, "[player]\nspeed = inf\n\n[camera]\npan_speed = NaN\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.player_speed, 175.0);
        assert_eq!(config.camera_pan_speed, 400.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("saved");
        let mut config = GameConfig::with_path(&path);
        config.window_width = 1024;
        config.camera_pan_speed = 250.0;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.window_width, 1024);
        assert_eq!(loaded.camera_pan_speed, 250.0);
        assert_eq!(loaded.player_speed, 175.0);
    }
}
