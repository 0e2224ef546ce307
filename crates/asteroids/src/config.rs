//! Game configuration
//!
//! Every tunable lives here with the classic values as defaults. An
//! `asteroids.toml` next to the binary can override any subset; a missing
//! file is not an error, and a malformed one logs a warning and falls back
//! to the defaults.

use console_engine::{input::KeyCode, EngineConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Console buffer settings
    pub console: ConsoleConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Controls settings
    pub controls: ControlsConfig,
}

/// Console buffer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Field width in cells
    pub width: u16,

    /// Field height in cells
    pub height: u16,

    /// Frame-rate cap
    pub target_fps: u32,
}

/// Gameplay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Ship turn rate in radians per second
    pub turn_rate: f32,

    /// Ship thrust acceleration in cells per second squared
    pub thrust: f32,

    /// Bullet speed in cells per second
    pub bullet_speed: f32,

    /// Asteroid rotation rate in radians per second
    pub asteroid_spin: f32,

    /// Speed given to split children, in cells per second
    pub child_speed: f32,

    /// Speed of the asteroids respawned after a field clear
    pub respawn_speed: f32,

    /// Distance from the origin at which field-clear asteroids respawn
    pub respawn_offset: f32,

    /// Asteroids at or below this radius are destroyed instead of split
    pub min_split_size: u32,

    /// Radius of freshly seeded asteroids
    pub start_size: u32,

    /// Score awarded per asteroid hit
    pub hit_reward: u32,

    /// Score awarded when the field is cleared
    pub clear_bonus: u32,
}

/// Key bindings for the four game actions plus quit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn counter-clockwise (held)
    pub left: KeyCode,

    /// Turn clockwise (held)
    pub right: KeyCode,

    /// Thrust along the facing direction (held)
    pub thrust: KeyCode,

    /// Fire one bullet (on release)
    pub fire: KeyCode,

    /// Quit the game
    pub quit: KeyCode,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 100,
            target_fps: 60,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            turn_rate: 5.0,
            thrust: 20.0,
            bullet_speed: 50.0,
            asteroid_spin: 0.5,
            child_speed: 10.0,
            respawn_speed: 10.0,
            respawn_offset: 30.0,
            min_split_size: 4,
            start_size: 16,
            hit_reward: 100,
            clear_bonus: 1000,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            thrust: KeyCode::Up,
            fire: KeyCode::Space,
            quit: KeyCode::Escape,
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Engine configuration matching the console settings.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            title: "Asteroids".to_string(),
            width: self.console.width,
            height: self.console.height,
            target_fps: self.console.target_fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_classic_values() {
        let config = GameConfig::default();
        assert_eq!(config.gameplay.start_size, 16);
        assert_eq!(config.gameplay.min_split_size, 4);
        assert_eq!(config.gameplay.hit_reward, 100);
        assert_eq!(config.gameplay.clear_bonus, 1000);
        assert_eq!(config.console.width, 160);
        assert_eq!(config.console.height, 100);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: GameConfig =
            toml::from_str("[gameplay]\nbullet_speed = 75.0\n").expect("valid toml");
        assert_eq!(config.gameplay.bullet_speed, 75.0);
        assert_eq!(config.gameplay.turn_rate, 5.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default(Path::new("/nonexistent/asteroids.toml"));
        assert_eq!(config.gameplay.start_size, 16);
    }
}
