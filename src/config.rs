//! Game configuration
//!
//! Settings load from a JSON file, field by field: any field that is
//! missing, fails to parse, or is out of range keeps its default and is
//! named in the log, so a broken settings file never aborts the game or
//! silently drops the rest of the file.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::Area;

/// Mouse speed and spawn-rate preset chosen on the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Scale the configured mouse move gain for this preset.
    pub fn scale_gain(&self, gain: i32) -> i32 {
        match self {
            Difficulty::Easy => (gain / 2).max(1),
            Difficulty::Medium => gain,
            Difficulty::Hard => gain * 2,
        }
    }

    /// Scale the configured spawn interval for this preset.
    pub fn scale_spawn_interval(&self, interval_ms: u64) -> u64 {
        match self {
            Difficulty::Easy => interval_ms * 3 / 2,
            Difficulty::Medium => interval_ms,
            Difficulty::Hard => interval_ms / 4,
        }
    }
}

/// Frame pacing preset; scales the wait the caller sleeps between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Refresh {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Refresh {
    pub fn as_str(&self) -> &'static str {
        match self {
            Refresh::Slow => "Slow",
            Refresh::Medium => "Medium",
            Refresh::Fast => "Fast",
        }
    }

    pub fn scale_wait(&self, wait_ms: u64) -> u64 {
        match self {
            Refresh::Slow => wait_ms * 6 / 5,
            Refresh::Medium => wait_ms,
            Refresh::Fast => wait_ms * 4 / 5,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playable area in pixels
    pub screen_width: i32,
    pub screen_height: i32,

    /// Cat displacement per frame while an arrow is held
    pub cat_speed: i32,
    /// Recommended frame pacing for the caller's loop
    pub wait_time_ms: u64,

    /// Time between mouse spawns, before the difficulty preset applies
    pub spawn_time_ms: u64,
    /// Fastest-axis pixels per tick, before the difficulty preset applies
    pub mouse_move_gain: i32,

    /// Round length
    pub game_time_ms: u64,

    /// Sprite footprints
    pub cat_width: i32,
    pub cat_height: i32,
    pub mouse_width: i32,
    pub mouse_height: i32,

    pub difficulty: Difficulty,
    pub refresh: Refresh,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,
            cat_speed: consts::CAT_SPEED,
            wait_time_ms: consts::WAIT_TIME_MS,
            spawn_time_ms: consts::SPAWN_TIME_MS,
            mouse_move_gain: consts::MOUSE_MOVE_GAIN,
            game_time_ms: consts::GAME_TIME_MS,
            cat_width: consts::CAT_SIZE.0,
            cat_height: consts::CAT_SIZE.1,
            mouse_width: consts::MOUSE_SIZE.0,
            mouse_height: consts::MOUSE_SIZE.1,
            difficulty: Difficulty::default(),
            refresh: Refresh::default(),
        }
    }
}

impl Config {
    /// Load settings from `path`, falling back to defaults if the file
    /// cannot be read.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(err) => {
                log::warn!(
                    "could not read settings file {}: {err}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Parse settings from JSON, field by field. Fields that fail to parse
    /// keep their defaults and are named in the log.
    pub fn from_json(text: &str) -> Self {
        let mut config = Self::default();

        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(err) => {
                log::warn!("settings are not valid JSON ({err}); using defaults");
                return config;
            }
        };
        let Some(map) = value.as_object() else {
            log::warn!("settings root is not an object; using defaults");
            return config;
        };

        merge_field(map, "screen_width", &mut config.screen_width);
        merge_field(map, "screen_height", &mut config.screen_height);
        merge_field(map, "cat_speed", &mut config.cat_speed);
        merge_field(map, "wait_time_ms", &mut config.wait_time_ms);
        merge_field(map, "spawn_time_ms", &mut config.spawn_time_ms);
        merge_field(map, "mouse_move_gain", &mut config.mouse_move_gain);
        merge_field(map, "game_time_ms", &mut config.game_time_ms);
        merge_field(map, "cat_width", &mut config.cat_width);
        merge_field(map, "cat_height", &mut config.cat_height);
        merge_field(map, "mouse_width", &mut config.mouse_width);
        merge_field(map, "mouse_height", &mut config.mouse_height);
        merge_field(map, "difficulty", &mut config.difficulty);
        merge_field(map, "refresh", &mut config.refresh);

        config.sanitize();
        config
    }

    /// Restore the default for any field below its minimum. The simulation
    /// requires a positive playable area, sprite footprints, and move gain;
    /// zero timers would spawn every tick or end the round immediately.
    fn sanitize(&mut self) {
        let d = Self::default();
        enforce_min("screen_width", &mut self.screen_width, 1, d.screen_width);
        enforce_min("screen_height", &mut self.screen_height, 1, d.screen_height);
        enforce_min("cat_speed", &mut self.cat_speed, 1, d.cat_speed);
        enforce_min("wait_time_ms", &mut self.wait_time_ms, 1, d.wait_time_ms);
        enforce_min("spawn_time_ms", &mut self.spawn_time_ms, 1, d.spawn_time_ms);
        enforce_min("mouse_move_gain", &mut self.mouse_move_gain, 1, d.mouse_move_gain);
        enforce_min("game_time_ms", &mut self.game_time_ms, 1, d.game_time_ms);
        enforce_min("cat_width", &mut self.cat_width, 1, d.cat_width);
        enforce_min("cat_height", &mut self.cat_height, 1, d.cat_height);
        enforce_min("mouse_width", &mut self.mouse_width, 1, d.mouse_width);
        enforce_min("mouse_height", &mut self.mouse_height, 1, d.mouse_height);
    }

    pub fn area(&self) -> Area {
        Area::new(self.screen_width, self.screen_height)
    }

    pub fn cat_size(&self) -> IVec2 {
        IVec2::new(self.cat_width, self.cat_height)
    }

    pub fn mouse_size(&self) -> IVec2 {
        IVec2::new(self.mouse_width, self.mouse_height)
    }

    /// Spawn interval with the difficulty preset applied.
    pub fn effective_spawn_interval_ms(&self) -> u64 {
        self.difficulty.scale_spawn_interval(self.spawn_time_ms)
    }

    /// Mouse move gain with the difficulty preset applied.
    pub fn effective_move_gain(&self) -> i32 {
        self.difficulty.scale_gain(self.mouse_move_gain)
    }

    /// Frame wait with the refresh preset applied.
    pub fn effective_wait_time_ms(&self) -> u64 {
        self.refresh.scale_wait(self.wait_time_ms)
    }
}

fn enforce_min<T>(key: &str, slot: &mut T, min: T, default: T)
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    if *slot < min {
        log::warn!(
            "settings field '{key}' must be at least {min} (got {}); keeping default",
            *slot
        );
        *slot = default;
    }
}

fn merge_field<T: DeserializeOwned>(
    map: &serde_json::Map<String, serde_json::Value>,
    key: &str,
    slot: &mut T,
) {
    if let Some(value) = map.get(key) {
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => *slot = parsed,
            Err(err) => {
                log::warn!("settings field '{key}' is invalid ({err}); keeping default");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_is_missing() {
        let config = Config::load(Path::new("/nonexistent/cat-mouse-settings.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_defaults_when_json_is_malformed() {
        assert_eq!(Config::from_json("not json at all"), Config::default());
        assert_eq!(Config::from_json("[1, 2, 3]"), Config::default());
    }

    #[test]
    fn test_bad_field_keeps_default_while_good_fields_parse() {
        let config = Config::from_json(
            r#"{
                "screen_width": 1024,
                "cat_speed": "very fast",
                "difficulty": "hard",
                "unknown_field": true
            }"#,
        );
        assert_eq!(config.screen_width, 1024);
        assert_eq!(config.cat_speed, crate::consts::CAT_SPEED);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.screen_height, crate::consts::SCREEN_HEIGHT);
    }

    #[test]
    fn test_out_of_range_fields_keep_defaults() {
        let config = Config::from_json(
            r#"{
                "mouse_move_gain": 0,
                "screen_width": -800,
                "spawn_time_ms": 0,
                "mouse_height": -1,
                "game_time_ms": 30000
            }"#,
        );
        assert_eq!(config.mouse_move_gain, crate::consts::MOUSE_MOVE_GAIN);
        assert_eq!(config.screen_width, crate::consts::SCREEN_WIDTH);
        assert_eq!(config.spawn_time_ms, crate::consts::SPAWN_TIME_MS);
        assert_eq!(config.mouse_height, crate::consts::MOUSE_SIZE.1);
        assert_eq!(config.game_time_ms, 30000); // in-range field still applies

        // The values handed to the spawner stay usable: a zero gain would
        // leave shallow- and steep-slope mice motionless and never culled.
        assert!(config.effective_move_gain() >= 1);
        assert!(config.area().width >= 1 && config.area().height >= 1);
    }

    #[test]
    fn test_difficulty_scaling() {
        assert_eq!(Difficulty::Easy.scale_gain(5), 2);
        assert_eq!(Difficulty::Easy.scale_gain(1), 1); // floor at 1
        assert_eq!(Difficulty::Medium.scale_gain(5), 5);
        assert_eq!(Difficulty::Hard.scale_gain(5), 10);

        assert_eq!(Difficulty::Easy.scale_spawn_interval(2000), 3000);
        assert_eq!(Difficulty::Medium.scale_spawn_interval(2000), 2000);
        assert_eq!(Difficulty::Hard.scale_spawn_interval(2000), 500);
    }

    #[test]
    fn test_refresh_scaling() {
        assert_eq!(Refresh::Slow.scale_wait(100), 120);
        assert_eq!(Refresh::Medium.scale_wait(100), 100);
        assert_eq!(Refresh::Fast.scale_wait(100), 80);
    }

    #[test]
    fn test_preset_names_round_trip() {
        assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("impossible"), None);
        assert_eq!(Difficulty::Hard.as_str(), "Hard");
    }
}
