//! Cat and Mouse - a timed chase arcade game core
//!
//! The player-controlled cat chases mouse sprites that cross the screen
//! along random edge-to-edge lines; each catch scores a point and a round
//! timer ends the chase. Rendering, input polling, and audio are left to
//! the embedding game loop, which drives the core once per frame.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trajectories, spawning, collisions,
//!   session state)
//! - `config`: Settings file with per-field fallback to defaults
//! - `highscores`: Session leaderboard

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{Config, Difficulty, Refresh};
pub use highscores::HighScores;

/// Gameplay defaults, used when a settings field is absent or invalid
pub mod consts {
    /// Playable area in pixels
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Cat displacement per frame while an arrow is held
    pub const CAT_SPEED: i32 = 10;

    /// Recommended frame pacing for the caller's loop
    pub const WAIT_TIME_MS: u64 = 16;

    /// Time between mouse spawns
    pub const SPAWN_TIME_MS: u64 = 2000;
    /// Fastest-axis pixels per tick for mouse flights
    pub const MOUSE_MOVE_GAIN: i32 = 5;

    /// Round length
    pub const GAME_TIME_MS: u64 = 60_000;

    /// Sprite footprints (width, height)
    pub const CAT_SIZE: (i32, i32) = (64, 64);
    pub const MOUSE_SIZE: (i32, i32) = (32, 32);
}
