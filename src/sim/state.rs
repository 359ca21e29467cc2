//! Game session state: the cat, the mice, score and round timing
//!
//! One `GameState` is constructed per run and owns everything the round
//! needs, including the seeded RNG. There are no process-wide singletons.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::highscores::HighScores;

use super::spawn::{MouseSpawner, SpawnConfig};
use super::trajectory::{Area, Trajectory};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu screen; a round starts on request
    Menu,
    /// Timed round in progress
    Playing,
    /// Round over; mice still in flight keep moving until a restart
    GameOver,
}

/// Things that happened during a tick, for the caller's audio/HUD layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The cat caught a mouse; worth one point
    MouseCaught { mouse_id: u32 },
    /// The round timer ran out. `best` is set when the score topped the
    /// leaderboard.
    RoundOver { score: u32, best: bool },
}

/// A mouse sprite crossing the screen on a fixed line.
///
/// The velocity never changes after spawn; the position only ever changes by
/// velocity accumulation in the spawner's tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mouse {
    pub id: u32,
    /// Top-left corner of the footprint
    pub pos: IVec2,
    /// Footprint size, immutable for the mouse's lifetime
    pub size: IVec2,
    pub velocity: IVec2,
}

impl Mouse {
    pub fn new(id: u32, size: IVec2, flight: Trajectory) -> Self {
        Self {
            id,
            pos: flight.start,
            size,
            velocity: flight.velocity,
        }
    }

    /// Center of the footprint, for circle collision
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Collision radius: half the footprint width
    pub fn radius(&self) -> i32 {
        self.size.x / 2
    }
}

/// The player-controlled cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    /// Top-left corner of the footprint
    pub pos: IVec2,
    pub size: IVec2,
}

impl Cat {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn radius(&self) -> i32 {
        self.size.x / 2
    }

    /// Move by `delta`, clamped so the footprint stays fully on screen.
    pub fn step(&mut self, delta: IVec2, area: Area) {
        let max = IVec2::new(area.width - self.size.x, area.height - self.size.y);
        self.pos = (self.pos + delta).clamp(IVec2::ZERO, max);
    }
}

/// Complete state for one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Run seed, kept for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub cat: Cat,
    pub spawner: MouseSpawner,
    pub score: u32,
    pub time_remaining_ms: u64,
    pub round_start_ms: u64,
    /// Sound muting; playback itself belongs to the caller
    pub muted: bool,
    pub high_scores: HighScores,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the menu phase with the given settings and seed.
    pub fn new(config: Config, seed: u64) -> Self {
        let area = config.area();
        let cat_size = config.cat_size();
        let spawner = MouseSpawner::new(SpawnConfig {
            area,
            spawn_interval_ms: config.effective_spawn_interval_ms(),
            move_gain: config.effective_move_gain(),
            mouse_size: config.mouse_size(),
        });
        let game_time_ms = config.game_time_ms;

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            cat: Cat::new((IVec2::new(area.width, area.height) - cat_size) / 2, cat_size),
            spawner,
            score: 0,
            time_remaining_ms: game_time_ms,
            round_start_ms: 0,
            muted: false,
            high_scores: HighScores::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Begin a fresh round at `now_ms`: cleared mice, reset score and timer,
    /// cat dropped at a random spot fully inside the screen.
    pub(crate) fn start_round(&mut self, now_ms: u64) {
        self.spawner.reset();
        self.score = 0;
        self.round_start_ms = now_ms;
        self.time_remaining_ms = self.config.game_time_ms;

        let area = self.config.area();
        let max = IVec2::new(
            (area.width - self.cat.size.x).max(2),
            (area.height - self.cat.size.y).max(2),
        );
        self.cat.pos = IVec2::new(
            self.rng.random_range(1..max.x),
            self.rng.random_range(1..max.y),
        );

        self.phase = GamePhase::Playing;
    }

    /// True while the round timer is still running.
    pub fn round_active(&self) -> bool {
        self.phase == GamePhase::Playing && self.time_remaining_ms > 0
    }
}
