//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer pixel positions, whole-pixel motion per tick
//! - Seeded RNG only, owned by the session
//! - Caller-supplied monotonic millisecond clock
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::circles_overlap;
pub use spawn::{MouseSpawner, SpawnConfig};
pub use state::{Cat, GameEvent, GamePhase, GameState, Mouse};
pub use tick::{TickInput, tick};
pub use trajectory::{Area, Trajectory, edge_point, plan, velocity_for};
