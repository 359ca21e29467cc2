//! Per-frame update driven by the caller's game loop

use glam::IVec2;

use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled by the caller for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start a round from the menu, or restart after game over
    pub start: bool,
    /// Toggle sound muting
    pub toggle_mute: bool,
}

/// Advance the session by one frame.
///
/// `now_ms` must come from a monotonic frame clock and never go backward;
/// wall-clock adjustments would corrupt the spawn and round timers.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    state.events.clear();

    if input.toggle_mute {
        state.muted = !state.muted;
    }

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.start_round(now_ms);
            }
        }

        GamePhase::Playing => {
            move_cat(state, input);

            state.spawner.tick(now_ms, true, &mut state.rng);

            let caught = state
                .spawner
                .catch_overlapping(state.cat.center(), state.cat.radius());
            state.score += caught.len() as u32;
            for mouse_id in caught {
                state.events.push(GameEvent::MouseCaught { mouse_id });
            }

            let elapsed = now_ms.saturating_sub(state.round_start_ms);
            state.time_remaining_ms = state.config.game_time_ms.saturating_sub(elapsed);
            if state.time_remaining_ms == 0 {
                finish_round(state, now_ms);
            }
        }

        GamePhase::GameOver => {
            // Spawning stops with the round; mice already in flight keep
            // moving and the cat stays put.
            state.spawner.tick(now_ms, false, &mut state.rng);
            if input.start {
                state.start_round(now_ms);
            }
        }
    }
}

fn move_cat(state: &mut GameState, input: &TickInput) {
    let speed = state.config.cat_speed;
    let mut delta = IVec2::ZERO;
    if input.up {
        delta.y -= speed;
    }
    if input.down {
        delta.y += speed;
    }
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    if delta != IVec2::ZERO {
        state.cat.step(delta, state.config.area());
    }
}

fn finish_round(state: &mut GameState, now_ms: u64) {
    let rank = state.high_scores.add_score(state.score, now_ms);
    state.events.push(GameEvent::RoundOver {
        score: state.score,
        best: rank == Some(1),
    });
    state.phase = GamePhase::GameOver;
}
