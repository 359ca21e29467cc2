//! Cat and Mouse headless driver
//!
//! Stands in for a real rendering front end: loads settings, seeds a
//! session, feeds the simulation a monotonic millisecond clock and a simple
//! chase AI playing the cat, and logs the round's outcome. Useful for
//! exercising the core and for tuning settings files. An optional first
//! argument overrides the configured difficulty (easy/medium/hard).

use std::path::Path;
use std::time::{Duration, Instant};

use cat_mouse::config::{Config, Difficulty};
use cat_mouse::highscores::HighScores;
use cat_mouse::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

const SETTINGS_PATH: &str = "settings.json";
const HIGH_SCORES_PATH: &str = "highscores.json";

fn main() {
    env_logger::init();

    let mut config = Config::load(Path::new(SETTINGS_PATH));
    if let Some(arg) = std::env::args().nth(1) {
        match Difficulty::from_str(&arg) {
            Some(d) => config.difficulty = d,
            None => log::warn!(
                "unknown difficulty '{arg}'; keeping {}",
                config.difficulty.as_str()
            ),
        }
    }
    let wait = Duration::from_millis(config.effective_wait_time_ms());

    let seed = rand::random::<u64>();
    log::info!(
        "starting round: {}x{}, difficulty {}, refresh {}, seed {seed}",
        config.screen_width,
        config.screen_height,
        config.difficulty.as_str(),
        config.refresh.as_str()
    );

    let mut state = GameState::new(config, seed);
    state.high_scores = HighScores::load(Path::new(HIGH_SCORES_PATH));

    let clock = Instant::now();
    let start = TickInput {
        start: true,
        ..TickInput::default()
    };
    tick(&mut state, &start, 0);

    while state.phase == GamePhase::Playing {
        let input = chase_input(&state);
        let now_ms = clock.elapsed().as_millis() as u64;
        tick(&mut state, &input, now_ms);

        for event in &state.events {
            match *event {
                GameEvent::MouseCaught { mouse_id } => {
                    match state.high_scores.potential_rank(state.score) {
                        Some(rank) => log::debug!(
                            "caught mouse {mouse_id}, score {} (would rank #{rank})",
                            state.score
                        ),
                        None => log::debug!("caught mouse {mouse_id}, score {}", state.score),
                    }
                }
                GameEvent::RoundOver { score, best } => {
                    let note = if best { " (new best!)" } else { "" };
                    log::info!("round over: score {score}{note}");
                }
            }
        }

        std::thread::sleep(wait);
    }

    if let Some(top) = state.high_scores.top_score() {
        log::info!("top score: {top}");
    }
    if !state.high_scores.is_empty() {
        state.high_scores.save(Path::new(HIGH_SCORES_PATH));
    }
}

/// Steer the cat toward the nearest live mouse.
fn chase_input(state: &GameState) -> TickInput {
    let cat = state.cat.center();
    let target = state
        .spawner
        .mice()
        .iter()
        .min_by_key(|m| {
            let d = (m.center() - cat).as_i64vec2();
            d.x * d.x + d.y * d.y
        })
        .map(|m| m.center());

    let mut input = TickInput::default();
    if let Some(t) = target {
        input.left = t.x < cat.x;
        input.right = t.x > cat.x;
        input.up = t.y < cat.y;
        input.down = t.y > cat.y;
    }
    input
}
