//! Per-frame simulation step
//!
//! Advances all falling words by the elapsed wall-clock time, spawns new
//! ones on a difficulty-scaled cadence and resolves danger-line crossings.

use super::spawn::spawn_word;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the session by one frame of `elapsed_ms` wall-clock time.
///
/// The host passes 0 for the first frame of a session so there is no
/// startup jump. Only runs while `Playing`; an elapsed time of 0 moves
/// nothing and removes nothing.
pub fn tick(state: &mut GameState, elapsed_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    // Spawn gating: the interval shrinks 100 ms per level, floored at 500 ms.
    let spawn_interval =
        (SPAWN_RATE_BASE_MS - state.level() as f32 * SPAWN_RATE_STEP_MS).max(SPAWN_RATE_MIN_MS);
    state.spawn_timer_ms += elapsed_ms;
    if state.spawn_timer_ms > spawn_interval {
        spawn_word(state);
        state.spawn_timer_ms = 0.0;
    }

    // Advance positions. Speeds are percent per ~16 ms frame, normalized to
    // real elapsed time rather than assuming a fixed frame rate.
    let frames = elapsed_ms / FRAME_MS;
    for word in &mut state.words {
        word.pos.y += word.speed * frames;
    }

    // Remove every word past the danger line in a single pass. One life is
    // lost per frame in which at least one word crossed, not per word.
    let before = state.words.len();
    state.words.retain(|w| w.pos.y <= DANGER_LINE);
    let crossed = state.words.len() < before;

    if crossed {
        if let Some(target_id) = state.target_id {
            if state.word(target_id).is_none() {
                state.target_id = None;
            }
        }

        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
        }
    }

    events
}
