//! Word spawner
//!
//! Creates one falling word at a randomized horizontal position with
//! difficulty-scaled speed, avoiding duplicate on-screen text via bounded
//! retry.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, WordEntity};
use super::words::WORD_LIST;
use crate::consts::*;

/// Spawn a new word from the catalog and append it to the live set.
pub fn spawn_word(state: &mut GameState) {
    spawn_from(state, WORD_LIST);
}

/// Spawn from an explicit catalog. The catalog must be non-empty.
pub(crate) fn spawn_from(state: &mut GameState, catalog: &[&str]) {
    let mut candidate = catalog[state.rng.random_range(0..catalog.len())];

    // Best-effort de-dup against on-screen text; accept a duplicate after
    // the retry budget runs out.
    let mut attempts = 0;
    while attempts < SPAWN_DEDUP_ATTEMPTS && state.words.iter().any(|w| w.text == candidate) {
        candidate = catalog[state.rng.random_range(0..catalog.len())];
        attempts += 1;
    }

    let speed_multiplier = 1.0 + state.level() as f32 * LEVEL_SPEED_BONUS;
    let x = state.rng.random_range(FIELD_X_MIN..FIELD_X_MAX);
    let jitter = state.rng.random_range(0.0..SPEED_JITTER);

    let id = state.next_entity_id();
    state.words.push(WordEntity {
        id,
        text: candidate.to_string(),
        pos: Vec2::new(x, SPAWN_Y),
        speed: (GAME_SPEED_BASE + jitter) * speed_multiplier,
        typed_index: 0,
        is_target: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    #[test]
    fn test_spawn_appends_fresh_word() {
        let mut state = GameState::new(7);
        spawn_word(&mut state);
        assert_eq!(state.words.len(), 1);

        let word = &state.words[0];
        assert!(word.pos.x >= FIELD_X_MIN && word.pos.x <= FIELD_X_MAX);
        assert_eq!(word.pos.y, SPAWN_Y);
        assert!(word.speed > 0.0);
        assert_eq!(word.typed_index, 0);
        assert!(!word.is_target);
        assert!(WORD_LIST.contains(&word.text.as_str()));
    }

    #[test]
    fn test_spawn_avoids_onscreen_duplicates() {
        let catalog = [
            "comet", "nova", "pulsar", "quasar", "nebula", "photon", "gluon", "muon", "boson",
            "quark",
        ];
        for seed in 0..16 {
            let mut state = GameState::new(seed);
            spawn_from(&mut state, &["comet"]);
            // "comet" is on screen; a 1-in-10 duplicate draw retried 10 times
            // leaves no realistic path to picking it again.
            spawn_from(&mut state, &catalog);
            assert_ne!(state.words[1].text, "comet");
        }
    }

    #[test]
    fn test_spawn_accepts_duplicate_after_retries() {
        let mut state = GameState::new(7);
        spawn_from(&mut state, &["comet"]);
        spawn_from(&mut state, &["comet"]);
        assert_eq!(state.words.len(), 2);
        assert_eq!(state.words[0].text, state.words[1].text);
    }

    #[test]
    fn test_spawn_speed_scales_with_level() {
        let mut slow = GameState::new(7);
        let mut fast = GameState::new(7);
        fast.score = DIFFICULTY_SCALE * 5; // level 5: +50% speed

        spawn_word(&mut slow);
        spawn_word(&mut fast);

        // Same seed, same draws: the only difference is the multiplier.
        let ratio = fast.words[0].speed / slow.words[0].speed;
        assert!((ratio - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_deterministic_per_seed() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for _ in 0..5 {
            spawn_word(&mut a);
            spawn_word(&mut b);
        }
        for (wa, wb) in a.words.iter().zip(&b.words) {
            assert_eq!(wa.text, wb.text);
            assert_eq!(wa.pos, wb.pos);
            assert_eq!(wa.speed, wb.speed);
        }
    }
}
