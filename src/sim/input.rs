//! Keystroke resolver
//!
//! Maps a single letter to target acquisition or target progress. At most
//! one word is locked at a time; the lock is only released when the word is
//! destroyed or leaves the field.

use super::state::{GameEvent, GamePhase, GameState};

/// Resolve one raw key value from the host (e.g. `KeyboardEvent::key`).
///
/// Case-insensitive; anything but a single a-z letter is silently ignored.
pub fn resolve_key(state: &mut GameState, key: &str) -> Vec<GameEvent> {
    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Vec::new();
    };
    if !c.is_ascii_alphabetic() {
        return Vec::new();
    }
    resolve_letter(state, c.to_ascii_lowercase())
}

/// Resolve one folded letter against the current target, or acquire one.
pub fn resolve_letter(state: &mut GameState, letter: char) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    if let Some(target_id) = state.target_id {
        let Some(target) = state.word_mut(target_id) else {
            // The target left the field (e.g. crossed the line this frame).
            // Drop the stale lock; no re-acquisition within this keypress.
            state.target_id = None;
            return events;
        };

        if target.next_char() == Some(letter) {
            target.typed_index += 1;
            events.push(GameEvent::Shot);
            if target.is_complete() {
                state.destroy_word(target_id);
                events.push(GameEvent::WordDestroyed);
            }
        } else {
            events.push(GameEvent::Mismatch);
        }
        return events;
    }

    // No lock: acquire the candidate closest to the danger line.
    let candidate = state
        .words
        .iter_mut()
        .filter(|w| w.text.starts_with(letter))
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let Some(word) = candidate else {
        events.push(GameEvent::Mismatch);
        return events;
    };

    word.is_target = true;
    word.typed_index = 1; // the pressed letter counts as typed
    let id = word.id;
    state.target_id = Some(id);
    events.push(GameEvent::Shot);

    // Single-letter words die on acquisition, same keypress.
    if state.word(id).is_some_and(|w| w.is_complete()) {
        state.destroy_word(id);
        events.push(GameEvent::WordDestroyed);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::WordEntity;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42);
        state.start();
        state
    }

    fn push_word(state: &mut GameState, text: &str, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.words.push(WordEntity {
            id,
            text: text.into(),
            pos: Vec2::new(50.0, y),
            speed: 0.05,
            typed_index: 0,
            is_target: false,
        });
        id
    }

    #[test]
    fn test_acquires_deepest_candidate() {
        let mut state = playing_state();
        let shallow = push_word(&mut state, "sky", 20.0);
        let deep = push_word(&mut state, "sun", 60.0);

        let events = resolve_key(&mut state, "s");
        assert_eq!(events, vec![GameEvent::Shot]);
        assert_eq!(state.target_id, Some(deep));

        let word = state.word(deep).unwrap();
        assert!(word.is_target);
        assert_eq!(word.typed_index, 1);
        assert!(!state.word(shallow).unwrap().is_target);
    }

    #[test]
    fn test_no_candidate_is_a_mismatch() {
        let mut state = playing_state();
        push_word(&mut state, "sky", 20.0);

        let events = resolve_key(&mut state, "z");
        assert_eq!(events, vec![GameEvent::Mismatch]);
        assert!(state.target_id.is_none());
        assert_eq!(state.word(1).unwrap().typed_index, 0);
    }

    #[test]
    fn test_locked_target_progress() {
        let mut state = playing_state();
        let id = push_word(&mut state, "orbit", 30.0);
        state.words[0].is_target = true;
        state.words[0].typed_index = 2;
        state.target_id = Some(id);

        let events = resolve_key(&mut state, "b");
        assert_eq!(events, vec![GameEvent::Shot]);
        assert_eq!(state.word(id).unwrap().typed_index, 3);
        assert_eq!(state.target_id, Some(id));
    }

    #[test]
    fn test_locked_target_mismatch_mutates_nothing() {
        let mut state = playing_state();
        let id = push_word(&mut state, "orbit", 30.0);
        push_word(&mut state, "xenon", 50.0);
        state.words[0].is_target = true;
        state.words[0].typed_index = 2;
        state.target_id = Some(id);

        // 'x' starts another live word, but the lock wins - mismatch.
        let events = resolve_key(&mut state, "x");
        assert_eq!(events, vec![GameEvent::Mismatch]);
        assert_eq!(state.word(id).unwrap().typed_index, 2);
        assert_eq!(state.target_id, Some(id));
    }

    #[test]
    fn test_completion_destroys_and_scores() {
        let mut state = playing_state();
        let id = push_word(&mut state, "sun", 30.0);
        state.words[0].is_target = true;
        state.words[0].typed_index = 2;
        state.target_id = Some(id);

        let events = resolve_key(&mut state, "n");
        assert_eq!(events, vec![GameEvent::Shot, GameEvent::WordDestroyed]);
        assert_eq!(state.score, 1);
        assert!(state.words.is_empty());
        assert!(state.target_id.is_none());
    }

    #[test]
    fn test_single_letter_word_destroyed_on_acquisition() {
        let mut state = playing_state();
        push_word(&mut state, "a", 30.0);

        let events = resolve_key(&mut state, "a");
        assert_eq!(events, vec![GameEvent::Shot, GameEvent::WordDestroyed]);
        assert_eq!(state.score, 1);
        assert!(state.words.is_empty());
        assert!(state.target_id.is_none());
    }

    #[test]
    fn test_stale_lock_cleared_without_reacquisition() {
        let mut state = playing_state();
        push_word(&mut state, "sky", 20.0);
        // Lock references a word that already left the field.
        state.target_id = Some(999);

        let events = resolve_key(&mut state, "s");
        assert!(events.is_empty());
        assert!(state.target_id.is_none());
        // The live 's' word was not acquired by the same keypress.
        assert_eq!(state.words[0].typed_index, 0);
        assert!(!state.words[0].is_target);
    }

    #[test]
    fn test_non_letter_keys_ignored() {
        let mut state = playing_state();
        push_word(&mut state, "sky", 20.0);

        for key in ["1", " ", "Escape", "Shift", "ArrowUp", "ß", ""] {
            let events = resolve_key(&mut state, key);
            assert!(events.is_empty(), "key {key:?} should be ignored");
        }
        assert!(state.target_id.is_none());
    }

    #[test]
    fn test_uppercase_folds() {
        let mut state = playing_state();
        let id = push_word(&mut state, "sky", 20.0);

        let events = resolve_key(&mut state, "S");
        assert_eq!(events, vec![GameEvent::Shot]);
        assert_eq!(state.target_id, Some(id));
    }

    #[test]
    fn test_ignored_when_not_playing() {
        let mut state = GameState::new(42);
        push_word(&mut state, "sky", 20.0);
        assert!(resolve_key(&mut state, "s").is_empty());

        state.phase = GamePhase::GameOver;
        assert!(resolve_key(&mut state, "s").is_empty());
    }
}
