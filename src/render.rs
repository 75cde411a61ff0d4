//! Render projection
//!
//! Pure mapping from simulation state to what the host paints each frame.
//! Nothing here feeds back into the core.

use crate::sim::{GamePhase, GameState};

/// One word as the painter sees it
#[derive(Debug, Clone, PartialEq)]
pub struct WordSprite {
    pub id: u32,
    pub text: String,
    /// Horizontal position, percent of field width
    pub x: f32,
    /// Vertical position, percent of field height
    pub y: f32,
    /// Leading characters already typed (highlighted by the painter)
    pub typed_index: usize,
    pub is_target: bool,
}

/// Immutable per-frame snapshot of everything the painter needs
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub words: Vec<WordSprite>,
    pub target_id: Option<u32>,
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
}

impl FrameSnapshot {
    /// Project the current session state
    pub fn capture(state: &GameState) -> Self {
        Self {
            words: state
                .words
                .iter()
                .map(|w| WordSprite {
                    id: w.id,
                    text: w.text.clone(),
                    x: w.pos.x,
                    y: w.pos.y,
                    typed_index: w.typed_index,
                    is_target: w.is_target,
                })
                .collect(),
            target_id: state.target_id,
            score: state.score,
            lives: state.lives,
            phase: state.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WordEntity;
    use glam::Vec2;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(42);
        state.start();
        let id = state.next_entity_id();
        state.words.push(WordEntity {
            id,
            text: "comet".into(),
            pos: Vec2::new(33.0, 12.5),
            speed: 0.06,
            typed_index: 2,
            is_target: true,
        });
        state.target_id = Some(id);
        state.score = 4;

        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.lives, state.lives);
        assert_eq!(snap.target_id, Some(id));
        assert_eq!(snap.words.len(), 1);

        let sprite = &snap.words[0];
        assert_eq!(sprite.text, "comet");
        assert_eq!((sprite.x, sprite.y), (33.0, 12.5));
        assert_eq!(sprite.typed_index, 2);
        assert!(sprite.is_target);
    }

    #[test]
    fn test_snapshot_is_detached_from_state() {
        let mut state = GameState::new(42);
        state.start();
        let snap = FrameSnapshot::capture(&state);
        state.score = 99;
        assert_eq!(snap.score, 0);
    }
}
