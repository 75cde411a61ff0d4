//! Game state and core simulation types
//!
//! One `GameState` is one play session. A reset never reuses a session: the
//! host constructs a fresh state and discards the old one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the start screen
    Idle,
    /// Active gameplay - the only phase in which tick/input run
    Playing,
    /// Run ended; terminal until the host builds a new session
    GameOver,
}

/// A falling word entity
#[derive(Debug, Clone)]
pub struct WordEntity {
    pub id: u32,
    pub text: String,
    /// Position in playfield percent: x in [10, 90], y grows downward
    pub pos: Vec2,
    /// Fall speed in percent per ~16 ms frame
    pub speed: f32,
    /// How many leading characters have been typed (<= text.len())
    pub typed_index: usize,
    /// Whether this word is the locked target
    pub is_target: bool,
}

impl WordEntity {
    /// The word has been typed to completion and must be removed
    pub fn is_complete(&self) -> bool {
        self.typed_index >= self.text.len()
    }

    /// Next character the player has to type, if any
    pub fn next_char(&self) -> Option<char> {
        self.text.chars().nth(self.typed_index)
    }
}

/// Signals emitted by the simulation for the host's audio/feedback sinks.
///
/// Fire-and-forget: the simulation never observes these again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A keystroke hit its letter
    Shot,
    /// A word was fully typed and removed
    WordDestroyed,
    /// A keystroke matched nothing
    Mismatch,
    /// A word crossed the danger line
    LifeLost,
    /// Lives exhausted
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG (spawner randomness)
    pub rng: Pcg32,
    /// Words destroyed this session
    pub score: u32,
    /// Remaining lives
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Live falling words
    pub words: Vec<WordEntity>,
    /// Id of the locked target, if any; always references a live word
    pub target_id: Option<u32>,
    /// Time accumulated since the last spawn (ms)
    pub spawn_timer_ms: f32,
    /// Next entity id
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: INITIAL_LIVES,
            phase: GamePhase::Idle,
            words: Vec::new(),
            target_id: None,
            spawn_timer_ms: 0.0,
            next_id: 1,
        }
    }

    /// Begin play. Meaningful only from `Idle`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Playing;
        }
    }

    /// Difficulty level derived from score
    pub fn level(&self) -> u32 {
        self.score / DIFFICULTY_SCALE
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a live word by id
    pub fn word(&self, id: u32) -> Option<&WordEntity> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Look up a live word by id, mutably
    pub fn word_mut(&mut self, id: u32) -> Option<&mut WordEntity> {
        self.words.iter_mut().find(|w| w.id == id)
    }

    /// Remove a fully-typed word, bump the score and unlock the target
    pub fn destroy_word(&mut self, id: u32) {
        self.words.retain(|w| w.id != id);
        self.score += 1;
        if self.target_id == Some(id) {
            self.target_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert!(state.words.is_empty());
        assert!(state.target_id.is_none());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(42);
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::GameOver;
        state.start();
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(42);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_destroy_word_scores_and_unlocks() {
        let mut state = GameState::new(42);
        let id = state.next_entity_id();
        state.words.push(WordEntity {
            id,
            text: "nova".into(),
            pos: Vec2::new(50.0, 40.0),
            speed: 0.05,
            typed_index: 4,
            is_target: true,
        });
        state.target_id = Some(id);

        state.destroy_word(id);
        assert_eq!(state.score, 1);
        assert!(state.words.is_empty());
        assert!(state.target_id.is_none());
    }
}
