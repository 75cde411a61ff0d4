//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Driven solely by elapsed time and keystrokes fed in by the host
//! - No rendering or platform dependencies

pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod words;

pub use input::resolve_key;
pub use spawn::spawn_word;
pub use state::{GameEvent, GamePhase, GameState, WordEntity};
pub use tick::tick;
pub use words::WORD_LIST;
