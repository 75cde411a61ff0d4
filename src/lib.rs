//! AstroType - a falling-words typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling words, input resolution)
//! - `render`: Pure projection of simulation state for the DOM painter
//! - `audio`: Procedural Web Audio sound effects (wasm only)
//! - `settings`: Player preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use render::FrameSnapshot;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Base fall speed, in vertical percent per ~16 ms frame
    pub const GAME_SPEED_BASE: f32 = 0.05;
    /// Random per-word speed jitter added on top of the base speed
    pub const SPEED_JITTER: f32 = 0.02;
    /// Speed multiplier gained per difficulty level (+10%)
    pub const LEVEL_SPEED_BONUS: f32 = 0.1;

    /// Base interval between spawns (ms)
    pub const SPAWN_RATE_BASE_MS: f32 = 2000.0;
    /// Spawn interval reduction per difficulty level (ms)
    pub const SPAWN_RATE_STEP_MS: f32 = 100.0;
    /// Spawn interval floor (ms)
    pub const SPAWN_RATE_MIN_MS: f32 = 500.0;
    /// Words scored per difficulty level
    pub const DIFFICULTY_SCALE: u32 = 10;

    /// Horizontal spawn band, in percent of the playfield width
    pub const FIELD_X_MIN: f32 = 10.0;
    pub const FIELD_X_MAX: f32 = 90.0;
    /// Vertical spawn position - slightly above the visible field
    pub const SPAWN_Y: f32 = -10.0;
    /// The danger line - words past this vertical percent hit the player
    pub const DANGER_LINE: f32 = 90.0;

    /// Starting lives
    pub const INITIAL_LIVES: u8 = 3;

    /// Reference frame duration the fall speeds are defined against (ms)
    pub const FRAME_MS: f32 = 16.0;

    /// Bounded retries when avoiding duplicate on-screen words
    pub const SPAWN_DEDUP_ATTEMPTS: u32 = 10;
}
