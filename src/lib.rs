//! Emoji Dash - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `render`: Converts a run into drawable primitives for the host surface
//! - `persistence`: Key-value storage and the persisted high score
//! - `platform`: Browser-specific glue (LocalStorage)
//! - `settings`: Data-driven game tuning
//! - `game`: Screen flow around runs (menu, avatar pick, results)

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::{Game, Screen};
pub use highscores::HighScore;
pub use settings::Tuning;

/// Game configuration constants
///
/// Everything is tuned per simulated frame at ~60 Hz. There is no
/// delta-time scaling: one `tick` call is one frame.
pub mod consts {
    /// Downward acceleration applied to an airborne avatar (px/frame²)
    pub const GRAVITY: f32 = 1.0;
    /// Game speed at run start (px/frame)
    pub const GAME_SPEED: f32 = 3.0;
    /// Speed gained every survived frame
    pub const SPEED_INCREMENT: f32 = 0.003;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 25.0;
    pub const AVATAR_SIZE: f32 = 40.0;
    pub const JUMP_FORCE: f32 = 15.0;
    /// Maximum number of charge ticks a held jump can accumulate
    pub const MAX_JUMP_CHARGE: u32 = 25;
    /// Divisor turning charge ticks into extra upward velocity
    pub const JUMP_CHARGE_DIVISOR: f32 = 50.0;
    pub const DEFAULT_AVATAR: &str = "😀";

    /// Spawner defaults (frames)
    pub const SPAWN_INTERVAL: u32 = 200;
    pub const MIN_SPAWN_INTERVAL: u32 = 60;
    /// Frames shaved off the spawn interval per unit of game speed
    pub const SPAWN_SPEED_FACTOR: f32 = 8.0;

    /// Obstacle size range (inclusive, px)
    pub const OBSTACLE_MIN_SIZE: u32 = 20;
    pub const OBSTACLE_MAX_SIZE: u32 = 70;
    /// Floating obstacles hover this far below the avatar's full height
    pub const FLOATING_CLEARANCE: f32 = 10.0;

    /// HUD layout
    pub const HUD_INSET: f32 = 25.0;
    pub const HUD_TEXT_SIZE: f32 = 20.0;
    pub const HUD_COLOR: &str = "#333333";
}
