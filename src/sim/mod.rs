//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use collision::{Aabb, collides};
pub use input::{Control, InputState};
pub use obstacle::{Obstacle, ObstacleKind};
pub use score::ScoreTracker;
pub use spawner::{Spawner, spawn_interval};
pub use state::{GameEvent, Playfield, Run, RunPhase};
pub use tick::{TickInput, tick};
