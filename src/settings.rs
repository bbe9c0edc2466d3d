//! Game tuning
//!
//! Physics and spawn constants. Defaults come from `consts`; a host may pass
//! its own values (native builds read `EMOJI_DASH_TUNING` as JSON). Tuning is
//! never written to storage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    /// Starting game speed
    pub game_speed: f32,
    /// Speed gained per survived frame (linear speed-up)
    pub speed_increment: f32,

    // === Avatar ===
    pub avatar_x: f32,
    pub avatar_size: f32,
    pub jump_force: f32,
    pub max_jump_charge: u32,

    // === Spawning ===
    /// Base frames between spawns
    pub spawn_interval: u32,
    /// Frames removed from the interval per unit of speed
    pub spawn_speed_factor: f32,
    pub obstacle_min_size: u32,
    pub obstacle_max_size: u32,
    /// Probability (0.0 - 1.0) that an obstacle floats at head height
    pub floating_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            game_speed: GAME_SPEED,
            speed_increment: SPEED_INCREMENT,

            avatar_x: AVATAR_X,
            avatar_size: AVATAR_SIZE,
            jump_force: JUMP_FORCE,
            max_jump_charge: MAX_JUMP_CHARGE,

            spawn_interval: SPAWN_INTERVAL,
            spawn_speed_factor: SPAWN_SPEED_FACTOR,
            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            // Ground obstacles only
            floating_chance: 0.0,
        }
    }
}

impl Tuning {
    /// Parse host-supplied tuning JSON; unknown fields are ignored and
    /// missing ones default. The result is sanitized.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(tuning) => Some(tuning.sanitized()),
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {e}");
                None
            }
        }
    }

    /// Replace values the simulation can't run with by their defaults
    ///
    /// Speeds, sizes and gravity must be positive, rates non-negative, the
    /// spawn interval at least one frame and the size range non-empty.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        let non_negative =
            |v: f32, fallback: f32| if v.is_finite() && v >= 0.0 { v } else { fallback };

        let obstacle_min_size = self.obstacle_min_size.max(1);
        let sanitized = Self {
            gravity: positive(self.gravity, d.gravity),
            game_speed: positive(self.game_speed, d.game_speed),
            speed_increment: non_negative(self.speed_increment, d.speed_increment),

            avatar_x: non_negative(self.avatar_x, d.avatar_x),
            avatar_size: positive(self.avatar_size, d.avatar_size),
            jump_force: non_negative(self.jump_force, d.jump_force),
            max_jump_charge: self.max_jump_charge,

            spawn_interval: self.spawn_interval.max(1),
            spawn_speed_factor: non_negative(self.spawn_speed_factor, d.spawn_speed_factor),
            obstacle_min_size,
            obstacle_max_size: self.obstacle_max_size.max(obstacle_min_size),
            floating_chance: if self.floating_chance.is_finite() {
                self.floating_chance.clamp(0.0, 1.0)
            } else {
                d.floating_chance
            },
        };

        if sanitized != self {
            log::warn!("Tuning had out-of-range values; using {sanitized:?}");
        }
        sanitized
    }
}
