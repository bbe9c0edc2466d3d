//! The player's avatar and its jump physics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::tick::TickInput;
use crate::consts::JUMP_CHARGE_DIVISOR;

/// The player-controlled runner
///
/// `pos` is the top-left corner in playfield pixels (y grows downward).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Emoji (or any text) drawn for the avatar
    pub glyph: String,
    pub pos: Vec2,
    /// Vertical velocity (negative = up)
    pub dy: f32,
    pub width: f32,
    /// Current height (halved while ducking)
    pub height: f32,
    /// Height when standing
    pub base_height: f32,
    pub jump_force: f32,
    /// Cap on charge ticks for a held jump
    pub max_jump_charge: u32,
    /// Ticks the jump has been held (0 = not jumping)
    pub jump_charge: u32,
    pub grounded: bool,
}

impl Avatar {
    pub fn new(glyph: impl Into<String>, x: f32, size: f32, jump_force: f32, max_jump_charge: u32) -> Self {
        Self {
            glyph: glyph.into(),
            pos: Vec2::new(x, 0.0),
            dy: 0.0,
            width: size,
            height: size,
            base_height: size,
            jump_force,
            max_jump_charge,
            jump_charge: 0,
            grounded: false,
        }
    }

    /// Apply held-jump input to velocity
    fn jump(&mut self) {
        if self.grounded && self.jump_charge == 0 {
            self.jump_charge = 1;
            self.dy = -self.jump_force;
        } else if self.jump_charge > 0 && self.jump_charge < self.max_jump_charge {
            self.jump_charge += 1;
            self.dy = -self.jump_force - self.jump_charge as f32 / JUMP_CHARGE_DIVISOR;
        }
    }

    /// Advance one frame
    ///
    /// Gravity is only applied while airborne; a grounded avatar is snapped
    /// back onto the floor instead, so it never drifts below it.
    pub fn update(&mut self, input: &TickInput, gravity: f32, playfield_height: f32) {
        self.height = if input.duck {
            self.base_height / 2.0
        } else {
            self.base_height
        };

        if input.jump {
            self.jump();
        } else {
            self.jump_charge = 0;
        }

        self.pos.y += self.dy;

        if self.pos.y + self.height < playfield_height {
            self.dy += gravity;
            self.grounded = false;
        } else {
            self.dy = 0.0;
            self.grounded = true;
            self.pos.y = playfield_height - self.height;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }
}
