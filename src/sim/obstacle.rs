//! Scrolling obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Obstacle placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the floor, jump over it
    #[default]
    Ground,
    /// Hovers at head height, duck under it
    Floating,
}

/// A static hazard moving left at the current game speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (negative = leftward)
    pub dx: f32,
    /// CSS color string used when drawing
    pub color: String,
}

impl Obstacle {
    /// Move left by the current game speed
    pub fn update(&mut self, game_speed: f32) {
        self.dx = -game_speed;
        self.pos.x += self.dx;
    }

    /// Fully past the left edge of the playfield
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}
