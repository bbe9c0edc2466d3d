//! Drawable primitives for the host render surface
//!
//! The core never draws. Each frame it hands the host a flat list of
//! rectangles and text runs in playfield pixels; the host paints them in
//! order (obstacles, avatar, HUD).

use serde::{Deserialize, Serialize};

use crate::consts::{HUD_COLOR, HUD_INSET, HUD_TEXT_SIZE};
use crate::sim::{Avatar, Obstacle, Run};

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
        }
    }
}

/// What to paint inside a drawable's box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// Solid rectangle in a CSS color
    Rect { color: String },
    /// Text drawn from the top of the box, `height` px tall
    Text { text: String, color: String },
}

/// One primitive to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Fill,
    pub align: Align,
}

impl Avatar {
    pub fn drawable(&self) -> Drawable {
        Drawable {
            x: self.pos.x,
            y: self.pos.y,
            width: self.width,
            height: self.height,
            fill: Fill::Text {
                text: self.glyph.clone(),
                color: HUD_COLOR.to_string(),
            },
            align: Align::Left,
        }
    }
}

impl Obstacle {
    pub fn drawable(&self) -> Drawable {
        Drawable {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
            fill: Fill::Rect {
                color: self.color.clone(),
            },
            align: Align::Left,
        }
    }
}

/// A "Label: value" HUD line
fn scoreboard(label: &str, value: u64, x: f32, align: Align) -> Drawable {
    Drawable {
        x,
        y: HUD_INSET,
        width: HUD_TEXT_SIZE,
        height: HUD_TEXT_SIZE,
        fill: Fill::Text {
            text: format!("{label}: {value}"),
            color: HUD_COLOR.to_string(),
        },
        align,
    }
}

/// Everything to draw for the current state of `run`
pub fn frame(run: &Run) -> Vec<Drawable> {
    let mut out = Vec::with_capacity(run.obstacles.len() + 3);
    out.extend(run.obstacles.iter().map(Obstacle::drawable));
    out.push(run.avatar.drawable());
    out.push(scoreboard("Score", run.score.score(), HUD_INSET, Align::Left));
    out.push(scoreboard(
        "High Score",
        run.score.current_high_score(),
        run.playfield.width - HUD_INSET,
        Align::Right,
    ));
    out
}
