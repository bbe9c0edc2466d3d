//! Run state and core simulation types

use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::obstacle::Obstacle;
use super::score::ScoreTracker;
use super::spawner::Spawner;
use crate::settings::Tuning;

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Built but not yet ticking
    NotStarted,
    /// Active gameplay
    Running,
    /// Collided. Terminal; build a new `Run` to play again
    Ended,
}

/// Notifications emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameOver { final_score: u64, high_score: u64 },
}

/// Size of the drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One play session, from avatar pick to collision
#[derive(Debug, Clone)]
pub struct Run {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: RunPhase,
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub avatar: Avatar,
    /// Live obstacles (order irrelevant)
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub score: ScoreTracker,
    /// Obstacle speed (px/frame), never decreases during a run
    pub game_speed: f32,
    /// Simulated frames so far
    pub time_ticks: u64,
    next_id: u32,
}

impl Run {
    /// Build a run with fresh defaults from `tuning`
    ///
    /// Out-of-range tuning values are replaced by defaults first.
    pub fn new(
        tuning: &Tuning,
        glyph: impl Into<String>,
        playfield: Playfield,
        stored_high: u64,
        seed: u64,
    ) -> Self {
        let tuning = tuning.clone().sanitized();
        let avatar = Avatar::new(
            glyph,
            tuning.avatar_x,
            tuning.avatar_size,
            tuning.jump_force,
            tuning.max_jump_charge,
        );
        Self {
            seed,
            phase: RunPhase::NotStarted,
            playfield,
            avatar,
            obstacles: Vec::new(),
            spawner: Spawner::new(&tuning, seed),
            score: ScoreTracker::new(stored_high),
            game_speed: tuning.game_speed,
            tuning,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// NotStarted -> Running. No effect in any other phase.
    pub fn start(&mut self) {
        if self.phase == RunPhase::NotStarted {
            log::info!(
                "Run started (avatar {}, seed {}, high score {})",
                self.avatar.glyph,
                self.seed,
                self.score.current_high_score()
            );
            self.phase = RunPhase::Running;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Track the host canvas size
    pub fn set_playfield(&mut self, playfield: Playfield) {
        self.playfield = playfield;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Running -> Ended, returning the game-over event
    pub(super) fn end(&mut self) -> GameEvent {
        self.phase = RunPhase::Ended;
        let event = GameEvent::GameOver {
            final_score: self.score.score(),
            high_score: self.score.current_high_score(),
        };
        log::info!(
            "Run over after {} frames: score {}, high score {}",
            self.time_ticks,
            self.score.score(),
            self.score.current_high_score()
        );
        event
    }
}
