//! Survival score and the running high score

use serde::{Deserialize, Serialize};

/// Score for the current run plus the best seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    high_score: u64,
}

impl ScoreTracker {
    /// Start a run with the high score read from storage
    pub fn new(stored_high: u64) -> Self {
        Self {
            score: 0,
            high_score: stored_high,
        }
    }

    /// One survived frame
    pub fn tick(&mut self) {
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
    }

    /// Frames survived this run
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn current_high_score(&self) -> u64 {
        self.score.max(self.high_score)
    }
}
