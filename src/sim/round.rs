//! Score and countdown for one timed round

use serde::{Deserialize, Serialize};

use crate::tuning::{Difficulty, DifficultyProfile};

/// Final numbers shown on the game-over screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub score: u32,
    pub difficulty: Difficulty,
    pub label: String,
}

/// One round under a fixed difficulty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub score: u32,
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    /// Time the round began
    pub start_time: f64,
}

impl RoundState {
    /// Begin a round: score 0, clock starting at `now`
    pub fn start(difficulty: Difficulty, profile: DifficultyProfile, now: f64) -> Self {
        Self {
            score: 0,
            difficulty,
            profile,
            start_time: now,
        }
    }

    /// Round length in seconds
    pub fn time_limit(&self) -> f64 {
        self.profile.round_duration_secs as f64
    }

    /// Seconds left; zero or negative once the round is over
    pub fn remaining_time(&self, now: f64) -> f64 {
        self.time_limit() - (now - self.start_time)
    }

    pub fn is_over(&self, now: f64) -> bool {
        self.remaining_time(now) <= 0.0
    }

    pub fn record_hit(&mut self) {
        self.score += 1;
    }

    pub fn result(&self) -> RoundResult {
        RoundResult {
            score: self.score,
            difficulty: self.difficulty,
            label: self.profile.label.clone(),
        }
    }
}
