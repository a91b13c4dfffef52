//! Player audio preferences
//!
//! Owned by the game for the whole process; round start and end never touch it.

use serde::{Deserialize, Serialize};

/// Audio mute toggles set from the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Menu music silenced
    pub background_muted: bool,
    /// Click/hit sound effects silenced
    pub effects_muted: bool,
}

impl Settings {
    /// Flip the background music toggle, returning the new value
    pub fn toggle_background(&mut self) -> bool {
        self.background_muted = !self.background_muted;
        self.background_muted
    }

    /// Flip the sound effect toggle, returning the new value
    pub fn toggle_effects(&mut self) -> bool {
        self.effects_muted = !self.effects_muted;
        self.effects_muted
    }

    /// Music volume the playback layer should apply (0.0 - 1.0)
    pub fn music_volume(&self) -> f32 {
        if self.background_muted { 0.0 } else { 1.0 }
    }

    /// Whether one-shot effects should be played
    pub fn effects_enabled(&self) -> bool {
        !self.effects_muted
    }
}
