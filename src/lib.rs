//! Capy Whack - a timed whack-a-capybara arcade game
//!
//! Core modules:
//! - `sim`: Round simulation (slots, spawning, timer, screen state machine)
//! - `ui`: Static screen geometry and click routing
//! - `settings`: Audio mute toggles shared across rounds
//! - `tuning`: Data-driven difficulty profiles
//! - `audio`: Maps game events to audio cues for the playback layer

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::{Difficulty, DifficultyProfile, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Simulation tick rate the spawn chances are balanced for
    pub const TICK_HZ: u32 = 60;
    /// Fixed timestep in seconds
    pub const SIM_DT: f64 = 1.0 / TICK_HZ as f64;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 1024.0;

    /// Number of target slots on the playfield
    pub const NUM_SLOTS: usize = 9;
    /// Hit radius around each slot centre
    pub const SLOT_HIT_RADIUS: f32 = 115.0;
    /// Sprite anchor offset baked into the slot centres
    const SLOT_OFFSET: f32 = 115.0;

    /// Slot centres, index-stable
    pub const SLOT_POSITIONS: [Vec2; NUM_SLOTS] = [
        Vec2::new(56.0 + SLOT_OFFSET, 155.0 + SLOT_OFFSET),
        Vec2::new(413.0 + SLOT_OFFSET, 132.0 + SLOT_OFFSET),
        Vec2::new(746.0 + SLOT_OFFSET, 142.0 + SLOT_OFFSET),
        Vec2::new(230.0 + SLOT_OFFSET, 276.0 + SLOT_OFFSET),
        Vec2::new(620.0 + SLOT_OFFSET, 298.0 + SLOT_OFFSET),
        Vec2::new(415.0 + SLOT_OFFSET, 473.0 + SLOT_OFFSET),
        Vec2::new(71.0 + SLOT_OFFSET, 623.0 + SLOT_OFFSET),
        Vec2::new(388.0 + SLOT_OFFSET, 721.0 + SLOT_OFFSET),
        Vec2::new(720.0 + SLOT_OFFSET, 605.0 + SLOT_OFFSET),
    ];
}

/// Circle containment test using squared distance (no sqrt)
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// Current wall-clock time as a seed value
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
