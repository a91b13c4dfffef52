//! Game simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! audio playback:
//! - Time comes in as a timestamp on every tick
//! - Seeded RNG only, owned by the game instance
//! - Stable slot order (by index)
//! - Side effects leave as `GameEvent`s

pub mod field;
pub mod random;
pub mod round;
pub mod slot;
pub mod state;
pub mod tick;

pub use field::SpawnField;
pub use random::draw_duration;
pub use round::{RoundResult, RoundState};
pub use slot::Slot;
pub use state::{Game, GameEvent, Screen, ScreenKind, Transition, transition};
pub use tick::{BarColor, Frame, Hud, Key, TargetView, TickInput, snapshot, tick};
