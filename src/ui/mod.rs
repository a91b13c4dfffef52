//! Screen geometry and pointer routing
//!
//! Pure lookups: nothing in here mutates game state.

pub mod layout;
pub mod router;

pub use layout::{Circle, HitShape, Rect, Region};
pub use router::{Action, Click, CursorStyle, MouseButton, cursor_style, route};
