//! Fixed hit regions for each screen
//!
//! Coordinates are in the 1024x1024 logical screen space, origin top-left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::router::Action;
use crate::circle_contains;
use crate::sim::ScreenKind;
use crate::tuning::Difficulty;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Half-open containment, matching the usual pixel-rect convention
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }
}

/// Circle region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        circle_contains(self.center, self.radius, point)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    Rect(Rect),
    Circle(Circle),
}

impl HitShape {
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            HitShape::Rect(rect) => rect.contains(point),
            HitShape::Circle(circle) => circle.contains(point),
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            HitShape::Rect(rect) => rect.center(),
            HitShape::Circle(circle) => circle.center,
        }
    }
}

/// A clickable control and the action it triggers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub shape: HitShape,
    pub action: Action,
}

impl Region {
    const fn rect(rect: Rect, action: Action) -> Self {
        Self {
            shape: HitShape::Rect(rect),
            action,
        }
    }

    const fn circle(circle: Circle, action: Action) -> Self {
        Self {
            shape: HitShape::Circle(circle),
            action,
        }
    }
}

// Main menu
pub const PLAY_BUTTON: Rect = Rect::new(372.0, 532.0, 281.0, 75.0);
pub const OPTIONS_BUTTON: Rect = Rect::new(372.0, 630.0, 281.0, 75.0);
pub const TUTORIAL_BUTTON: Rect = Rect::new(372.0, 728.0, 281.0, 75.0);
pub const EXIT_BUTTON: Rect = Rect::new(372.0, 870.0, 281.0, 75.0);

// Difficulty choice
pub const EASY_BUTTON: Rect = Rect::new(366.0, 488.0, 289.0, 67.0);
pub const NORMAL_BUTTON: Rect = Rect::new(366.0, 620.0, 289.0, 67.0);
pub const HARD_BUTTON: Rect = Rect::new(366.0, 752.0, 289.0, 67.0);

// Options
pub const BACKGROUND_AUDIO_BUTTON: Rect = Rect::new(360.0, 570.0, 300.0, 85.0);
pub const EFFECT_AUDIO_BUTTON: Rect = Rect::new(360.0, 680.0, 300.0, 85.0);

/// Round "back" control shared by the sub-screens
pub const BACK_BUTTON: Circle = Circle::new(122.0, 883.0, 54.0);

static MENU_REGIONS: [Region; 4] = [
    Region::rect(PLAY_BUTTON, Action::Play),
    Region::rect(OPTIONS_BUTTON, Action::OpenOptions),
    Region::rect(TUTORIAL_BUTTON, Action::OpenTutorial),
    Region::rect(EXIT_BUTTON, Action::Exit),
];

// Back is listed first on every sub-screen so it wins any overlap
static DIFFICULTY_REGIONS: [Region; 4] = [
    Region::circle(BACK_BUTTON, Action::Back),
    Region::rect(EASY_BUTTON, Action::SelectDifficulty(Difficulty::Easy)),
    Region::rect(NORMAL_BUTTON, Action::SelectDifficulty(Difficulty::Normal)),
    Region::rect(HARD_BUTTON, Action::SelectDifficulty(Difficulty::Hard)),
];

static OPTIONS_REGIONS: [Region; 3] = [
    Region::circle(BACK_BUTTON, Action::Back),
    Region::rect(BACKGROUND_AUDIO_BUTTON, Action::ToggleBackgroundAudio),
    Region::rect(EFFECT_AUDIO_BUTTON, Action::ToggleEffectAudio),
];

static TUTORIAL_REGIONS: [Region; 1] = [Region::circle(BACK_BUTTON, Action::Back)];

/// Static controls for a screen, in priority order.
///
/// Playing and game-over have no fixed buttons: targets are tested against
/// the live field, and game-over accepts a click anywhere.
pub fn regions(screen: ScreenKind) -> &'static [Region] {
    match screen {
        ScreenKind::Menu => &MENU_REGIONS,
        ScreenKind::DifficultyChoice => &DIFFICULTY_REGIONS,
        ScreenKind::Options => &OPTIONS_REGIONS,
        ScreenKind::Tutorial => &TUTORIAL_REGIONS,
        ScreenKind::Playing | ScreenKind::GameOver => &[],
    }
}

/// Centre of the control that triggers `action` on `screen`, if any
pub fn button_center(screen: ScreenKind, action: Action) -> Option<Vec2> {
    regions(screen)
        .iter()
        .find(|region| region.action == action)
        .map(|region| region.shape.center())
}
