//! Maps raw pointer input to semantic actions for the current screen

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::regions;
use crate::sim::{ScreenKind, SpawnField};
use crate::tuning::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer press in logical screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Click {
    pub point: Vec2,
    pub button: MouseButton,
}

impl Click {
    pub fn left(point: Vec2) -> Self {
        Self {
            point,
            button: MouseButton::Left,
        }
    }
}

/// What a click means on the current screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Play,
    OpenOptions,
    OpenTutorial,
    Exit,
    SelectDifficulty(Difficulty),
    Back,
    ToggleBackgroundAudio,
    ToggleEffectAudio,
    /// Leave the game-over screen
    Dismiss,
    /// Swing at the playfield
    Strike(Vec2),
}

/// Pointer cursor the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Arrow,
    Hand,
}

/// Resolve a click to the first matching action, if any.
///
/// Menu screens accept any button; strikes only count with the left button.
pub fn route(screen: ScreenKind, click: &Click) -> Option<Action> {
    match screen {
        ScreenKind::Playing => {
            (click.button == MouseButton::Left).then_some(Action::Strike(click.point))
        }
        ScreenKind::GameOver => Some(Action::Dismiss),
        _ => regions(screen)
            .iter()
            .find(|region| region.shape.contains(click.point))
            .map(|region| region.action),
    }
}

/// Cursor feedback for a hovering pointer
pub fn cursor_style(screen: ScreenKind, pointer: Vec2, field: Option<&SpawnField>) -> CursorStyle {
    let clickable = match screen {
        ScreenKind::Playing => field.is_some_and(|f| f.is_over_target(pointer)),
        ScreenKind::GameOver => false,
        _ => regions(screen).iter().any(|r| r.shape.contains(pointer)),
    };
    if clickable {
        CursorStyle::Hand
    } else {
        CursorStyle::Arrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::*;

    fn click(point: Vec2) -> Click {
        Click::left(point)
    }

    #[test]
    fn test_menu_buttons() {
        assert_eq!(route(ScreenKind::Menu, &click(PLAY_BUTTON.center())), Some(Action::Play));
        assert_eq!(
            route(ScreenKind::Menu, &click(TUTORIAL_BUTTON.center())),
            Some(Action::OpenTutorial)
        );
        assert_eq!(route(ScreenKind::Menu, &click(EXIT_BUTTON.center())), Some(Action::Exit));
        assert_eq!(route(ScreenKind::Menu, &click(Vec2::new(5.0, 5.0))), None);
    }

    #[test]
    fn test_menu_accepts_any_button() {
        let right = Click {
            point: OPTIONS_BUTTON.center(),
            button: MouseButton::Right,
        };
        assert_eq!(route(ScreenKind::Menu, &right), Some(Action::OpenOptions));
    }

    #[test]
    fn test_difficulty_buttons() {
        assert_eq!(
            route(ScreenKind::DifficultyChoice, &click(HARD_BUTTON.center())),
            Some(Action::SelectDifficulty(Difficulty::Hard))
        );
        assert_eq!(
            route(ScreenKind::DifficultyChoice, &click(BACK_BUTTON.center)),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_same_point_means_different_things_per_screen() {
        // The play button area is the easy button area on the next screen
        let p = Vec2::new(400.0, 540.0);
        assert_eq!(route(ScreenKind::Menu, &click(p)), Some(Action::Play));
        assert_eq!(
            route(ScreenKind::DifficultyChoice, &click(p)),
            Some(Action::SelectDifficulty(Difficulty::Easy))
        );
        assert_eq!(route(ScreenKind::Tutorial, &click(p)), None);
    }

    #[test]
    fn test_playing_strike_needs_left_button() {
        let p = Vec2::new(300.0, 300.0);
        assert_eq!(route(ScreenKind::Playing, &click(p)), Some(Action::Strike(p)));
        let right = Click {
            point: p,
            button: MouseButton::Right,
        };
        assert_eq!(route(ScreenKind::Playing, &right), None);
    }

    #[test]
    fn test_game_over_any_click_dismisses() {
        let middle = Click {
            point: Vec2::ZERO,
            button: MouseButton::Middle,
        };
        assert_eq!(route(ScreenKind::GameOver, &middle), Some(Action::Dismiss));
    }

    #[test]
    fn test_cursor_style() {
        assert_eq!(
            cursor_style(ScreenKind::Options, EFFECT_AUDIO_BUTTON.center(), None),
            CursorStyle::Hand
        );
        assert_eq!(
            cursor_style(ScreenKind::Options, Vec2::new(1000.0, 10.0), None),
            CursorStyle::Arrow
        );

        let field = SpawnField::new();
        let over_slot = crate::consts::SLOT_POSITIONS[0];
        assert_eq!(
            cursor_style(ScreenKind::Playing, over_slot, Some(&field)),
            CursorStyle::Arrow
        );
    }
}
