//! Frame tick: input in, state advanced, render snapshot out
//!
//! Called once per iteration of the external render/input loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::round::RoundResult;
use super::state::{Game, GameEvent, ScreenKind};
use crate::settings::Settings;
use crate::ui::{Click, CursorStyle, cursor_style, route};

/// Keys the core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Back out to the main menu
    Escape,
    Other,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Current time in seconds
    pub now: f64,
    /// Pointer press this tick
    pub click: Option<Click>,
    /// Key press this tick
    pub key: Option<Key>,
    /// Hover position for cursor feedback
    pub pointer: Option<Vec2>,
}

/// Time bar colour bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarColor {
    Green,
    Yellow,
    Red,
}

impl BarColor {
    pub fn for_ratio(ratio: f32) -> Self {
        if ratio > 0.5 {
            BarColor::Green
        } else if ratio > 0.2 {
            BarColor::Yellow
        } else {
            BarColor::Red
        }
    }
}

/// A visible target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub slot: usize,
    pub position: Vec2,
}

/// In-round heads-up display data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub remaining_secs: f64,
    /// Whole seconds shown on the countdown (rounded up)
    pub countdown: u32,
    /// Time bar fill, 0.0 - 1.0
    pub bar_fill: f32,
    pub bar_color: BarColor,
    pub targets: Vec<TargetView>,
}

/// Everything the presentation layer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub screen: ScreenKind,
    pub hud: Option<Hud>,
    pub result: Option<RoundResult>,
    pub settings: Settings,
    pub cursor: CursorStyle,
    pub events: Vec<GameEvent>,
    pub quit: bool,
}

/// Advance the game by one tick: key, then click, then the round update
pub fn tick(game: &mut Game, input: &TickInput) -> Frame {
    let now = input.now;
    let mut events = Vec::new();

    if input.key == Some(Key::Escape) {
        game.cancel(&mut events);
    }

    if let Some(click) = &input.click {
        if let Some(action) = route(game.kind(), click) {
            game.apply(action, now, &mut events);
        }
    }

    game.update(now, &mut events);

    snapshot(game, now, input.pointer, events)
}

/// Build the render snapshot for the current state
pub fn snapshot(game: &Game, now: f64, pointer: Option<Vec2>, events: Vec<GameEvent>) -> Frame {
    let screen = game.kind();

    let hud = game.round().filter(|_| screen == ScreenKind::Playing).map(|round| {
        let remaining = round.remaining_time(now).max(0.0);
        let ratio = (remaining / round.time_limit()).clamp(0.0, 1.0) as f32;
        Hud {
            score: round.score,
            remaining_secs: remaining,
            countdown: remaining.ceil() as u32,
            bar_fill: ratio,
            bar_color: BarColor::for_ratio(ratio),
            targets: game
                .field()
                .map(|field| {
                    field
                        .occupied()
                        .map(|(slot, position)| TargetView { slot, position })
                        .collect()
                })
                .unwrap_or_default(),
        }
    });

    let cursor = pointer
        .map(|p| cursor_style(screen, p, game.field()))
        .unwrap_or_default();

    Frame {
        screen,
        hud,
        result: game.result(),
        settings: game.settings,
        cursor,
        events,
        quit: game.quit_requested(),
    }
}
