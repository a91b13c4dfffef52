//! Screen state machine and the game instance that owns it
//!
//! Round data only exists inside the `Playing` and `GameOver` variants, so
//! it cannot be read or mutated from any other screen.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::SpawnField;
use super::round::{RoundResult, RoundState};
use crate::settings::Settings;
use crate::tuning::{Difficulty, Tuning};
use crate::ui::Action;

/// Which screen is showing (data-free mirror of [`Screen`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    Menu,
    DifficultyChoice,
    Playing,
    GameOver,
    Options,
    Tutorial,
}

impl ScreenKind {
    /// Screens the cancel key backs out of
    pub fn is_interruptible(&self) -> bool {
        matches!(
            self,
            ScreenKind::Playing
                | ScreenKind::DifficultyChoice
                | ScreenKind::Options
                | ScreenKind::Tutorial
        )
    }
}

/// Current screen, carrying the round while one is live
#[derive(Debug, Clone)]
pub enum Screen {
    Menu,
    DifficultyChoice,
    Playing { round: RoundState, field: SpawnField },
    GameOver { round: RoundState },
    Options,
    Tutorial,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu => ScreenKind::Menu,
            Screen::DifficultyChoice => ScreenKind::DifficultyChoice,
            Screen::Playing { .. } => ScreenKind::Playing,
            Screen::GameOver { .. } => ScreenKind::GameOver,
            Screen::Options => ScreenKind::Options,
            Screen::Tutorial => ScreenKind::Tutorial,
        }
    }
}

/// Side-effect notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScreenChanged { from: ScreenKind, to: ScreenKind },
    /// A navigation or toggle control was pressed
    ButtonPressed,
    RoundStarted { difficulty: Difficulty },
    TargetSpawned { slot: usize },
    TargetEscaped { slot: usize },
    TargetHit { slot: usize, score: u32 },
    RoundOver(RoundResult),
    BackgroundAudioToggled { muted: bool },
    EffectAudioToggled { muted: bool },
    QuitRequested,
}

/// What an action does from a given screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Goto(ScreenKind),
    StartRound(Difficulty),
    Strike(Vec2),
    ToggleBackgroundAudio,
    ToggleEffectAudio,
    Quit,
}

/// The transition table. `None` means the action is ignored on that screen.
pub fn transition(from: ScreenKind, action: Action) -> Option<Transition> {
    use ScreenKind as S;

    match (from, action) {
        (S::Menu, Action::Play) => Some(Transition::Goto(S::DifficultyChoice)),
        (S::Menu, Action::OpenOptions) => Some(Transition::Goto(S::Options)),
        (S::Menu, Action::OpenTutorial) => Some(Transition::Goto(S::Tutorial)),
        (S::Menu, Action::Exit) => Some(Transition::Quit),

        (S::DifficultyChoice, Action::SelectDifficulty(d)) => Some(Transition::StartRound(d)),
        (S::DifficultyChoice, Action::Back) => Some(Transition::Goto(S::Menu)),

        (S::Playing, Action::Strike(point)) => Some(Transition::Strike(point)),

        (S::GameOver, Action::Dismiss) => Some(Transition::Goto(S::Menu)),

        (S::Options, Action::Back) => Some(Transition::Goto(S::Menu)),
        (S::Options, Action::ToggleBackgroundAudio) => Some(Transition::ToggleBackgroundAudio),
        (S::Options, Action::ToggleEffectAudio) => Some(Transition::ToggleEffectAudio),

        (S::Tutorial, Action::Back) => Some(Transition::Goto(S::Menu)),

        _ => None,
    }
}

/// The whole game: current screen, audio settings, balance and RNG
#[derive(Debug, Clone)]
pub struct Game {
    pub screen: Screen,
    pub settings: Settings,
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    quit_requested: bool,
}

impl Game {
    /// New game at the main menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            screen: Screen::Menu,
            settings: Settings::default(),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            quit_requested: false,
        }
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Set once the exit control was used on the menu
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Live or just-finished round
    pub fn round(&self) -> Option<&RoundState> {
        match &self.screen {
            Screen::Playing { round, .. } | Screen::GameOver { round } => Some(round),
            _ => None,
        }
    }

    /// Playfield, only while a round is running
    pub fn field(&self) -> Option<&SpawnField> {
        match &self.screen {
            Screen::Playing { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Playfield access for the presentation layer and tests
    pub fn field_mut(&mut self) -> Option<&mut SpawnField> {
        match &mut self.screen {
            Screen::Playing { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Final numbers while on the game-over screen
    pub fn result(&self) -> Option<RoundResult> {
        match &self.screen {
            Screen::GameOver { round } => Some(round.result()),
            _ => None,
        }
    }

    fn enter(&mut self, next: Screen, events: &mut Vec<GameEvent>) {
        let from = self.kind();
        let to = next.kind();
        self.screen = next;
        if from != to {
            log::info!("Screen {:?} -> {:?}", from, to);
            events.push(GameEvent::ScreenChanged { from, to });
        }
    }

    fn goto(&mut self, kind: ScreenKind, events: &mut Vec<GameEvent>) {
        let next = match kind {
            ScreenKind::Menu => Screen::Menu,
            ScreenKind::DifficultyChoice => Screen::DifficultyChoice,
            ScreenKind::Options => Screen::Options,
            ScreenKind::Tutorial => Screen::Tutorial,
            ScreenKind::Playing | ScreenKind::GameOver => {
                // Round screens are only entered through start_round / update
                log::warn!("Ignoring direct jump to {:?}", kind);
                return;
            }
        };
        self.enter(next, events);
    }

    /// Begin a fresh round: score 0, timer from `now`, all slots empty
    pub(crate) fn start_round(&mut self, difficulty: Difficulty, now: f64, events: &mut Vec<GameEvent>) {
        let profile = self.tuning.profile(difficulty).clone();
        log::info!("Round started: {} ({}s)", profile.label, profile.round_duration_secs);
        let round = RoundState::start(difficulty, profile, now);
        let mut field = SpawnField::new();
        field.reset();
        events.push(GameEvent::RoundStarted { difficulty });
        self.enter(Screen::Playing { round, field }, events);
    }

    /// Apply a routed action at time `now`
    pub fn apply(&mut self, action: Action, now: f64, events: &mut Vec<GameEvent>) {
        let Some(step) = transition(self.kind(), action) else {
            return;
        };

        if !matches!(step, Transition::Strike(_)) {
            events.push(GameEvent::ButtonPressed);
        }

        match step {
            Transition::Goto(kind) => self.goto(kind, events),
            Transition::StartRound(difficulty) => self.start_round(difficulty, now, events),
            Transition::Strike(point) => self.strike(point, events),
            Transition::ToggleBackgroundAudio => {
                let muted = self.settings.toggle_background();
                log::info!("Background audio muted: {}", muted);
                events.push(GameEvent::BackgroundAudioToggled { muted });
            }
            Transition::ToggleEffectAudio => {
                let muted = self.settings.toggle_effects();
                log::info!("Effect audio muted: {}", muted);
                events.push(GameEvent::EffectAudioToggled { muted });
            }
            Transition::Quit => {
                log::info!("Exit requested");
                self.quit_requested = true;
                events.push(GameEvent::QuitRequested);
            }
        }
    }

    fn strike(&mut self, point: Vec2, events: &mut Vec<GameEvent>) {
        if let Screen::Playing { round, field } = &mut self.screen {
            if let Some(slot) = field.handle_click(point) {
                round.record_hit();
                log::info!("Hit slot {}! Score: {}", slot, round.score);
                events.push(GameEvent::TargetHit {
                    slot,
                    score: round.score,
                });
            }
        }
    }

    /// Cancel key: back to the menu from any interruptible screen.
    /// Abandons a running round.
    pub fn cancel(&mut self, events: &mut Vec<GameEvent>) {
        if self.kind().is_interruptible() {
            if self.kind() == ScreenKind::Playing {
                log::info!("Round abandoned");
            }
            self.goto(ScreenKind::Menu, events);
        }
    }

    /// Per-tick simulation step; only does work while playing
    pub fn update(&mut self, now: f64, events: &mut Vec<GameEvent>) {
        let Screen::Playing { round, field } = &mut self.screen else {
            return;
        };

        if round.is_over(now) {
            let round = round.clone();
            let result = round.result();
            log::info!("Game over! Score: {} ({})", result.score, result.label);
            self.enter(Screen::GameOver { round }, events);
            events.push(GameEvent::RoundOver(result));
            return;
        }

        field.tick(&round.profile, now, &mut self.rng, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(12345, Tuning::default())
    }

    #[test]
    fn test_starts_at_menu() {
        let game = game();
        assert_eq!(game.kind(), ScreenKind::Menu);
        assert!(game.round().is_none());
        assert!(game.field().is_none());
        assert!(!game.quit_requested());
    }

    #[test]
    fn test_transition_table_ignores_foreign_actions() {
        assert_eq!(transition(ScreenKind::Menu, Action::Back), None);
        assert_eq!(transition(ScreenKind::Tutorial, Action::Play), None);
        assert_eq!(transition(ScreenKind::GameOver, Action::Strike(Vec2::ZERO)), None);
        assert_eq!(
            transition(ScreenKind::Options, Action::SelectDifficulty(Difficulty::Easy)),
            None
        );
    }

    #[test]
    fn test_menu_navigation_round_trip() {
        let mut game = game();
        let mut events = Vec::new();
        for (action, screen) in [
            (Action::OpenOptions, ScreenKind::Options),
            (Action::Back, ScreenKind::Menu),
            (Action::OpenTutorial, ScreenKind::Tutorial),
            (Action::Back, ScreenKind::Menu),
            (Action::Play, ScreenKind::DifficultyChoice),
            (Action::Back, ScreenKind::Menu),
        ] {
            game.apply(action, 0.0, &mut events);
            assert_eq!(game.kind(), screen);
        }
        let presses = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ButtonPressed))
            .count();
        assert_eq!(presses, 6);
    }

    #[test]
    fn test_exit_from_menu() {
        let mut game = game();
        let mut events = Vec::new();
        game.apply(Action::Exit, 0.0, &mut events);
        assert!(game.quit_requested());
        assert!(events.contains(&GameEvent::QuitRequested));
    }

    #[test]
    fn test_options_toggles_survive_rounds() {
        let mut game = game();
        let mut events = Vec::new();
        game.apply(Action::OpenOptions, 0.0, &mut events);
        game.apply(Action::ToggleBackgroundAudio, 0.0, &mut events);
        game.apply(Action::ToggleEffectAudio, 0.0, &mut events);
        assert_eq!(game.kind(), ScreenKind::Options);
        game.cancel(&mut events);

        game.apply(Action::Play, 0.0, &mut events);
        game.apply(Action::SelectDifficulty(Difficulty::Hard), 1.0, &mut events);
        game.update(40.0, &mut events);
        assert_eq!(game.kind(), ScreenKind::GameOver);
        game.apply(Action::Dismiss, 41.0, &mut events);

        assert!(game.settings.background_muted);
        assert!(game.settings.effects_muted);
    }

    #[test]
    fn test_difficulty_only_selectable_from_choice_screen() {
        for screen in [ScreenKind::Menu, ScreenKind::Tutorial, ScreenKind::GameOver] {
            assert_eq!(
                transition(screen, Action::SelectDifficulty(Difficulty::Hard)),
                None
            );
        }

        let mut game = game();
        let mut events = Vec::new();
        game.apply(Action::SelectDifficulty(Difficulty::Hard), 0.0, &mut events);
        assert_eq!(game.kind(), ScreenKind::Menu);
        assert!(game.round().is_none());
        assert!(events.is_empty());

        game.apply(Action::Play, 0.0, &mut events);
        game.apply(Action::SelectDifficulty(Difficulty::Hard), 0.0, &mut events);
        assert_eq!(game.kind(), ScreenKind::Playing);
        assert_eq!(game.round().map(|r| r.difficulty), Some(Difficulty::Hard));
    }

    #[test]
    fn test_cancel_ignored_on_menu_and_game_over() {
        let mut game = game();
        let mut events = Vec::new();
        game.cancel(&mut events);
        assert_eq!(game.kind(), ScreenKind::Menu);
        assert!(events.is_empty());

        game.start_round(Difficulty::Easy, 0.0, &mut events);
        game.update(61.0, &mut events);
        assert_eq!(game.kind(), ScreenKind::GameOver);
        game.cancel(&mut events);
        assert_eq!(game.kind(), ScreenKind::GameOver);
    }

    #[test]
    fn test_cancel_abandons_round() {
        let mut game = game();
        let mut events = Vec::new();
        game.start_round(Difficulty::Normal, 0.0, &mut events);
        game.cancel(&mut events);
        assert_eq!(game.kind(), ScreenKind::Menu);
        assert!(game.round().is_none());
        assert!(!events.iter().any(|e| matches!(e, GameEvent::RoundOver(_))));
    }

    #[test]
    fn test_update_outside_round_is_noop() {
        let mut game = game();
        let mut events = Vec::new();
        game.update(100.0, &mut events);
        assert_eq!(game.kind(), ScreenKind::Menu);
        assert!(events.is_empty());
    }

    #[test]
    fn test_game_over_keeps_result() {
        let mut game = game();
        let mut events = Vec::new();
        game.start_round(Difficulty::Normal, 5.0, &mut events);
        game.update(50.0, &mut events);
        let result = game.result().unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.label, "NORMAL");
        assert_eq!(events.last(), Some(&GameEvent::RoundOver(result)));
    }
}
