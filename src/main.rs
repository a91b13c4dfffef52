//! Capy Whack headless runner
//!
//! Drives the game at a fixed 60 Hz simulated clock with a scripted player:
//! menu, difficulty choice, one full round, game over, back to menu, exit.
//! Usage: `capy-whack [easy|normal|hard] [seed]`

use std::collections::HashMap;
use std::path::PathBuf;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use capy_whack::audio::{self, AudioSink, LogSink};
use capy_whack::consts::{SIM_DT, SLOT_HIT_RADIUS};
use capy_whack::sim::{Frame, Game, Key, ScreenKind, TickInput, tick};
use capy_whack::ui::{Action, Click, layout};
use capy_whack::{Difficulty, Tuning, TuningError, clock_seed};

/// Env var naming an optional tuning override file
const TUNING_ENV: &str = "CAPY_WHACK_TUNING";

/// Simulated player reaction before swinging at a new target
const REACTION_SECS: f64 = 0.35;
/// Chance a swing lands on the target
const ACCURACY: f64 = 0.8;

/// Safety cap on simulated ticks
const MAX_TICKS: u64 = 10 * 60 * 60;

fn load_tuning() -> Result<Tuning, TuningError> {
    match std::env::var_os(TUNING_ENV) {
        Some(path) => Tuning::load(&PathBuf::from(path)),
        None => Ok(Tuning::default()),
    }
}

/// Scripted stand-in for a human
struct Autoplayer {
    rng: Pcg32,
    difficulty: Difficulty,
    first_seen: HashMap<usize, f64>,
    rounds_played: u32,
}

impl Autoplayer {
    fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
            difficulty,
            first_seen: HashMap::new(),
            rounds_played: 0,
        }
    }

    fn press(now: f64, screen: ScreenKind, action: Action) -> TickInput {
        TickInput {
            now,
            click: layout::button_center(screen, action).map(Click::left),
            ..Default::default()
        }
    }

    /// Decide this tick's input from the previous frame
    fn next_input(&mut self, now: f64, last: &Frame) -> TickInput {
        match last.screen {
            ScreenKind::Menu if self.rounds_played == 0 => {
                Self::press(now, ScreenKind::Menu, Action::Play)
            }
            ScreenKind::Menu => Self::press(now, ScreenKind::Menu, Action::Exit),
            ScreenKind::DifficultyChoice => Self::press(
                now,
                ScreenKind::DifficultyChoice,
                Action::SelectDifficulty(self.difficulty),
            ),
            ScreenKind::Playing => self.swing(now, last),
            ScreenKind::GameOver => {
                self.rounds_played += 1;
                TickInput {
                    now,
                    click: Some(Click::left(Vec2::new(512.0, 512.0))),
                    ..Default::default()
                }
            }
            ScreenKind::Options | ScreenKind::Tutorial => TickInput {
                now,
                key: Some(Key::Escape),
                ..Default::default()
            },
        }
    }

    fn swing(&mut self, now: f64, last: &Frame) -> TickInput {
        let Some(hud) = &last.hud else {
            return TickInput { now, ..Default::default() };
        };

        self.first_seen
            .retain(|slot, _| hud.targets.iter().any(|t| t.slot == *slot));
        for target in &hud.targets {
            self.first_seen.entry(target.slot).or_insert(now);
        }

        let ready = hud
            .targets
            .iter()
            .find(|t| self.first_seen.get(&t.slot).is_some_and(|&seen| now - seen >= REACTION_SECS));

        let click = ready.map(|target| {
            self.first_seen.remove(&target.slot);
            let point = if self.rng.random_bool(ACCURACY) {
                target.position
            } else {
                target.position + Vec2::new(SLOT_HIT_RADIUS + 10.0, 0.0)
            };
            Click::left(point)
        });

        TickInput {
            now,
            click,
            pointer: click.map(|c| c.point),
            ..Default::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Capy Whack (headless) starting...");

    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .map(|arg| {
            Difficulty::from_str(&arg).unwrap_or_else(|| {
                log::warn!("Unknown difficulty '{}', using normal", arg);
                Difficulty::Normal
            })
        })
        .unwrap_or(Difficulty::Normal);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);

    let tuning = match load_tuning() {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Seed: {}, difficulty: {}", seed, difficulty.as_str());

    let mut game = Game::new(seed, tuning);
    let mut player = Autoplayer::new(seed, difficulty);
    let mut sink = LogSink::default();
    sink.cue(audio::AudioCue::StartMusic);

    let mut now = 0.0;
    let mut frame = tick(&mut game, &TickInput::default());
    let mut final_result = None;

    for _ in 0..MAX_TICKS {
        now += SIM_DT;
        let input = player.next_input(now, &frame);
        frame = tick(&mut game, &input);
        audio::dispatch(&frame.events, &frame.settings, &mut sink);

        if let Some(result) = &frame.result {
            final_result = Some(result.clone());
        }
        if frame.quit {
            break;
        }
    }

    match final_result {
        Some(result) => println!(
            "Final score: {} (difficulty: {}, {} clicks)",
            result.score, result.label, sink.clicks
        ),
        None => println!("No round completed"),
    }
}
