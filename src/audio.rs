//! Audio cue routing
//!
//! The game core never plays sound. It emits [`GameEvent`]s; this module turns
//! them into cues for whatever playback backend the host provides, honouring
//! the mute toggles.

use crate::settings::Settings;
use crate::sim::{GameEvent, ScreenKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Button pressed or target hit
    Click,
}

/// A request for the playback backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCue {
    Play(SoundEffect),
    /// Start the menu music if it is not already playing
    StartMusic,
    StopMusic,
    /// Music volume (0.0 - 1.0)
    SetMusicVolume(f32),
}

/// Playback backend
pub trait AudioSink {
    fn cue(&mut self, cue: AudioCue);
}

/// Cues for a single event under the given settings
pub fn cues_for(event: &GameEvent, settings: &Settings) -> Vec<AudioCue> {
    match event {
        GameEvent::ButtonPressed | GameEvent::TargetHit { .. } if settings.effects_enabled() => {
            vec![AudioCue::Play(SoundEffect::Click)]
        }
        GameEvent::RoundOver(_) => vec![AudioCue::StopMusic],
        GameEvent::ScreenChanged {
            to: ScreenKind::Menu,
            ..
        } => vec![AudioCue::StartMusic],
        GameEvent::BackgroundAudioToggled { .. } => {
            vec![AudioCue::SetMusicVolume(settings.music_volume())]
        }
        _ => Vec::new(),
    }
}

/// Forward a tick's events to the sink
pub fn dispatch(events: &[GameEvent], settings: &Settings, sink: &mut dyn AudioSink) {
    for event in events {
        for cue in cues_for(event, settings) {
            sink.cue(cue);
        }
    }
}

/// Sink that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink {
    pub music_playing: bool,
    pub clicks: u32,
}

impl AudioSink for LogSink {
    fn cue(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Play(effect) => {
                self.clicks += 1;
                log::trace!("sfx {:?}", effect);
            }
            AudioCue::StartMusic => {
                if !self.music_playing {
                    self.music_playing = true;
                    log::debug!("Menu music started");
                }
            }
            AudioCue::StopMusic => {
                self.music_playing = false;
                log::debug!("Menu music stopped");
            }
            AudioCue::SetMusicVolume(volume) => log::debug!("Music volume {}", volume),
        }
    }
}
