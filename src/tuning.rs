//! Data-driven game balance
//!
//! The three difficulty presets. Defaults are the canonical table; a JSON
//! override may replace any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty preset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Parameters for one round, fixed at round start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Display label shown on the game-over screen
    pub label: String,
    /// Round length in seconds
    pub round_duration_secs: f32,
    /// Shortest time a target stays up
    pub min_target_lifetime: f32,
    /// Longest time a target stays up
    pub max_target_lifetime: f32,
    /// Each empty slot spawns with chance 1/N per tick
    pub spawn_chance_denominator: u32,
}

impl DifficultyProfile {
    pub fn easy() -> Self {
        Self {
            label: "EASY".to_string(),
            round_duration_secs: 60.0,
            min_target_lifetime: 1.5,
            max_target_lifetime: 2.5,
            spawn_chance_denominator: 150,
        }
    }

    pub fn normal() -> Self {
        Self {
            label: "NORMAL".to_string(),
            round_duration_secs: 45.0,
            min_target_lifetime: 1.0,
            max_target_lifetime: 2.0,
            spawn_chance_denominator: 100,
        }
    }

    pub fn hard() -> Self {
        Self {
            label: "HARD".to_string(),
            round_duration_secs: 30.0,
            min_target_lifetime: 0.5,
            max_target_lifetime: 1.5,
            spawn_chance_denominator: 50,
        }
    }

    /// Check the profile invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |reason: &str| TuningError::Invalid {
            profile: self.label.clone(),
            reason: reason.to_string(),
        };

        if !(self.round_duration_secs > 0.0) {
            return Err(invalid("round duration must be positive"));
        }
        if !(self.min_target_lifetime > 0.0) {
            return Err(invalid("minimum target lifetime must be positive"));
        }
        if !(self.max_target_lifetime >= self.min_target_lifetime) {
            return Err(invalid("maximum target lifetime is below the minimum"));
        }
        if self.spawn_chance_denominator == 0 {
            return Err(invalid("spawn chance denominator must be non-zero"));
        }
        Ok(())
    }
}

/// Errors raised while loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid difficulty profile {profile}: {reason}")]
    Invalid { profile: String, reason: String },
}

/// Sparse profile as read from a tuning file; absent fields keep the preset
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProfileOverride {
    label: Option<String>,
    round_duration_secs: Option<f32>,
    min_target_lifetime: Option<f32>,
    max_target_lifetime: Option<f32>,
    spawn_chance_denominator: Option<u32>,
}

impl ProfileOverride {
    fn apply(self, base: DifficultyProfile) -> DifficultyProfile {
        DifficultyProfile {
            label: self.label.unwrap_or(base.label),
            round_duration_secs: self.round_duration_secs.unwrap_or(base.round_duration_secs),
            min_target_lifetime: self.min_target_lifetime.unwrap_or(base.min_target_lifetime),
            max_target_lifetime: self.max_target_lifetime.unwrap_or(base.max_target_lifetime),
            spawn_chance_denominator: self
                .spawn_chance_denominator
                .unwrap_or(base.spawn_chance_denominator),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TuningFile {
    easy: ProfileOverride,
    normal: ProfileOverride,
    hard: ProfileOverride,
}

impl From<TuningFile> for Tuning {
    fn from(file: TuningFile) -> Self {
        Self {
            easy: file.easy.apply(DifficultyProfile::easy()),
            normal: file.normal.apply(DifficultyProfile::normal()),
            hard: file.hard.apply(DifficultyProfile::hard()),
        }
    }
}

/// All difficulty presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TuningFile")]
pub struct Tuning {
    pub easy: DifficultyProfile,
    pub normal: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile::easy(),
            normal: DifficultyProfile::normal(),
            hard: DifficultyProfile::hard(),
        }
    }
}

impl Tuning {
    /// Profile for a preset
    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        if let Err(e) = tuning.validate() {
            log::warn!("Rejected tuning override: {}", e);
            return Err(e);
        }
        Ok(tuning)
    }

    /// Load a JSON override from disk
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for difficulty in Difficulty::ALL {
            self.profile(difficulty).validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        for difficulty in Difficulty::ALL {
            let p = tuning.profile(difficulty);
            assert!(p.max_target_lifetime >= p.min_target_lifetime);
        }
        assert_eq!(tuning.profile(Difficulty::Easy).round_duration_secs, 60.0);
        assert_eq!(tuning.profile(Difficulty::Hard).spawn_chance_denominator, 50);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{
            "hard": {
                "label": "BRUTAL",
                "round_duration_secs": 20.0,
                "min_target_lifetime": 0.3,
                "max_target_lifetime": 0.8,
                "spawn_chance_denominator": 30
            }
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.hard.label, "BRUTAL");
        assert_eq!(tuning.easy, DifficultyProfile::easy());
        assert_eq!(tuning.normal, DifficultyProfile::normal());
    }

    #[test]
    fn test_single_field_override_keeps_preset() {
        let tuning = Tuning::from_json(r#"{"hard":{"round_duration_secs":20.0}}"#).unwrap();
        let hard = tuning.profile(Difficulty::Hard);
        assert_eq!(hard.round_duration_secs, 20.0);
        assert_eq!(hard.label, "HARD");
        assert_eq!(hard.min_target_lifetime, 0.5);
        assert_eq!(hard.max_target_lifetime, 1.5);
        assert_eq!(hard.spawn_chance_denominator, 50);
        assert_eq!(tuning.easy, DifficultyProfile::easy());
        assert_eq!(tuning.normal, DifficultyProfile::normal());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_partial_override_is_still_validated() {
        // Raising only the minimum past the preset's maximum
        let err = Tuning::from_json(r#"{"normal":{"min_target_lifetime":5.0}}"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { ref profile, .. } if profile == "NORMAL"));
    }

    #[test]
    fn test_inverted_lifetime_rejected() {
        let json = r#"{
            "easy": {
                "label": "EASY",
                "round_duration_secs": 60.0,
                "min_target_lifetime": 3.0,
                "max_target_lifetime": 2.0,
                "spawn_chance_denominator": 150
            }
        }"#;
        let err = Tuning::from_json(json).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { ref profile, .. } if profile == "EASY"));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let mut profile = DifficultyProfile::normal();
        profile.spawn_chance_denominator = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        assert_eq!(Difficulty::from_str("med"), None);
    }
}
