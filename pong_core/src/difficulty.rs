//! Difficulty tiers and their tuning table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier selected at the start of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Tuning constants for this tier
    pub fn profile(self) -> DifficultyProfile {
        DifficultyProfile::table()[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Impossible => "IMPOSSIBLE",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected difficulty selection from an untrusted source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DifficultyError {
    #[error("unknown difficulty name: {0:?}")]
    UnknownName(String),
    #[error("unknown difficulty index: {0} (expected 1-4)")]
    UnknownIndex(u8),
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            "impossible" | "4" => Ok(Difficulty::Impossible),
            _ => Err(DifficultyError::UnknownName(s.to_string())),
        }
    }
}

/// Menu numbering: 1 = Easy .. 4 = Impossible
impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            4 => Ok(Difficulty::Impossible),
            other => Err(DifficultyError::UnknownIndex(other)),
        }
    }
}

/// Ball speed escalation on long rallies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    /// Hits since the serve before escalation kicks in (exclusive)
    pub after_hits: u32,
    /// Multiplier growth per hit once escalating
    pub step: f32,
    pub cap: f32,
}

/// Tuning bundle for one difficulty tier. Immutable for the round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    /// Computer paddle speed (px/tick)
    pub paddle_speed: f32,
    /// Probability in [0, 1] that the AI reacts on a given tick
    pub accuracy: f32,
    pub reaction_speed: f32,
    pub dead_zone: f32,
    /// Fold the predicted intercept through wall bounces
    pub advanced_prediction: bool,
    /// Max random offset added to the prediction (0 disables)
    pub prediction_noise: i32,
    pub initial_ball_speed: f32,
    pub speed_increase: f32,
    pub max_speed: f32,
    pub escalation: Option<Escalation>,
}

impl DifficultyProfile {
    /// Canonical tuning table, indexed by `Difficulty as usize`
    pub const fn table() -> [DifficultyProfile; 4] {
        [
            DifficultyProfile {
                difficulty: Difficulty::Easy,
                paddle_speed: 5.0,
                accuracy: 0.5,
                reaction_speed: 0.6,
                dead_zone: 30.0,
                advanced_prediction: false,
                prediction_noise: 0,
                initial_ball_speed: 2.5,
                speed_increase: 1.01,
                max_speed: 10.0,
                escalation: None,
            },
            DifficultyProfile {
                difficulty: Difficulty::Medium,
                paddle_speed: 7.0,
                accuracy: 0.75,
                reaction_speed: 0.8,
                dead_zone: 20.0,
                advanced_prediction: true,
                prediction_noise: 0,
                initial_ball_speed: 4.0,
                speed_increase: 1.03,
                max_speed: 15.0,
                escalation: None,
            },
            DifficultyProfile {
                difficulty: Difficulty::Hard,
                paddle_speed: 9.0,
                accuracy: 0.9,
                reaction_speed: 0.9,
                dead_zone: 10.0,
                advanced_prediction: true,
                prediction_noise: 24,
                initial_ball_speed: 5.5,
                speed_increase: 1.05,
                max_speed: 20.0,
                escalation: None,
            },
            DifficultyProfile {
                difficulty: Difficulty::Impossible,
                paddle_speed: 11.0,
                accuracy: 1.0,
                reaction_speed: 1.0,
                dead_zone: 5.0,
                advanced_prediction: true,
                prediction_noise: 0,
                initial_ball_speed: 7.0,
                speed_increase: 1.08,
                max_speed: 30.0,
                escalation: Some(Escalation {
                    after_hits: 3,
                    step: 0.08,
                    cap: 2.5,
                }),
            },
        ]
    }

    /// Horizontal speed factor applied on a paddle hit (before the sign flip)
    pub fn hit_factor(&self, multiplier: f32) -> f32 {
        match self.escalation {
            Some(_) => self.speed_increase * multiplier,
            None => self.speed_increase,
        }
    }
}
