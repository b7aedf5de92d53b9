use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::profile::FeatureSet;
use crate::types::Score;

pub const CIVIL_SCORE_MIN: Score = 300;
pub const CIVIL_SCORE_MAX: Score = 900;

/// Average assumed when no signals are available.
const EMPTY_PROFILE_AVERAGE: Decimal = dec!(0.5);

/// Rescale the mean signal value from [0, 1] onto the civil score range.
///
/// Truncates toward zero, then clamps. Total over any feature set, and
/// monotonic in the mean.
pub fn generate_score(features: &FeatureSet) -> Score {
    let average = features.mean().unwrap_or(EMPTY_PROFILE_AVERAGE);
    let span = Decimal::from(CIVIL_SCORE_MAX - CIVIL_SCORE_MIN);
    let raw = Decimal::from(CIVIL_SCORE_MIN) + average * span;
    clamp_score(raw.trunc().to_i64().unwrap_or(i64::from(CIVIL_SCORE_MIN)))
}

/// Force any integer onto the civil score range.
pub fn clamp_score(raw: i64) -> Score {
    raw.clamp(i64::from(CIVIL_SCORE_MIN), i64::from(CIVIL_SCORE_MAX)) as Score
}

/// Qualitative band used when describing a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s >= 800 => ScoreBand::Excellent,
            s if s >= 740 => ScoreBand::VeryGood,
            s if s >= 670 => ScoreBand::Good,
            s if s < 580 => ScoreBand::Poor,
            _ => ScoreBand::Fair,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "excellent"),
            ScoreBand::VeryGood => write!(f, "very good"),
            ScoreBand::Good => write!(f, "good"),
            ScoreBand::Fair => write!(f, "fair"),
            ScoreBand::Poor => write!(f, "poor, requiring improvement"),
        }
    }
}
