use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::score::{CIVIL_SCORE_MAX, CIVIL_SCORE_MIN};
use crate::types::{Rate, Score};

/// Annual rate quoted at the middle of the score range.
pub const BASE_ANNUAL_RATE: Rate = dec!(0.09);

/// Rate change per 100 points away from the middle of the score range.
pub const RATE_STEP_PER_100_POINTS: Rate = dec!(0.0025);

pub const MIN_ANNUAL_RATE: Rate = dec!(0.07);
pub const MAX_ANNUAL_RATE: Rate = dec!(0.15);

/// Midpoint of the civil score range (600).
pub fn score_midpoint() -> Decimal {
    Decimal::from(CIVIL_SCORE_MIN) + Decimal::from(CIVIL_SCORE_MAX - CIVIL_SCORE_MIN) / dec!(2)
}

/// Annual rate implied by a civil score.
///
/// Every 100 points above the midpoint shaves 0.25% off the base rate and
/// every 100 below adds it, bounded to [7%, 15%]. Non-increasing in score.
pub fn estimate_rate(score: Score) -> Rate {
    let distance = (Decimal::from(score) - score_midpoint()) / dec!(100);
    let rate = BASE_ANNUAL_RATE - distance * RATE_STEP_PER_100_POINTS;
    rate.clamp(MIN_ANNUAL_RATE, MAX_ANNUAL_RATE)
}
