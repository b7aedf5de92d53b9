//! Synthetic civil score and the interest rate it implies.

pub mod rate;
pub mod score;

pub use rate::estimate_rate;
pub use score::{clamp_score, generate_score, ScoreBand};
