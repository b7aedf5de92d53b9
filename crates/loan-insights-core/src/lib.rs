//! Alternative-data credit scoring and home loan affordability estimates.
//!
//! The pipeline runs occupation → simulated signals → civil score → annual
//! rate → maximum loan and installment → synthetic lender offers. Every step
//! is a pure function; the only randomness is the offer haircut, which takes
//! an injected [`rand::Rng`].

pub mod error;
pub mod insights;
pub mod lending;
pub mod profile;
pub mod scoring;
pub mod time_value;
pub mod types;

#[cfg(feature = "narrative")]
pub mod narrative;

pub use error::LoanInsightsError;
pub use insights::{assess_applicant, compute_loan_insights, LoanInsights, LoanInsightsInput};
pub use types::*;

/// Standard result type for all loan-insights operations
pub type LoanInsightsResult<T> = Result<T, LoanInsightsError>;
