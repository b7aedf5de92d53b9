//! Applicant profile: occupation catalogue and the alternative-data signals
//! simulated for each occupation.

pub mod features;
pub mod occupation;

pub use features::{simulate_features, AltSignal, FeatureSet};
pub use occupation::Occupation;
