use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use loan_insights_core::lending::LOAN_TENURES_YEARS;
use loan_insights_core::profile::{simulate_features, FeatureSet, Occupation};
use loan_insights_core::scoring::{estimate_rate, generate_score, ScoreBand};

use crate::input;

/// Arguments for simulated alternative-data features
#[derive(Args)]
pub struct FeaturesArgs {
    /// Occupation label or slug
    #[arg(long, default_value = "other")]
    pub occupation: String,
}

/// Arguments for civil score generation
#[derive(Args)]
pub struct ScoreArgs {
    /// Path to a JSON feature map (signal name -> 0..1); overrides --occupation
    #[arg(long)]
    pub input: Option<String>,

    /// Occupation whose simulated features are scored
    #[arg(long, default_value = "other")]
    pub occupation: String,
}

/// Arguments for rate estimation
#[derive(Args)]
pub struct RateArgs {
    /// Civil score (300-900)
    #[arg(long)]
    pub score: u32,
}

pub fn run_features(args: FeaturesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let occupation = Occupation::from(args.occupation.as_str());
    let features = simulate_features(occupation);
    Ok(json!({
        "occupation": occupation,
        "label": occupation.label(),
        "average": features.mean(),
        "features": features,
    }))
}

pub fn run_score(args: ScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let features: FeatureSet = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        simulate_features(Occupation::from(args.occupation.as_str()))
    };
    let score = generate_score(&features);
    Ok(json!({
        "credit_score": score,
        "score_band": ScoreBand::from_score(score),
        "average": features.mean(),
        "signals_used": features.len(),
    }))
}

pub fn run_rate(args: RateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rate = estimate_rate(args.score);
    Ok(json!({
        "civil_score": args.score,
        "annual_rate": rate,
        "rate_percent": (rate * dec!(100)).round_dp(2),
        "monthly_rate": rate / Decimal::from(12u32),
    }))
}

pub fn run_occupations() -> Result<Value, Box<dyn std::error::Error>> {
    let occupations: Vec<Value> = Occupation::ALL
        .iter()
        .map(|occ| json!({ "slug": occ.slug(), "label": occ.label() }))
        .collect();
    Ok(json!({
        "occupations": occupations,
        "tenures_years": LOAN_TENURES_YEARS,
    }))
}
