//! End-to-end assessment: occupation → features → score → rate → quote → offers.

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::lending::affordability::MAX_EMI_TO_INCOME_RATIO;
use crate::lending::offers::{GENERIC_LENDER_NAME, MIN_OFFER_AMOUNT};
use crate::lending::{
    calculate_max_loan, generate_offers, is_supported_tenure, LenderOffer, DEFAULT_TENURE_YEARS,
    LOAN_TENURES_YEARS,
};
use crate::profile::{simulate_features, FeatureSet, Occupation};
use crate::scoring::rate::{BASE_ANNUAL_RATE, MAX_ANNUAL_RATE, MIN_ANNUAL_RATE};
use crate::scoring::score::{CIVIL_SCORE_MAX, CIVIL_SCORE_MIN};
use crate::scoring::{clamp_score, estimate_rate, generate_score, ScoreBand};
use crate::types::*;
use crate::{LoanInsightsError, LoanInsightsResult};

/// Income range the intake form was designed for. Outside it the estimate
/// still runs but carries a warning.
pub const ADVISORY_MIN_MONTHLY_INCOME: Money = dec!(5_000);
pub const ADVISORY_MAX_MONTHLY_INCOME: Money = dec!(500_000);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInsightsInput {
    pub monthly_income: Money,
    #[serde(default)]
    pub occupation: Occupation,
    #[serde(default = "default_tenure")]
    pub tenure_years: TenureYears,
    /// Precomputed civil score; replaces the simulated one when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civil_score: Option<i64>,
    /// Seed for the offer haircuts. Omit for a fresh draw on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_tenure() -> TenureYears {
    DEFAULT_TENURE_YEARS
}

/// Everything the presentation layer needs; the narrative is rebuilt from
/// these fields alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInsights {
    pub occupation: Occupation,
    pub monthly_income: Money,
    pub tenure_years: TenureYears,
    pub credit_score: Score,
    pub score_band: ScoreBand,
    pub feature_set: FeatureSet,
    pub annual_rate: Rate,
    pub max_loan_amount: Money,
    pub installment: Money,
    pub offers: Vec<LenderOffer>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full pipeline with an explicit random source.
///
/// Total over its inputs: non-positive income gives an all-zero quote and
/// no offers. Checking `monthly_income > 0` is the caller's job (see
/// [`validate_request`]).
pub fn compute_loan_insights<R: Rng + ?Sized>(
    monthly_income: Money,
    occupation: Occupation,
    tenure_years: TenureYears,
    civil_score: Option<i64>,
    rng: &mut R,
) -> LoanInsights {
    let feature_set = simulate_features(occupation);
    let credit_score = match civil_score {
        Some(precomputed) => clamp_score(precomputed),
        None => generate_score(&feature_set),
    };
    debug!("{occupation:?}: civil score {credit_score}");

    let annual_rate = estimate_rate(credit_score);
    let quote = calculate_max_loan(monthly_income, annual_rate, tenure_years);
    debug!(
        "rate {annual_rate}, max loan {}, installment {}",
        quote.max_loan_amount, quote.installment
    );

    let offers = if quote.is_eligible() {
        generate_offers(&quote, credit_score, tenure_years, annual_rate, rng)
    } else {
        Vec::new()
    };

    LoanInsights {
        occupation,
        monthly_income,
        tenure_years,
        credit_score,
        score_band: ScoreBand::from_score(credit_score),
        feature_set,
        annual_rate,
        max_loan_amount: quote.max_loan_amount,
        installment: quote.installment,
        offers,
    }
}

/// The caller-side validation boundary: income must be positive and the
/// tenure one of [`LOAN_TENURES_YEARS`].
pub fn validate_request(input: &LoanInsightsInput) -> LoanInsightsResult<()> {
    if input.monthly_income <= Decimal::ZERO {
        return Err(LoanInsightsError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income must be a positive value.".into(),
        });
    }
    if !is_supported_tenure(input.tenure_years) {
        return Err(LoanInsightsError::InvalidInput {
            field: "tenure_years".into(),
            reason: format!("Tenure must be one of {LOAN_TENURES_YEARS:?} years."),
        });
    }
    Ok(())
}

/// Validate, seed, and run the pipeline, wrapping the result with
/// methodology, assumptions and warnings.
pub fn assess_applicant(
    input: &LoanInsightsInput,
) -> LoanInsightsResult<ComputationOutput<LoanInsights>> {
    let start = Instant::now();
    validate_request(input)?;

    let mut warnings: Vec<String> = Vec::new();
    if input.monthly_income < ADVISORY_MIN_MONTHLY_INCOME
        || input.monthly_income > ADVISORY_MAX_MONTHLY_INCOME
    {
        warnings.push(format!(
            "Monthly income {} is outside the advisory range {ADVISORY_MIN_MONTHLY_INCOME}–{ADVISORY_MAX_MONTHLY_INCOME}.",
            input.monthly_income
        ));
    }
    if let Some(score) = input.civil_score {
        if clamp_score(score) as i64 != score {
            warnings.push(format!(
                "Civil score {score} clamped to the {CIVIL_SCORE_MIN}–{CIVIL_SCORE_MAX} range."
            ));
        }
    }

    let mut rng = rng_from_seed(input.seed);
    let insights = compute_loan_insights(
        input.monthly_income,
        input.occupation,
        input.tenure_years,
        input.civil_score,
        &mut rng,
    );

    if insights.max_loan_amount.is_zero() {
        warnings.push("Income does not support a loan with standard lenders.".into());
    } else if insights
        .offers
        .iter()
        .any(|o| o.lender_name == GENERIC_LENDER_NAME)
    {
        warnings.push(format!(
            "No partner lender offer exceeded {MIN_OFFER_AMOUNT}; showing a generic offer."
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "civil_score_range": [CIVIL_SCORE_MIN, CIVIL_SCORE_MAX],
        "base_annual_rate": BASE_ANNUAL_RATE.to_string(),
        "annual_rate_bounds": [MIN_ANNUAL_RATE.to_string(), MAX_ANNUAL_RATE.to_string()],
        "max_emi_to_income_ratio": MAX_EMI_TO_INCOME_RATIO.to_string(),
        "min_offer_amount": MIN_OFFER_AMOUNT.to_string(),
        "seeded": input.seed.is_some(),
    });

    Ok(with_metadata(
        "Alternative-data civil score with annuity-based affordability",
        &assumptions,
        warnings,
        elapsed,
        insights,
    ))
}

/// Seeded generator when a seed is given, otherwise fresh entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn salaried_input() -> LoanInsightsInput {
        LoanInsightsInput {
            monthly_income: dec!(25_000),
            occupation: Occupation::Salaried,
            tenure_years: 15,
            civil_score: None,
            seed: Some(11),
        }
    }

    #[test]
    fn test_salaried_scenario() {
        let out = assess_applicant(&salaried_input()).unwrap();
        let r = &out.result;
        assert_eq!(r.credit_score, 720);
        assert_eq!(r.score_band, ScoreBand::Good);
        assert_eq!(r.annual_rate, dec!(0.087));
        assert!((r.installment - dec!(11_250)).abs() <= dec!(0.01));
        assert_eq!(r.offers.len(), 2);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_precomputed_score_overrides_features() {
        let mut input = salaried_input();
        input.civil_score = Some(820);
        let out = assess_applicant(&input).unwrap();
        assert_eq!(out.result.credit_score, 820);
        assert_eq!(out.result.score_band, ScoreBand::Excellent);
        // features are still reported
        assert_eq!(out.result.feature_set.len(), 5);
    }

    #[test]
    fn test_out_of_range_score_clamped_with_warning() {
        let mut input = salaried_input();
        input.civil_score = Some(1_050);
        let out = assess_applicant(&input).unwrap();
        assert_eq!(out.result.credit_score, 900);
        assert!(out.warnings.iter().any(|w| w.contains("clamped")));
    }

    #[test]
    fn test_rejects_non_positive_income() {
        let mut input = salaried_input();
        input.monthly_income = Decimal::ZERO;
        match assess_applicant(&input).unwrap_err() {
            LoanInsightsError::InvalidInput { field, .. } => assert_eq!(field, "monthly_income"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unsupported_tenure() {
        let mut input = salaried_input();
        input.tenure_years = 12;
        match assess_applicant(&input).unwrap_err() {
            LoanInsightsError::InvalidInput { field, .. } => assert_eq!(field, "tenure_years"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_core_is_total_for_zero_income() {
        let mut rng = rng_from_seed(Some(5));
        let r = compute_loan_insights(Decimal::ZERO, Occupation::Farmer, 10, None, &mut rng);
        assert_eq!(r.max_loan_amount, Decimal::ZERO);
        assert_eq!(r.installment, Decimal::ZERO);
        assert!(r.offers.is_empty());
    }

    #[test]
    fn test_low_income_warns() {
        let mut input = salaried_input();
        input.monthly_income = dec!(1_000);
        let out = assess_applicant(&input).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("advisory range")));
    }

    #[test]
    fn test_input_defaults_from_json() {
        let input: LoanInsightsInput =
            serde_json::from_str(r#"{"monthly_income": "40000", "occupation": "Farmer / Agricultural Worker"}"#)
                .unwrap();
        assert_eq!(input.occupation, Occupation::Farmer);
        assert_eq!(input.tenure_years, DEFAULT_TENURE_YEARS);
        assert_eq!(input.civil_score, None);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let a = assess_applicant(&salaried_input()).unwrap().result;
        let b = assess_applicant(&salaried_input()).unwrap().result;
        assert_eq!(a, b);
    }
}
