use std::fs;

use clap::Args;
use log::info;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_insights_core::insights::{assess_applicant, LoanInsightsInput};
use loan_insights_core::lending::DEFAULT_TENURE_YEARS;
use loan_insights_core::narrative;
use loan_insights_core::profile::Occupation;

use crate::input;

/// Applicant details shared by `insights` and `explain`
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ApplicantArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly income in rupees
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Occupation label or slug (see `occupations`); unknown values use the baseline profile
    #[arg(long, default_value = "other")]
    pub occupation: String,

    /// Loan tenure in years (5, 10, 15, 20, 25 or 30)
    #[arg(long, default_value_t = DEFAULT_TENURE_YEARS)]
    pub tenure: u32,

    /// Precomputed civil score, replaces the simulated one
    #[arg(long)]
    pub civil_score: Option<i64>,

    /// Seed for reproducible lender offers
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the narrative summary
#[derive(Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub applicant: ApplicantArgs,

    /// Also write the summary to a text file (default name if no path given)
    #[arg(long)]
    pub export: Option<Option<String>>,
}

fn applicant_input(args: &ApplicantArgs) -> Result<LoanInsightsInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let occupation = Occupation::lookup(&args.occupation).unwrap_or_else(|| {
        log::warn!(
            "unrecognised occupation '{}', using the baseline profile",
            args.occupation
        );
        Occupation::Other
    });

    Ok(LoanInsightsInput {
        monthly_income: args
            .income
            .ok_or("--income is required (or provide --input)")?,
        occupation,
        tenure_years: args.tenure,
        civil_score: args.civil_score,
        seed: args.seed,
    })
}

pub fn run_insights(args: ApplicantArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = applicant_input(&args)?;
    let result = assess_applicant(&request)?;
    Ok(serde_json::to_value(result)?)
}

/// Returns the summary text; writes it to disk as well when `--export` is set.
pub fn run_explain(args: ExplainArgs) -> Result<String, Box<dyn std::error::Error>> {
    let request = applicant_input(&args.applicant)?;
    let result = assess_applicant(&request)?;
    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    let text = narrative::generate_explanation(&result.result);

    if let Some(target) = args.export {
        let path = target.unwrap_or_else(|| narrative::summary_file_name(&result.result));
        fs::write(&path, &text).map_err(|e| format!("Failed to write '{}': {}", path, e))?;
        info!("summary written to {path}");
    }

    Ok(text)
}
