use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use loan_insights_core::insights::rng_from_seed;
use loan_insights_core::lending::{
    calculate_max_loan, generate_offers, LoanQuote, DEFAULT_TENURE_YEARS,
};
use loan_insights_core::types::{Money, Rate, Score, TenureYears};

use crate::input;

/// Arguments for maximum loan and EMI estimation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AffordabilityArgs {
    /// Monthly income
    #[arg(long)]
    pub income: Decimal,

    /// Annual interest rate as a decimal (0.09 = 9%)
    #[arg(long)]
    pub rate: Decimal,

    /// Loan tenure in years
    #[arg(long, default_value_t = DEFAULT_TENURE_YEARS)]
    pub tenure: u32,
}

/// Arguments for synthetic lender offers
#[derive(Args)]
pub struct OffersArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Maximum loan amount from `affordability`
    #[arg(long)]
    pub max_loan: Option<Decimal>,

    /// Installment on the maximum loan
    #[arg(long)]
    pub installment: Option<Decimal>,

    /// Civil score
    #[arg(long)]
    pub score: Option<u32>,

    /// Base annual rate as a decimal
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan tenure in years
    #[arg(long, default_value_t = DEFAULT_TENURE_YEARS)]
    pub tenure: u32,

    /// Seed for reproducible amount haircuts
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OffersRequest {
    max_loan_amount: Money,
    installment: Money,
    civil_score: Score,
    base_annual_rate: Rate,
    #[serde(default = "default_tenure")]
    tenure_years: TenureYears,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_tenure() -> TenureYears {
    DEFAULT_TENURE_YEARS
}

pub fn run_affordability(args: AffordabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote = calculate_max_loan(args.income, args.rate, args.tenure);
    Ok(json!({
        "monthly_income": args.income,
        "annual_rate": args.rate,
        "tenure_years": args.tenure,
        "max_loan_amount": quote.max_loan_amount,
        "installment": quote.installment,
        "eligible": quote.is_eligible(),
    }))
}

pub fn run_offers(args: OffersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: OffersRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        OffersRequest {
            max_loan_amount: args
                .max_loan
                .ok_or("--max-loan is required (or provide --input)")?,
            installment: args
                .installment
                .ok_or("--installment is required (or provide --input)")?,
            civil_score: args.score.ok_or("--score is required (or provide --input)")?,
            base_annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure_years: args.tenure,
            seed: args.seed,
        }
    };

    let quote = LoanQuote {
        max_loan_amount: request.max_loan_amount,
        installment: request.installment,
    };
    let mut rng = rng_from_seed(request.seed);
    let offers = generate_offers(
        &quote,
        request.civil_score,
        request.tenure_years,
        request.base_annual_rate,
        &mut rng,
    );
    Ok(json!({ "offers": offers }))
}
