mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::insights::{ApplicantArgs, ExplainArgs};
use commands::lending::{AffordabilityArgs, OffersArgs};
use commands::profile::{FeaturesArgs, RateArgs, ScoreArgs};

/// Alternative-data credit scores and home loan eligibility estimates
#[derive(Parser)]
#[command(
    name = "loan-insights",
    version,
    about = "Alternative-data credit scores and home loan eligibility estimates",
    long_about = "Estimates a civil score from occupation-based alternative data signals, \
                  prices an interest rate from it, sizes the largest home loan a monthly \
                  income can service, and lists illustrative lender offers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full assessment: score, rate, maximum loan, EMI and offers
    Insights(ApplicantArgs),
    /// Plain-language summary of the assessment (optionally exported to a file)
    Explain(ExplainArgs),
    /// Simulated alternative-data features for an occupation
    Features(FeaturesArgs),
    /// Civil score from features
    Score(ScoreArgs),
    /// Annual interest rate implied by a civil score
    Rate(RateArgs),
    /// Maximum loan and EMI for an income, rate and tenure
    Affordability(AffordabilityArgs),
    /// Synthetic lender offers for a maximum loan
    Offers(OffersArgs),
    /// List supported occupations and tenures
    Occupations,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Insights(args) => commands::insights::run_insights(args),
        Commands::Explain(args) => match commands::insights::run_explain(args) {
            Ok(text) => {
                println!("{}", text);
                return;
            }
            Err(e) => Err(e),
        },
        Commands::Features(args) => commands::profile::run_features(args),
        Commands::Score(args) => commands::profile::run_score(args),
        Commands::Rate(args) => commands::profile::run_rate(args),
        Commands::Affordability(args) => commands::lending::run_affordability(args),
        Commands::Offers(args) => commands::lending::run_offers(args),
        Commands::Occupations => commands::profile::run_occupations(),
        Commands::Version => {
            println!("loan-insights {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
