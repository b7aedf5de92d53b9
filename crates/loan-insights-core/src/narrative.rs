//! Plain-language summary of an assessment, and the file name it is
//! exported under. Pure templating over [`LoanInsights`]; no arithmetic
//! beyond display rounding.

use std::fmt::{self, Write};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::insights::LoanInsights;
use crate::lending::affordability::MAX_EMI_TO_INCOME_RATIO;
use crate::scoring::score::CIVIL_SCORE_MAX;
use crate::types::Money;

const CURRENCY_SYMBOL: &str = "₹";

/// Render the four-section explanation for an assessment.
pub fn generate_explanation(insights: &LoanInsights) -> String {
    Explanation(insights).to_string()
}

/// [`fmt::Display`] view of the explanation, for writing it straight into
/// any formatter.
#[derive(Debug, Clone, Copy)]
pub struct Explanation<'a>(pub &'a LoanInsights);

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_explanation(f, self.0)
    }
}

fn write_explanation<W: Write>(out: &mut W, r: &LoanInsights) -> fmt::Result {
    writeln!(out, "Namaste! Here's an overview of your home loan possibilities:")?;
    writeln!(out)?;

    writeln!(out, "**1. Your Financial Snapshot:**")?;
    writeln!(out, "- **Occupation:** {}", r.occupation.label())?;
    writeln!(out, "- **Monthly Income:** {}", format_rupees(r.monthly_income))?;
    writeln!(
        out,
        "- **Alternative Data Score:** Your score is {} (out of {CIVIL_SCORE_MAX}), which is considered {} \
         based on our alternative data assessment. It reflects signals such as income patterns and digital \
         engagement, helping lenders understand your creditworthiness without a traditional credit history.",
        r.credit_score, r.score_band
    )?;
    writeln!(out)?;

    writeln!(out, "**2. Estimated Loan Eligibility:**")?;
    writeln!(
        out,
        "- You might qualify for a maximum home loan of approximately **{}**.",
        format_rupees(r.max_loan_amount)
    )?;
    writeln!(
        out,
        "- For this amount, your estimated Equated Monthly Instalment (EMI) would be around **{}**.",
        format_rupees(r.installment)
    )?;
    writeln!(
        out,
        "This estimate uses your income, your score, and standard lending guidelines, assuming up to {}% \
         of your income can go towards EMI.",
        (MAX_EMI_TO_INCOME_RATIO * dec!(100)).round_dp(0)
    )?;
    writeln!(out)?;

    if r.offers.is_empty() {
        writeln!(out, "**3. Loan Options:**")?;
        writeln!(
            out,
            "Based on the current inputs, specific bank offers couldn't be generated. This might be due to a \
             very low estimated loan eligibility. Consider adjusting your inputs or improving your financial profile."
        )?;
        writeln!(out)?;
    } else {
        writeln!(out, "**3. Recommended Loan Options (Simulated):**")?;
        for (i, offer) in r.offers.iter().enumerate() {
            writeln!(
                out,
                "   **Option {}: {} - {}**",
                i + 1,
                offer.lender_name,
                offer.product_name
            )?;
            writeln!(out, "   - Loan Amount: {}", format_rupees(offer.offered_amount))?;
            writeln!(out, "   - Interest Rate: {:.2}% p.a.", offer.rate_percent)?;
            writeln!(
                out,
                "   - EMI: {} for {} years.",
                format_rupees(offer.estimated_installment),
                offer.tenure_years
            )?;
            writeln!(out, "   - *Why this might fit you:* {}", offer.notes)?;
            writeln!(out)?;
        }
        writeln!(
            out,
            "These are illustrative options. Actual terms may vary. Your score helps these lenders consider \
             you more favorably."
        )?;
        writeln!(out)?;
    }

    writeln!(out, "**4. Next Steps & Disclaimer:**")?;
    writeln!(out, "- Use this information as a guide when you approach banks.")?;
    writeln!(out, "- Always verify terms directly with lenders before making any decisions.")?;
    writeln!(out, "- We encourage responsible borrowing.")?;
    writeln!(out)?;
    write!(out, "We hope this helps you on your journey to owning a home!")
}

/// Export file name for the summary: income and the occupation label with
/// everything but ASCII letters and digits removed.
pub fn summary_file_name(insights: &LoanInsights) -> String {
    let occupation: String = insights
        .occupation
        .label()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!(
        "LoanSummary_{}_{}.txt",
        insights.monthly_income.normalize(),
        occupation
    )
}

/// Whole rupees with comma thousands separators, ties to even.
pub fn format_rupees(amount: Money) -> String {
    let rounded = amount.round_dp(0);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{CURRENCY_SYMBOL}{grouped}")
}
