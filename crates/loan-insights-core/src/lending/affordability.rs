use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::time_value::{annuity_present_value, level_installment};
use crate::types::{Money, Rate, TenureYears};

/// Share of monthly income that may go towards the installment.
pub const MAX_EMI_TO_INCOME_RATIO: Rate = dec!(0.45);

const MONTHS_PER_YEAR: u32 = 12;

/// Largest loan the income can service, and the installment on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub max_loan_amount: Money,
    pub installment: Money,
}

impl LoanQuote {
    pub const ZERO: LoanQuote = LoanQuote {
        max_loan_amount: Decimal::ZERO,
        installment: Decimal::ZERO,
    };

    pub fn is_eligible(&self) -> bool {
        self.max_loan_amount > Decimal::ZERO
    }
}

/// Size the maximum loan from the EMI-to-income cap and price its installment.
///
/// Never fails. Non-positive income, or a principal that overflows, yields
/// [`LoanQuote::ZERO`]. An installment that overflows is reported as the
/// monthly income itself. Both figures are rounded to 2 dp.
pub fn calculate_max_loan(
    monthly_income: Money,
    annual_rate: Rate,
    tenure_years: TenureYears,
) -> LoanQuote {
    let max_installment = monthly_income
        .checked_mul(MAX_EMI_TO_INCOME_RATIO)
        .unwrap_or(Decimal::ZERO);
    let monthly_rate = annual_rate / Decimal::from(MONTHS_PER_YEAR);
    let payments = tenure_years.saturating_mul(MONTHS_PER_YEAR);

    let max_loan = annuity_present_value(monthly_rate, payments, max_installment)
        .unwrap_or_else(|| {
            warn!("maximum loan overflowed for income {monthly_income} at {annual_rate}; treating as ineligible");
            Decimal::ZERO
        });

    if max_loan <= Decimal::ZERO {
        debug!("no serviceable principal for income {monthly_income}");
        return LoanQuote::ZERO;
    }

    let installment = level_installment(monthly_rate, payments, max_loan).unwrap_or_else(|| {
        warn!("installment overflowed for principal {max_loan}; reporting monthly income instead");
        monthly_income
    });

    LoanQuote {
        max_loan_amount: max_loan.round_dp(2),
        installment: installment.round_dp(2),
    }
}

/// Installment on an arbitrary principal at an annual rate over whole years.
///
/// `None` only when the arithmetic overflows.
pub fn monthly_installment(
    principal: Money,
    annual_rate: Rate,
    tenure_years: TenureYears,
) -> Option<Money> {
    let monthly_rate = annual_rate / Decimal::from(MONTHS_PER_YEAR);
    level_installment(
        monthly_rate,
        tenure_years.saturating_mul(MONTHS_PER_YEAR),
        principal,
    )
}
