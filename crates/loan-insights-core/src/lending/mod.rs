//! Affordability (maximum loan and installment) and the synthetic lender
//! offers built on top of it.

pub mod affordability;
pub mod offers;

pub use affordability::{calculate_max_loan, monthly_installment, LoanQuote};
pub use offers::{generate_offers, LenderOffer, LenderProfile};

use crate::types::TenureYears;

/// Repayment terms the product is offered at.
pub const LOAN_TENURES_YEARS: [TenureYears; 6] = [5, 10, 15, 20, 25, 30];

pub const DEFAULT_TENURE_YEARS: TenureYears = 15;

pub fn is_supported_tenure(tenure_years: TenureYears) -> bool {
    LOAN_TENURES_YEARS.contains(&tenure_years)
}
