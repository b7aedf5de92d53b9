//! Synthetic lender offers.
//!
//! Two partner lenders re-price the base rate around their own score
//! reference and offer a randomly haircut share of the maximum loan. When
//! neither clears the minimum ticket size a generic lender steps in with a
//! fixed haircut, so an eligible applicant always sees at least one option.

use log::{debug, warn};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::affordability::{monthly_installment, LoanQuote};
use crate::types::{Money, Percent, Rate, Score, TenureYears};

/// Offers at or below this amount are not shown.
pub const MIN_OFFER_AMOUNT: Money = dec!(10_000);

/// Static pricing rules for one partner lender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LenderProfile {
    pub lender_name: &'static str,
    pub product_name: &'static str,
    /// Added to the base annual rate.
    pub rate_offset: Rate,
    /// Score at which the lender applies no score adjustment.
    pub score_reference: Score,
    /// Rate reduction per 100 points above the reference.
    pub rate_slope_per_100: Rate,
    pub rate_floor: Rate,
    pub rate_cap: Rate,
    /// The offered share of the maximum loan is drawn uniformly from
    /// `[amount_factor_low, amount_factor_high)`.
    pub amount_factor_low: Decimal,
    pub amount_factor_high: Decimal,
    pub notes: &'static str,
}

impl LenderProfile {
    /// Lender-specific annual rate for a score, clamped to the lender's band.
    pub fn annual_rate(&self, base_rate: Rate, score: Score) -> Rate {
        let score_distance =
            (Decimal::from(score) - Decimal::from(self.score_reference)) / dec!(100);
        base_rate
            .checked_add(self.rate_offset)
            .and_then(|rate| rate.checked_sub(score_distance * self.rate_slope_per_100))
            .map_or(self.rate_cap, |rate| rate.clamp(self.rate_floor, self.rate_cap))
    }

    fn draw_amount_factor<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let unit = Decimal::from_f64(rng.gen::<f64>()).unwrap_or(Decimal::ZERO);
        self.amount_factor_low + (self.amount_factor_high - self.amount_factor_low) * unit
    }
}

/// Partner lenders, in display order.
pub const PARTNER_LENDERS: [LenderProfile; 2] = [
    LenderProfile {
        lender_name: "Inclusive Housing Finance Ltd.",
        product_name: "Sahay Home Loan",
        rate_offset: dec!(0.005),
        score_reference: 600,
        rate_slope_per_100: dec!(0.001),
        rate_floor: dec!(0.075),
        rate_cap: dec!(0.16),
        amount_factor_low: dec!(0.90),
        amount_factor_high: dec!(0.98),
        notes: "Focuses on financial inclusion, flexible documentation (simulated).",
    },
    LenderProfile {
        lender_name: "Progressive National Bank",
        product_name: "MyFirstHome Loan",
        rate_offset: dec!(-0.002),
        score_reference: 650,
        rate_slope_per_100: dec!(0.002),
        rate_floor: dec!(0.07),
        rate_cap: dec!(0.14),
        amount_factor_low: dec!(0.95),
        amount_factor_high: dec!(1.00),
        notes: "Competitive rates, standard processing (simulated).",
    },
];

pub const GENERIC_LENDER_NAME: &str = "Generic Lender Co.";
const GENERIC_PRODUCT_NAME: &str = "Basic Home Loan";
const GENERIC_NOTES: &str = "A basic loan option (simulated).";
const GENERIC_AMOUNT_FACTOR: Decimal = dec!(0.9);
/// Percentage points added to the base rate.
const GENERIC_RATE_PREMIUM: Percent = dec!(1.0);
const GENERIC_INSTALLMENT_MARKUP: Decimal = dec!(1.05);

/// A single lender's offer as displayed to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LenderOffer {
    pub lender_name: String,
    pub product_name: String,
    pub offered_amount: Money,
    /// Annual rate in percent, 2 dp.
    pub rate_percent: Percent,
    pub tenure_years: TenureYears,
    pub estimated_installment: Money,
    pub notes: String,
}

/// Build the ordered offer list for a quote.
///
/// Returns an empty list when the quote is not eligible. The random source
/// only drives the partner lenders' amount haircuts.
pub fn generate_offers<R: Rng + ?Sized>(
    quote: &LoanQuote,
    score: Score,
    tenure_years: TenureYears,
    base_rate: Rate,
    rng: &mut R,
) -> Vec<LenderOffer> {
    let mut offers: Vec<LenderOffer> = PARTNER_LENDERS
        .iter()
        .filter_map(|lender| partner_offer(lender, quote, score, tenure_years, base_rate, &mut *rng))
        .collect();

    if offers.is_empty() && quote.is_eligible() {
        debug!("no partner lender cleared {MIN_OFFER_AMOUNT}; adding generic offer");
        offers.push(generic_offer(quote, tenure_years, base_rate));
    }

    offers
}

fn partner_offer<R: Rng + ?Sized>(
    lender: &LenderProfile,
    quote: &LoanQuote,
    score: Score,
    tenure_years: TenureYears,
    base_rate: Rate,
    rng: &mut R,
) -> Option<LenderOffer> {
    let rate = lender.annual_rate(base_rate, score);
    let amount = round_to_thousand(quote.max_loan_amount * lender.draw_amount_factor(rng));

    if amount <= MIN_OFFER_AMOUNT {
        debug!("{} offer of {amount} below minimum", lender.lender_name);
        return None;
    }

    let installment = monthly_installment(amount, rate, tenure_years).unwrap_or_else(|| {
        warn!("{} installment overflowed; using straight-line", lender.lender_name);
        monthly_installment(amount, Decimal::ZERO, tenure_years).unwrap_or(Decimal::ZERO)
    });

    Some(LenderOffer {
        lender_name: lender.lender_name.to_string(),
        product_name: lender.product_name.to_string(),
        offered_amount: amount,
        rate_percent: (rate * dec!(100)).round_dp(2),
        tenure_years,
        estimated_installment: installment.round_dp(2),
        notes: lender.notes.to_string(),
    })
}

/// The installment is the base quote's marked up by 5%, not re-amortised.
/// A markup that overflows leaves the base installment unchanged.
fn generic_offer(quote: &LoanQuote, tenure_years: TenureYears, base_rate: Rate) -> LenderOffer {
    let installment = quote
        .installment
        .checked_mul(GENERIC_INSTALLMENT_MARKUP)
        .unwrap_or_else(|| {
            warn!(
                "generic installment markup overflowed for {}; using base installment",
                quote.installment
            );
            quote.installment
        });
    let rate_percent = base_rate
        .checked_mul(dec!(100))
        .and_then(|pct| pct.round_dp(2).checked_add(GENERIC_RATE_PREMIUM))
        .unwrap_or_else(|| {
            warn!("generic rate overflowed for base rate {base_rate}; capping");
            Decimal::MAX
        });

    LenderOffer {
        lender_name: GENERIC_LENDER_NAME.to_string(),
        product_name: GENERIC_PRODUCT_NAME.to_string(),
        offered_amount: round_to_thousand(quote.max_loan_amount * GENERIC_AMOUNT_FACTOR),
        rate_percent,
        tenure_years,
        estimated_installment: installment.round_dp(2),
        notes: GENERIC_NOTES.to_string(),
    }
}

/// Nearest thousand, ties to even.
fn round_to_thousand(amount: Money) -> Money {
    (amount / dec!(1000)).round() * dec!(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quote(max_loan: Money, installment: Money) -> LoanQuote {
        LoanQuote {
            max_loan_amount: max_loan,
            installment,
        }
    }

    #[test]
    fn test_round_to_thousand() {
        assert_eq!(round_to_thousand(dec!(943_499.99)), dec!(943_000));
        assert_eq!(round_to_thousand(dec!(943_500)), dec!(944_000));
        assert_eq!(round_to_thousand(dec!(10_500)), dec!(10_000));
    }

    #[test]
    fn test_lender_rates() {
        let [inclusive, progressive] = PARTNER_LENDERS;
        // 0.087 + 0.005 - 1.2 * 0.001
        assert_eq!(inclusive.annual_rate(dec!(0.087), 720), dec!(0.0908));
        // 0.087 - 0.002 - 0.7 * 0.002
        assert_eq!(progressive.annual_rate(dec!(0.087), 720), dec!(0.0836));
    }

    #[test]
    fn test_lender_rates_clamped() {
        let [inclusive, progressive] = PARTNER_LENDERS;
        assert_eq!(inclusive.annual_rate(dec!(0.16), 300), dec!(0.16));
        assert_eq!(progressive.annual_rate(dec!(0.05), 900), dec!(0.07));
    }

    #[test]
    fn test_high_score_helps_progressive_more() {
        let [inclusive, progressive] = PARTNER_LENDERS;
        let inclusive_gain = inclusive.annual_rate(dec!(0.09), 600) - inclusive.annual_rate(dec!(0.09), 800);
        let progressive_gain =
            progressive.annual_rate(dec!(0.09), 600) - progressive.annual_rate(dec!(0.09), 800);
        assert!(progressive_gain > inclusive_gain);
    }

    #[test]
    fn test_zero_quote_has_no_offers() {
        let mut rng = StdRng::seed_from_u64(7);
        let offers = generate_offers(&LoanQuote::ZERO, 720, 15, dec!(0.087), &mut rng);
        assert!(offers.is_empty());
    }

    #[test]
    fn test_partner_offers_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let q = quote(dec!(1_000_000), dec!(9_800));
        let offers = generate_offers(&q, 720, 20, dec!(0.087), &mut rng);
        assert_eq!(offers.len(), 2);

        let inclusive = &offers[0];
        assert_eq!(inclusive.lender_name, "Inclusive Housing Finance Ltd.");
        assert!(inclusive.offered_amount >= dec!(900_000) && inclusive.offered_amount <= dec!(980_000));
        assert!(inclusive.rate_percent >= dec!(7.5) && inclusive.rate_percent <= dec!(16));

        let progressive = &offers[1];
        assert_eq!(progressive.lender_name, "Progressive National Bank");
        assert!(progressive.offered_amount >= dec!(950_000) && progressive.offered_amount <= dec!(1_000_000));
        assert!(progressive.rate_percent >= dec!(7) && progressive.rate_percent <= dec!(14));

        for offer in &offers {
            assert!(offer.offered_amount > MIN_OFFER_AMOUNT);
            assert_eq!(offer.offered_amount % dec!(1000), Decimal::ZERO);
            assert_eq!(offer.tenure_years, 20);
        }
    }

    #[test]
    fn test_partner_installment_is_amortised() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = quote(dec!(2_000_000), dec!(20_000));
        let offers = generate_offers(&q, 650, 10, dec!(0.09), &mut rng);
        for offer in &offers {
            let rate = offer.rate_percent / dec!(100);
            let expected = monthly_installment(offer.offered_amount, rate, 10).unwrap();
            assert!((offer.estimated_installment - expected).abs() <= dec!(0.01));
        }
    }

    #[test]
    fn test_generic_fallback_when_partners_too_small() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = quote(dec!(10_500), dec!(120.00));
        let offers = generate_offers(&q, 560, 5, dec!(0.091), &mut rng);
        assert_eq!(offers.len(), 1);
        let generic = &offers[0];
        assert_eq!(generic.lender_name, GENERIC_LENDER_NAME);
        // 90% of 10,500 = 9,450 -> 9,000
        assert_eq!(generic.offered_amount, dec!(9_000));
        assert_eq!(generic.rate_percent, dec!(10.10));
        // 120 * 1.05, not re-amortised
        assert_eq!(generic.estimated_installment, dec!(126));
    }

    #[test]
    fn test_tiny_quote_gets_zero_amount_generic_offer() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = quote(dec!(21.68), dec!(0.45));
        let offers = generate_offers(&q, 600, 15, dec!(0.09), &mut rng);
        assert_eq!(offers.len(), 1);
        // 90% of 21.68 rounds to the nearest thousand as zero
        assert_eq!(offers[0].offered_amount, Decimal::ZERO);
        assert_eq!(offers[0].estimated_installment, dec!(0.47));
    }

    #[test]
    fn test_generic_markup_overflow_keeps_base_installment() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = quote(dec!(10_500), Decimal::MAX);
        let offers = generate_offers(&q, 600, 5, dec!(0.09), &mut rng);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].lender_name, GENERIC_LENDER_NAME);
        assert_eq!(offers[0].estimated_installment, Decimal::MAX);
        assert_eq!(offers[0].offered_amount, dec!(9_000));
    }

    #[test]
    fn test_generic_rate_overflow_is_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = quote(dec!(10_500), dec!(120.00));
        let offers = generate_offers(&q, 600, 5, Decimal::MAX, &mut rng);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].rate_percent, Decimal::MAX);
    }

    #[test]
    fn test_same_seed_same_offers() {
        let q = quote(dec!(1_250_000), dec!(11_000));
        let a = generate_offers(&q, 700, 15, dec!(0.0875), &mut StdRng::seed_from_u64(99));
        let b = generate_offers(&q, 700, 15, dec!(0.0875), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
