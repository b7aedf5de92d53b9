use loan_insights_core::lending::offers::{GENERIC_LENDER_NAME, MIN_OFFER_AMOUNT, PARTNER_LENDERS};
use loan_insights_core::lending::{calculate_max_loan, generate_offers, LoanQuote};
use loan_insights_core::time_value::annuity_present_value;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Affordability
// ===========================================================================

#[test]
fn test_principal_reconstructs_from_installment() {
    let quote = calculate_max_loan(dec!(25_000), dec!(0.09), 15);
    assert!((quote.installment - dec!(25_000) * dec!(0.45)).abs() <= dec!(0.01));

    let rebuilt = annuity_present_value(dec!(0.09) / dec!(12), 180, quote.installment).unwrap();
    assert!(
        (rebuilt - quote.max_loan_amount).abs() <= Decimal::ONE,
        "rebuilt {rebuilt} vs {}",
        quote.max_loan_amount
    );
}

#[test]
fn test_quote_rounded_to_cents() {
    let quote = calculate_max_loan(dec!(37_123.45), dec!(0.0825), 20);
    assert_eq!(quote.max_loan_amount, quote.max_loan_amount.round_dp(2));
    assert_eq!(quote.installment, quote.installment.round_dp(2));
}

#[test]
fn test_zero_income_quote() {
    assert_eq!(calculate_max_loan(Decimal::ZERO, dec!(0.09), 15), LoanQuote::ZERO);
}

#[test]
fn test_higher_rate_lends_less() {
    let cheap = calculate_max_loan(dec!(50_000), dec!(0.07), 20);
    let dear = calculate_max_loan(dec!(50_000), dec!(0.15), 20);
    assert!(cheap.max_loan_amount > dear.max_loan_amount);
}

// ===========================================================================
// Offers
// ===========================================================================

#[test]
fn test_no_offers_for_zero_loan() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate_offers(&LoanQuote::ZERO, 650, 15, dec!(0.09), &mut rng).is_empty());
}

#[test]
fn test_million_loan_offers_within_lender_bands() {
    let quote = LoanQuote {
        max_loan_amount: dec!(1_000_000),
        installment: dec!(10_142.67),
    };
    for seed in 0..25u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let offers = generate_offers(&quote, 744, 15, dec!(0.0864), &mut rng);
        assert!((1..=3).contains(&offers.len()));
        for offer in &offers {
            assert!(offer.offered_amount > MIN_OFFER_AMOUNT);
            let lender = PARTNER_LENDERS
                .iter()
                .find(|l| l.lender_name == offer.lender_name)
                .expect("only partner lenders for a large loan");
            let rate = offer.rate_percent / dec!(100);
            assert!(rate >= lender.rate_floor && rate <= lender.rate_cap);
        }
    }
}

#[test]
fn test_generic_offer_only_when_partners_fail() {
    let small = LoanQuote {
        max_loan_amount: dec!(10_800),
        installment: dec!(140.00),
    };
    let mut rng = StdRng::seed_from_u64(4);
    let offers = generate_offers(&small, 600, 5, dec!(0.09), &mut rng);
    // partner amounts round to 10,000 or 11,000 here, so either a partner
    // clears the threshold or the generic lender stands in alone
    assert!(!offers.is_empty());
    if offers.iter().any(|o| o.lender_name == GENERIC_LENDER_NAME) {
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].estimated_installment, dec!(147));
        assert_eq!(offers[0].rate_percent, dec!(10));
    }
}

#[test]
fn test_offer_order_is_stable() {
    let quote = LoanQuote {
        max_loan_amount: dec!(3_000_000),
        installment: dec!(27_000),
    };
    let mut rng = StdRng::seed_from_u64(13);
    let names: Vec<String> = generate_offers(&quote, 800, 30, dec!(0.0850), &mut rng)
        .into_iter()
        .map(|o| o.lender_name)
        .collect();
    assert_eq!(names, vec!["Inclusive Housing Finance Ltd.", "Progressive National Bank"]);
}
