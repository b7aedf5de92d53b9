//! Annuity arithmetic shared by the affordability and offer calculations.
//!
//! Amounts are positive and rates are periodic (monthly for every caller in
//! this crate). Both helpers return `None` when an intermediate value leaves
//! the `Decimal` range, so callers pick their own fallback.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::types::{Money, Rate};

/// Present value of an ordinary annuity: `pmt * (1 - (1 + r)^-n) / r`.
///
/// A zero rate degenerates to `pmt * n`.
pub fn annuity_present_value(rate: Rate, nper: u32, pmt: Money) -> Option<Money> {
    if rate.is_zero() {
        return pmt.checked_mul(Decimal::from(nper));
    }

    let factor = (Decimal::ONE + rate).checked_powu(u64::from(nper))?;
    if factor.is_zero() {
        return None;
    }

    let discount = Decimal::ONE.checked_div(factor)?;
    pmt.checked_mul(Decimal::ONE - discount)?.checked_div(rate)
}

/// Level installment amortising `principal` over `nper` periods:
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`.
///
/// Zero rate, and a denominator that vanishes despite a non-zero rate, both
/// fall back to the straight-line `P / n` (zero when `n` is zero).
pub fn level_installment(rate: Rate, nper: u32, principal: Money) -> Option<Money> {
    if rate.is_zero() {
        return Some(straight_line(principal, nper));
    }

    let factor = (Decimal::ONE + rate).checked_powu(u64::from(nper))?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        warn!("annuity denominator is zero at periodic rate {rate} over {nper} periods; using straight-line installment");
        return Some(straight_line(principal, nper));
    }

    principal
        .checked_mul(rate)?
        .checked_mul(factor)?
        .checked_div(denominator)
}

fn straight_line(principal: Money, nper: u32) -> Money {
    if nper == 0 {
        Decimal::ZERO
    } else {
        principal / Decimal::from(nper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_present_value_basic() {
        // 100 * (1 - 1/1.08^10) / 0.08 ≈ 671.01
        let result = annuity_present_value(dec!(0.08), 10, dec!(100)).unwrap();
        assert!((result - dec!(671.01)).abs() < dec!(0.01));
    }

    #[test]
    fn test_present_value_zero_rate() {
        let result = annuity_present_value(Decimal::ZERO, 12, dec!(250)).unwrap();
        assert_eq!(result, dec!(3000));
    }

    #[test]
    fn test_present_value_overflow_is_none() {
        assert!(annuity_present_value(dec!(0.0075), 180, Decimal::MAX).is_none());
    }

    #[test]
    fn test_installment_inverts_present_value() {
        let rate = dec!(0.0075);
        let pv = annuity_present_value(rate, 180, dec!(11250)).unwrap();
        let pmt = level_installment(rate, 180, pv).unwrap();
        assert!((pmt - dec!(11250)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_installment_zero_rate_is_straight_line() {
        let result = level_installment(Decimal::ZERO, 120, dec!(1_200_000)).unwrap();
        assert_eq!(result, dec!(10_000));
    }

    #[test]
    fn test_installment_zero_periods() {
        assert_eq!(level_installment(Decimal::ZERO, 0, dec!(5000)), Some(Decimal::ZERO));
        // (1 + r)^0 - 1 == 0, so the non-zero rate path also lands on straight-line
        assert_eq!(level_installment(dec!(0.01), 0, dec!(5000)), Some(Decimal::ZERO));
    }

    #[test]
    fn test_installment_overflow_is_none() {
        assert!(level_installment(dec!(0.0075), 360, Decimal::MAX).is_none());
    }
}
