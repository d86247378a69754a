//! Minor-currency-unit conversions and the curation fee.
//!
//! Every monetary amount sent to the payment provider is an integer number
//! of minor units (cents for USD). Rounding happens exactly once per
//! amount, at the decimal-to-minor-unit boundary; minor-unit integers are
//! never re-rounded.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// The finder's fee rate applied to every checkout subtotal (10%).
pub const CURATION_FEE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Convert a standard-unit decimal amount to minor units.
///
/// Rounds to the nearest cent, half away from zero. Amounts too large to
/// scale or to fit an `i64` come back as 0; callers supply arbitrary
/// decimals and an overflow must not abort the request.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> i64 {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| {
            scaled
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .unwrap_or(0)
}

/// Convert a minor-unit amount back to a standard-unit decimal.
#[must_use]
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

/// The curation fee, in minor units, for a minor-unit subtotal.
///
/// `round(subtotal * 0.10)`, half away from zero. Applied to the already
/// rounded subtotal so the fee rounding never compounds with line-item
/// rounding.
#[must_use]
pub fn curation_fee(subtotal_minor: i64) -> i64 {
    (Decimal::from(subtotal_minor) * CURATION_FEE_RATE)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_to_minor_units_exact() {
        assert_eq!(to_minor_units(Decimal::from_str("10.00").unwrap()), 1000);
        assert_eq!(to_minor_units(Decimal::from_str("1234.50").unwrap()), 123_450);
    }

    #[test]
    fn test_to_minor_units_rounds_half_away_from_zero() {
        assert_eq!(to_minor_units(Decimal::from_str("0.005").unwrap()), 1);
        assert_eq!(to_minor_units(Decimal::from_str("0.015").unwrap()), 2);
        assert_eq!(to_minor_units(Decimal::from_str("19.994").unwrap()), 1999);
    }

    #[test]
    fn test_to_minor_units_overflow_degrades_to_zero() {
        assert_eq!(to_minor_units(Decimal::MAX), 0);
        assert_eq!(to_minor_units(Decimal::MIN), 0);
    }

    #[test]
    fn test_curation_fee_ten_percent() {
        assert_eq!(curation_fee(2000), 200);
        assert_eq!(curation_fee(0), 0);
        // 10% of 1005 is 100.5, rounds up
        assert_eq!(curation_fee(1005), 101);
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(from_minor_units(2200), Decimal::from_str("22.00").unwrap());
        assert_eq!(from_minor_units(1), Decimal::from_str("0.01").unwrap());
    }

    #[test]
    fn test_fee_rate_constant() {
        assert_eq!(CURATION_FEE_RATE, Decimal::from_str("0.10").unwrap());
    }
}
