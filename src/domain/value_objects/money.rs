//! # Monetary Conversion
//!
//! Re-denomination of native-currency amounts into the target currency.
//!
//! The rate is native-per-target, so conversion divides by the rate. The
//! result is rounded half-up to exactly two decimal places, independently
//! per field, matching how the fee quote's monetary fields are rewritten.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a native-currency amount into the target currency.
///
/// Divides `native` by `rate` and rounds half-up to two decimal places.
/// Returns `None` when the inputs cannot produce a representable result
/// (non-finite values, non-positive rate); callers leave the original
/// amount untouched in that case.
#[must_use]
pub fn redenominate(native: f64, rate: f64) -> Option<f64> {
    if !native.is_finite() || !rate.is_finite() || rate <= 0.0 {
        return None;
    }
    let converted = Decimal::from_f64(native / rate)?;
    converted
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_the_rate() {
        assert_eq!(redenominate(100.0, 20.0), Some(5.0));
        assert_eq!(redenominate(20.0, 20.0), Some(1.0));
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 100 / 25000 = 0.004, which rounds to zero at two decimals.
        assert_eq!(redenominate(100.0, 25000.0), Some(0.0));
        assert_eq!(redenominate(12345.0, 20.0), Some(617.25));
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        // 1 / 8 = 0.125 is exactly representable; half-up gives 0.13.
        assert_eq!(redenominate(1.0, 8.0), Some(0.13));
    }

    #[test]
    fn unusable_rate_yields_none() {
        assert_eq!(redenominate(100.0, 0.0), None);
        assert_eq!(redenominate(100.0, -5.0), None);
        assert_eq!(redenominate(100.0, f64::NAN), None);
        assert_eq!(redenominate(f64::INFINITY, 20.0), None);
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let first = redenominate(36500.0, 24385.5);
        let second = redenominate(36500.0, 24385.5);
        assert_eq!(first, second);
    }
}
