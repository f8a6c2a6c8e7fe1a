//! Pricing
//!
//! Shared minor-unit money math: weighted pricing, percentage calculation and
//! plain-text formatting.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use thiserror::Error;

/// Errors specific to minor-unit price calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceMathError {
    /// Percentage calculation overflowed or could not be represented in minor units.
    #[error("percentage amount could not be represented in minor units")]
    PercentOverflow,
}

/// Calculate a weighted price in minor units.
///
/// The result is `unit_price * weight` rounded to the nearest minor unit, with
/// ties rounding half-away-from-zero. Saturates instead of panicking if the
/// intermediate product overflows the decimal range.
#[must_use]
pub fn weighted_minor(unit_price: i64, weight: Decimal) -> i64 {
    let unit = Decimal::from(unit_price);

    let Some(scaled) = unit.checked_mul(weight) else {
        return i64::MAX;
    };

    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Calculate a percentage of a minor-unit amount, truncating toward zero.
///
/// Percentage-based schemes drop the fractional remainder of a discount rather
/// than rounding it, so 15% of 199 is 29, not 30.
///
/// # Errors
///
/// Returns [`PriceMathError::PercentOverflow`] if the intermediate product
/// overflows the decimal range or cannot be converted back to minor units.
pub fn percent_of_minor(percent: Decimal, minor: i64) -> Result<i64, PriceMathError> {
    let Some(minor) = Decimal::from_i64(minor) else {
        unreachable!("always returns `Some` for every `i64`")
    };

    let applied = percent
        .checked_mul(minor)
        .ok_or(PriceMathError::PercentOverflow)?;

    applied
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_i64()
        .ok_or(PriceMathError::PercentOverflow)
}

/// Format a minor-unit amount as dollars and cents.
///
/// Negative amounts render with a leading minus before the dollar sign, e.g.
/// `-$1.99`.
#[must_use]
pub fn format_minor(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();

    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
