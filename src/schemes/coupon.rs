//! Percentage coupon
//!
//! A percentage discount on the first item matching the target name.

use rust_decimal::Decimal;
use smallvec::smallvec;

use crate::{
    adjustments::Adjustment,
    items::Item,
    pricing::{PriceMathError, percent_of_minor},
    schemes::SchemeAdjustments,
};

/// Single-item percentage coupon.
///
/// Only the first matching item in scan order is discounted; later duplicates
/// of the same name are unaffected.
#[derive(Debug, Clone)]
pub struct CouponScheme {
    target: String,
    percent: Decimal,
}

impl CouponScheme {
    /// Create a new coupon for the given target name.
    ///
    /// `percent` is a fraction between 0 and 1, e.g. `0.15` for 15% off.
    pub fn new(target: impl Into<String>, percent: Decimal) -> Self {
        CouponScheme {
            target: target.into(),
            percent,
        }
    }

    /// Return the target item name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Return the discount fraction.
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Compute the adjustment for the given items.
    ///
    /// The discount truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceMathError`] if the percentage calculation overflowed.
    pub fn adjustments(&self, items: &[Item]) -> Result<SchemeAdjustments, PriceMathError> {
        let Some(first) = items.iter().find(|item| item.name() == self.target) else {
            return Ok(SchemeAdjustments::new());
        };

        let discount = percent_of_minor(self.percent, first.price())?;

        Ok(smallvec![Adjustment::new(
            format!("{} coupon", self.target),
            -discount,
        )])
    }
}
