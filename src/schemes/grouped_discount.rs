//! Grouped cross-discount
//!
//! Pairing one item from group A with one item from group B unlocks a
//! percentage discount, applied individually to a capped number of items.

use rust_decimal::Decimal;

use crate::{
    adjustments::Adjustment,
    items::Item,
    pricing::{PriceMathError, percent_of_minor},
    schemes::SchemeAdjustments,
};

/// Cross-group pairing promotion.
///
/// Counts items in each group; `pairs = min(count_a, count_b)`. The first
/// `pairs * 2` items (scan order) belonging to either group each get their
/// own percentage discount. Items beyond that cutoff are unaffected even if
/// they belong to a group.
#[derive(Debug, Clone)]
pub struct GroupedDiscountScheme {
    group_a: Vec<String>,
    group_b: Vec<String>,
    percent: Decimal,
}

impl GroupedDiscountScheme {
    /// Create a new grouped discount scheme.
    ///
    /// `percent` is a fraction between 0 and 1, e.g. `0.10` for 10% off.
    pub fn new(group_a: Vec<String>, group_b: Vec<String>, percent: Decimal) -> Self {
        GroupedDiscountScheme {
            group_a,
            group_b,
            percent,
        }
    }

    /// Return the discount fraction.
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    fn in_group_a(&self, item: &Item) -> bool {
        self.group_a.iter().any(|name| name == item.name())
    }

    fn in_group_b(&self, item: &Item) -> bool {
        self.group_b.iter().any(|name| name == item.name())
    }

    /// Compute the adjustments for the given items.
    ///
    /// Each discounted item produces its own adjustment line, truncating the
    /// discount toward zero.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceMathError`] if a percentage calculation overflowed.
    pub fn adjustments(&self, items: &[Item]) -> Result<SchemeAdjustments, PriceMathError> {
        let count_a = items.iter().filter(|item| self.in_group_a(item)).count();
        let count_b = items.iter().filter(|item| self.in_group_b(item)).count();

        let pairs = count_a.min(count_b);
        if pairs == 0 {
            return Ok(SchemeAdjustments::new());
        }

        items
            .iter()
            .filter(|item| self.in_group_a(item) || self.in_group_b(item))
            .take(pairs * 2)
            .map(|item| {
                let discount = percent_of_minor(self.percent, item.price())?;

                Ok(Adjustment::new(
                    format!("{} combo discount", item.name()),
                    -discount,
                ))
            })
            .collect()
    }
}
