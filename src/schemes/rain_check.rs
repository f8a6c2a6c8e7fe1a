//! Rain check
//!
//! A price match: the first item matching the target name is re-priced to a
//! fixed replacement price.

use smallvec::smallvec;

use crate::{adjustments::Adjustment, items::Item, schemes::SchemeAdjustments};

/// Price-match promotion on a single item name.
///
/// The adjustment is `replacement - original`, so it can be negative (the
/// usual discount) or positive (a surcharge if the replacement price is
/// higher). Only the first matching item in scan order is affected.
#[derive(Debug, Clone)]
pub struct RainCheckScheme {
    target: String,
    price: i64,
}

impl RainCheckScheme {
    /// Create a new rain check for the given target name and replacement
    /// price in minor units.
    pub fn new(target: impl Into<String>, price: i64) -> Self {
        RainCheckScheme {
            target: target.into(),
            price,
        }
    }

    /// Return the target item name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Return the replacement price in minor units.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Compute the adjustment for the given items.
    pub fn adjustments(&self, items: &[Item]) -> SchemeAdjustments {
        let Some(first) = items.iter().find(|item| item.name() == self.target) else {
            return SchemeAdjustments::new();
        };

        smallvec![Adjustment::new(
            format!("{} rain check", self.target),
            self.price - first.price(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprices_first_match_only() {
        let scheme = RainCheckScheme::new("Beans", 150);
        let items = [Item::fixed("Beans", 200), Item::fixed("Beans", 200)];

        let adjustments = scheme.adjustments(&items);

        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments.first().map(Adjustment::amount), Some(-50));
    }

    #[test]
    fn higher_replacement_price_is_a_surcharge() {
        let scheme = RainCheckScheme::new("Beans", 250);
        let items = [Item::fixed("Beans", 200)];

        let adjustments = scheme.adjustments(&items);

        assert_eq!(adjustments.first().map(Adjustment::amount), Some(50));
    }

    #[test]
    fn equal_replacement_price_produces_zero_adjustment() {
        let scheme = RainCheckScheme::new("Beans", 200);
        let items = [Item::fixed("Beans", 200)];

        let adjustments = scheme.adjustments(&items);

        assert_eq!(adjustments.first().map(Adjustment::amount), Some(0));
    }

    #[test]
    fn no_match_produces_nothing() {
        let scheme = RainCheckScheme::new("Beans", 150);
        let items = [Item::fixed("Pencil", 100)];

        assert!(scheme.adjustments(&items).is_empty());
    }
}
