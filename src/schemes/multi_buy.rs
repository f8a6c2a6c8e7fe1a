//! Multi-buy
//!
//! "Buy two, get one free": every complete group of three items matching the
//! target name is discounted by one unit price.

use smallvec::smallvec;

use crate::{adjustments::Adjustment, items::Item, schemes::SchemeAdjustments};

/// Number of matching items that make up one discounted group.
const GROUP_SIZE: usize = 3;

/// Three-for-the-price-of-two promotion on a single item name.
#[derive(Debug, Clone)]
pub struct MultiBuyScheme {
    target: String,
}

impl MultiBuyScheme {
    /// Create a new multi-buy scheme for the given target name.
    pub fn new(target: impl Into<String>) -> Self {
        MultiBuyScheme {
            target: target.into(),
        }
    }

    /// Return the target item name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Compute the adjustment for the given items.
    ///
    /// Counts items whose name equals the target; every complete group of
    /// three is discounted by the price of the first matching item. Items of
    /// the same name are assumed equal-priced. Fewer than three matches
    /// produces nothing.
    pub fn adjustments(&self, items: &[Item]) -> SchemeAdjustments {
        let mut matches = items.iter().filter(|item| item.name() == self.target);

        let Some(first) = matches.next() else {
            return SchemeAdjustments::new();
        };

        let count = 1 + matches.count();
        let groups = count / GROUP_SIZE;

        if groups == 0 {
            return SchemeAdjustments::new();
        }

        let discount = i64::try_from(groups).unwrap_or(i64::MAX) * first.price();

        smallvec![Adjustment::new(
            format!("{} 3 for 2", self.target),
            -discount,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beans(n: usize) -> Vec<Item> {
        (0..n).map(|_| Item::fixed("Beans", 199)).collect()
    }

    #[test]
    fn three_matches_discount_one_unit_price() {
        let scheme = MultiBuyScheme::new("Beans");
        let adjustments = scheme.adjustments(&beans(3));

        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments.first().map(Adjustment::amount), Some(-199));
    }

    #[test]
    fn two_matches_produce_nothing() {
        let scheme = MultiBuyScheme::new("Beans");

        assert!(scheme.adjustments(&beans(2)).is_empty());
    }

    #[test]
    fn partial_groups_are_ignored() {
        // Seven matches: two complete groups, one left over.
        let scheme = MultiBuyScheme::new("Beans");
        let adjustments = scheme.adjustments(&beans(7));

        assert_eq!(adjustments.first().map(Adjustment::amount), Some(-398));
    }

    #[test]
    fn uses_first_match_as_unit_price() {
        let scheme = MultiBuyScheme::new("Beans");
        let items = [
            Item::fixed("Beans", 100),
            Item::fixed("Beans", 999),
            Item::fixed("Beans", 999),
        ];

        let adjustments = scheme.adjustments(&items);

        assert_eq!(adjustments.first().map(Adjustment::amount), Some(-100));
    }

    #[test]
    fn non_matching_names_are_not_counted() {
        let scheme = MultiBuyScheme::new("Beans");
        let items = [
            Item::fixed("Beans", 199),
            Item::fixed("Pencil", 99),
            Item::fixed("Beans", 199),
        ];

        assert!(scheme.adjustments(&items).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let scheme = MultiBuyScheme::new("beans");

        assert!(scheme.adjustments(&beans(3)).is_empty());
    }

    #[test]
    fn description_names_the_target() {
        let scheme = MultiBuyScheme::new("Beans");
        let adjustments = scheme.adjustments(&beans(3));

        assert_eq!(
            adjustments.first().map(Adjustment::description),
            Some("Beans 3 for 2")
        );
    }
}
