//! Receipt
//!
//! The accumulating record of scanned items and applied adjustments for one
//! checkout.

use log::debug;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    adjustments::Adjustment,
    items::Item,
    pricing::{PriceMathError, format_minor},
    schemes::PricingScheme,
};

/// Separator line between the receipt body and the total.
const SEPARATOR: &str = "------------------";

/// Errors that can occur while finalizing a receipt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// Schemes were already applied to this receipt; applying them again would
    /// double every adjustment.
    #[error("schemes have already been applied to this receipt")]
    AlreadyFinalized,

    /// Wrapped minor-unit arithmetic error from a scheme calculation.
    #[error(transparent)]
    Math(#[from] PriceMathError),
}

/// One checkout's worth of scanned items and adjustments.
///
/// Items keep scan order and are never reordered or deduplicated. Adjustments
/// are appended only by scheme application and keep application order.
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    items: Vec<Item>,
    adjustments: SmallVec<[Adjustment; 4]>,
    finalized: bool,
}

impl Receipt {
    /// Create a new empty receipt.
    pub fn new() -> Self {
        Receipt::default()
    }

    /// Append a scanned item. Scan order is preserved.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Return the scanned items in scan order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Return the adjustments in application order.
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Return the number of scanned items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether no items have been scanned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an adjustment. No validation on sign or magnitude.
    pub fn add_adjustment(&mut self, description: impl Into<String>, amount: i64) {
        self.adjustments.push(Adjustment::new(description, amount));
    }

    /// Apply each scheme in sequence order, appending its adjustments.
    ///
    /// Schemes observe the cumulative adjustment list produced by earlier
    /// schemes in the same call. A scheme with no matching items appends
    /// nothing; that is normal, not an error.
    ///
    /// # Errors
    ///
    /// - [`ReceiptError::AlreadyFinalized`]: schemes were already applied to
    ///   this receipt. Re-running them would duplicate every adjustment, so
    ///   the second call is rejected instead.
    /// - [`ReceiptError::Math`]: a percentage calculation overflowed.
    pub fn apply_schemes(&mut self, schemes: &[PricingScheme]) -> Result<(), ReceiptError> {
        if self.finalized {
            return Err(ReceiptError::AlreadyFinalized);
        }

        self.finalized = true;

        for scheme in schemes {
            let adjustments = scheme.adjustments(self)?;

            debug!(
                "scheme produced {} adjustment(s) against {} item(s)",
                adjustments.len(),
                self.items.len()
            );

            self.adjustments.extend(adjustments);
        }

        Ok(())
    }

    /// Sum of item prices plus adjustment amounts, in minor units.
    pub fn subtotal(&self) -> i64 {
        let items: i64 = self.items.iter().map(Item::price).sum();
        let adjustments: i64 = self.adjustments.iter().map(Adjustment::amount).sum();

        items + adjustments
    }

    /// Total due in minor units.
    ///
    /// Identical to [`Receipt::subtotal`]; there is no separate tax step.
    pub fn total(&self) -> i64 {
        self.subtotal()
    }

    /// Render the receipt as plain text lines joined with `\n`.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + self.adjustments.len() + 3);

        lines.push("Receipt:".to_owned());

        for item in &self.items {
            lines.push(format!("{}: {}", item.name(), format_minor(item.price())));
        }

        for adjustment in &self.adjustments {
            lines.push(format!(
                "{}: {}",
                adjustment.description(),
                format_minor(adjustment.amount())
            ));
        }

        lines.push(SEPARATOR.to_owned());
        lines.push(format!("TOTAL: {}", format_minor(self.total())));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_receipt_is_empty_with_zero_total() {
        let receipt = Receipt::new();

        assert!(receipt.is_empty());
        assert_eq!(receipt.len(), 0);
        assert_eq!(receipt.subtotal(), 0);
        assert_eq!(receipt.total(), 0);
    }

    #[test]
    fn add_preserves_scan_order() {
        let mut receipt = Receipt::new();
        receipt.add(Item::fixed("Beans", 199));
        receipt.add(Item::fixed("Pencil", 99));
        receipt.add(Item::fixed("Beans", 199));

        let names: Vec<&str> = receipt.items().iter().map(Item::name).collect();

        assert_eq!(names, ["Beans", "Pencil", "Beans"]);
    }

    #[test]
    fn subtotal_sums_items_and_adjustments() {
        let mut receipt = Receipt::new();
        receipt.add(Item::fixed("Beans", 200));
        receipt.add(Item::fixed("Pencil", 100));
        receipt.add_adjustment("Coupon", -30);

        assert_eq!(receipt.subtotal(), 270);
        assert_eq!(receipt.total(), receipt.subtotal());
    }

    #[test]
    fn subtotal_includes_weighted_items() {
        let mut receipt = Receipt::new();
        receipt.add(Item::by_weight("Apple", 150, Decimal::new(75, 2)));

        assert_eq!(receipt.subtotal(), 113);
    }

    #[test]
    fn apply_schemes_with_empty_list_finalizes() -> TestResult {
        let mut receipt = Receipt::new();
        receipt.add(Item::fixed("Beans", 199));

        receipt.apply_schemes(&[])?;

        assert!(receipt.adjustments().is_empty());
        assert_eq!(receipt.total(), 199);

        Ok(())
    }

    #[test]
    fn apply_schemes_twice_is_rejected() -> TestResult {
        let mut receipt = Receipt::new();
        receipt.add(Item::fixed("Beans", 199));

        receipt.apply_schemes(&[])?;

        assert_eq!(
            receipt.apply_schemes(&[]),
            Err(ReceiptError::AlreadyFinalized)
        );

        Ok(())
    }

    #[test]
    fn render_single_item() {
        let mut receipt = Receipt::new();
        receipt.add(Item::fixed("Beans (8oz Can)", 199));

        let expected = "Receipt:\n\
                        Beans (8oz Can): $1.99\n\
                        ------------------\n\
                        TOTAL: $1.99";

        assert_eq!(receipt.render(), expected);
    }

    #[test]
    fn render_lists_adjustments_after_items() {
        let mut receipt = Receipt::new();
        receipt.add(Item::fixed("Beans", 200));
        receipt.add_adjustment("Beans coupon", -30);

        let expected = "Receipt:\n\
                        Beans: $2.00\n\
                        Beans coupon: -$0.30\n\
                        ------------------\n\
                        TOTAL: $1.70";

        assert_eq!(receipt.render(), expected);
    }

    #[test]
    fn render_empty_receipt() {
        let receipt = Receipt::new();

        let expected = "Receipt:\n\
                        ------------------\n\
                        TOTAL: $0.00";

        assert_eq!(receipt.render(), expected);
    }
}
