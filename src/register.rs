//! Register
//!
//! Orchestrates one receipt at a time against a fixed list of pricing
//! schemes.

use log::debug;

use crate::{
    items::Item,
    receipt::{Receipt, ReceiptError},
    schemes::PricingScheme,
};

/// A point-of-sale register.
///
/// Owns exactly one live receipt at a time. The scheme list is fixed at
/// construction and shared read-only across every receipt the register
/// finalizes. Sequential use only; callers needing concurrent access must
/// add their own synchronization.
#[derive(Debug, Default)]
pub struct Register {
    current: Receipt,
    schemes: Vec<PricingScheme>,
}

impl Register {
    /// Create a register with no schemes configured.
    pub fn new() -> Self {
        Register::default()
    }

    /// Create a register with the given schemes, applied in list order at
    /// checkout.
    pub fn with_schemes(schemes: Vec<PricingScheme>) -> Self {
        Register {
            current: Receipt::new(),
            schemes,
        }
    }

    /// Scan an item onto the current receipt.
    pub fn scan(&mut self, item: Item) {
        self.current.add(item);
    }

    /// Pre-discount running total of the current receipt, in minor units.
    ///
    /// Schemes are applied only at checkout, so this never reflects
    /// discounts.
    pub fn subtotal(&self) -> i64 {
        self.current.subtotal()
    }

    /// Finalize the current receipt and start a fresh one.
    ///
    /// Applies all configured schemes to the detached receipt and returns it.
    /// This is the single checkout boundary: nothing mutates the returned
    /// receipt afterward, and subsequent scans go onto a new empty receipt.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a scheme's percentage calculation
    /// overflowed. The detached receipt is discarded in that case.
    pub fn total(&mut self) -> Result<Receipt, ReceiptError> {
        let mut completed = std::mem::take(&mut self.current);

        completed.apply_schemes(&self.schemes)?;

        debug!(
            "checkout: {} item(s), {} adjustment(s), total {}",
            completed.len(),
            completed.adjustments().len(),
            completed.total()
        );

        Ok(completed)
    }
}
