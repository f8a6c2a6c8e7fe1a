//! Adjustments
//!
//! A named, signed minor-unit amount applied at the receipt level; negative
//! amounts are discounts, positive amounts are surcharges.

/// A single receipt-level adjustment.
///
/// Adjustments are immutable once created and keep their insertion order on
/// the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    description: String,
    amount: i64,
}

impl Adjustment {
    /// Create a new adjustment.
    pub fn new(description: impl Into<String>, amount: i64) -> Self {
        Adjustment {
            description: description.into(),
            amount,
        }
    }

    /// Return the adjustment description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Return the signed amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let adjustment = Adjustment::new("Beans 3 for 2", -199);

        assert_eq!(adjustment.description(), "Beans 3 for 2");
        assert_eq!(adjustment.amount(), -199);
    }

    #[test]
    fn surcharges_are_positive() {
        let adjustment = Adjustment::new("Bottle deposit", 10);

        assert_eq!(adjustment.amount(), 10);
    }
}
