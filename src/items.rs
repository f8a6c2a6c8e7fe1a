//! Items
//!
//! Anything scannable with a name and a computed minor-unit price.

use rust_decimal::Decimal;

use crate::pricing::weighted_minor;

/// A scannable item.
///
/// Items are immutable once constructed: [`Item::price`] is pure and returns
/// the same value on every call. Scheme matching compares names verbatim and
/// case-sensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// An item sold at a fixed shelf price.
    FixedPrice {
        /// Item name.
        name: String,

        /// Price in minor units.
        price: i64,
    },

    /// An item sold by weight.
    ByWeight {
        /// Item name.
        name: String,

        /// Price per unit of weight, in minor units.
        unit_price: i64,

        /// Measured weight. Expected positive; not validated here.
        weight: Decimal,
    },
}

impl Item {
    /// Create a fixed-price item.
    pub fn fixed(name: impl Into<String>, price: i64) -> Self {
        Item::FixedPrice {
            name: name.into(),
            price,
        }
    }

    /// Create a weight-priced item.
    pub fn by_weight(name: impl Into<String>, unit_price: i64, weight: Decimal) -> Self {
        Item::ByWeight {
            name: name.into(),
            unit_price,
            weight,
        }
    }

    /// Return the item name.
    pub fn name(&self) -> &str {
        match self {
            Item::FixedPrice { name, .. } | Item::ByWeight { name, .. } => name,
        }
    }

    /// Return the price of the item in minor units.
    ///
    /// Weighted items price as `unit_price * weight` rounded to the nearest
    /// minor unit, ties rounding half-away-from-zero.
    pub fn price(&self) -> i64 {
        match self {
            Item::FixedPrice { price, .. } => *price,
            Item::ByWeight {
                unit_price, weight, ..
            } => weighted_minor(*unit_price, *weight),
        }
    }
}
