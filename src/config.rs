//! Scheme configuration
//!
//! Deserializable descriptions of pricing schemes, so an outer layer can
//! source a register's scheme list from YAML instead of constructing schemes
//! in code.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::schemes::{
    PricingScheme, coupon::CouponScheme, grouped_discount::GroupedDiscountScheme,
    multi_buy::MultiBuyScheme, rain_check::RainCheckScheme,
};

/// Errors that can occur while loading scheme configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be parsed.
    #[error(transparent)]
    Parse(#[from] serde_norway::Error),

    /// A percentage was outside the `0..=1` range.
    #[error("percent {0} is out of range; expected a fraction between 0 and 1")]
    PercentOutOfRange(Decimal),
}

/// A single scheme description as it appears in configuration.
///
/// Percent fields are fractions, e.g. `"0.15"` for 15% off. Prices are
/// integer minor units.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SchemeConfig {
    /// Three-for-the-price-of-two on a single item name.
    MultiBuy {
        /// Target item name.
        target: String,
    },

    /// Cross-group pairing discount.
    GroupedDiscount {
        /// Names making up group A.
        group_a: Vec<String>,

        /// Names making up group B.
        group_b: Vec<String>,

        /// Discount fraction applied to each paired item.
        percent: Decimal,
    },

    /// Percentage coupon on the first matching item.
    Coupon {
        /// Target item name.
        target: String,

        /// Discount fraction.
        percent: Decimal,
    },

    /// Price match on the first matching item.
    RainCheck {
        /// Target item name.
        target: String,

        /// Replacement price in minor units.
        price: i64,
    },
}

impl SchemeConfig {
    /// Build the configured scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PercentOutOfRange`] if a percent field is not
    /// a fraction between 0 and 1 inclusive.
    pub fn build(self) -> Result<PricingScheme, ConfigError> {
        match self {
            SchemeConfig::MultiBuy { target } => Ok(MultiBuyScheme::new(target).into()),
            SchemeConfig::GroupedDiscount {
                group_a,
                group_b,
                percent,
            } => {
                validate_percent(percent)?;

                Ok(GroupedDiscountScheme::new(group_a, group_b, percent).into())
            }
            SchemeConfig::Coupon { target, percent } => {
                validate_percent(percent)?;

                Ok(CouponScheme::new(target, percent).into())
            }
            SchemeConfig::RainCheck { target, price } => {
                Ok(RainCheckScheme::new(target, price).into())
            }
        }
    }
}

/// Parse a YAML list of scheme descriptions into ready-to-use schemes.
///
/// Scheme order in the document becomes application order at checkout.
///
/// # Errors
///
/// - [`ConfigError::Parse`]: the document is not a valid scheme list.
/// - [`ConfigError::PercentOutOfRange`]: a percent field is not a fraction
///   between 0 and 1 inclusive.
pub fn schemes_from_yaml(yaml: &str) -> Result<Vec<PricingScheme>, ConfigError> {
    let configs: Vec<SchemeConfig> = serde_norway::from_str(yaml)?;

    configs.into_iter().map(SchemeConfig::build).collect()
}

fn validate_percent(percent: Decimal) -> Result<(), ConfigError> {
    if percent < Decimal::ZERO || percent > Decimal::ONE {
        return Err(ConfigError::PercentOutOfRange(percent));
    }

    Ok(())
}
