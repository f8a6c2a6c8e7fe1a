//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    adjustments::Adjustment,
    config::{ConfigError, SchemeConfig, schemes_from_yaml},
    items::Item,
    pricing::{PriceMathError, format_minor, percent_of_minor, weighted_minor},
    receipt::{Receipt, ReceiptError},
    register::Register,
    schemes::{
        PricingScheme, SchemeAdjustments, coupon::CouponScheme,
        grouped_discount::GroupedDiscountScheme, multi_buy::MultiBuyScheme,
        rain_check::RainCheckScheme,
    },
};
