//! Pricing schemes
//!
//! A pricing scheme inspects the scanned items on a receipt and emits zero or
//! more adjustments. Schemes never mutate the item list, and a scheme whose
//! target matches nothing is a silent no-op.

use smallvec::SmallVec;

use crate::{
    adjustments::Adjustment,
    pricing::PriceMathError,
    receipt::Receipt,
    schemes::{
        coupon::CouponScheme, grouped_discount::GroupedDiscountScheme, multi_buy::MultiBuyScheme,
        rain_check::RainCheckScheme,
    },
};

pub mod coupon;
pub mod grouped_discount;
pub mod multi_buy;
pub mod rain_check;

/// Adjustments produced by a single scheme application.
pub type SchemeAdjustments = SmallVec<[Adjustment; 4]>;

/// Pricing scheme enum.
///
/// A closed set of promotion rules; application order is the order of the
/// scheme list handed to the receipt.
#[derive(Debug, Clone)]
pub enum PricingScheme {
    /// Multi-buy: three matching items for the price of two.
    MultiBuy(MultiBuyScheme),

    /// Grouped cross-discount: pairing one item from each of two named groups
    /// unlocks a per-item percentage discount.
    GroupedDiscount(GroupedDiscountScheme),

    /// Percentage coupon on the first matching item.
    Coupon(CouponScheme),

    /// Price-match / rain check on the first matching item.
    RainCheck(RainCheckScheme),
}

impl PricingScheme {
    /// Compute the adjustments this scheme produces against a receipt.
    ///
    /// The receipt is read-only here; [`Receipt::apply_schemes`] appends the
    /// returned adjustments, so later schemes in the same pass can observe
    /// the adjustments of earlier ones.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceMathError`] if a percentage calculation overflowed.
    pub fn adjustments(&self, receipt: &Receipt) -> Result<SchemeAdjustments, PriceMathError> {
        match self {
            PricingScheme::MultiBuy(multi_buy) => Ok(multi_buy.adjustments(receipt.items())),
            PricingScheme::GroupedDiscount(grouped) => grouped.adjustments(receipt.items()),
            PricingScheme::Coupon(coupon) => coupon.adjustments(receipt.items()),
            PricingScheme::RainCheck(rain_check) => Ok(rain_check.adjustments(receipt.items())),
        }
    }
}

impl From<MultiBuyScheme> for PricingScheme {
    fn from(scheme: MultiBuyScheme) -> Self {
        PricingScheme::MultiBuy(scheme)
    }
}

impl From<GroupedDiscountScheme> for PricingScheme {
    fn from(scheme: GroupedDiscountScheme) -> Self {
        PricingScheme::GroupedDiscount(scheme)
    }
}

impl From<CouponScheme> for PricingScheme {
    fn from(scheme: CouponScheme) -> Self {
        PricingScheme::Coupon(scheme)
    }
}

impl From<RainCheckScheme> for PricingScheme {
    fn from(scheme: RainCheckScheme) -> Self {
        PricingScheme::RainCheck(scheme)
    }
}
