//! Till
//!
//! Till is a small point-of-sale pricing engine: items are scanned into a
//! receipt, a configured list of pricing schemes is applied to the accumulated
//! items to produce adjustments, and the finalized receipt renders an itemized
//! total. All monetary values are integer minor units (cents).

pub mod adjustments;
pub mod config;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod schemes;
