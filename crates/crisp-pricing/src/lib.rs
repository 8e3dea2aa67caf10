//! Quote pricing for the Crisp Cleaning booking wizard.
//!
//! [`calculate_pricing`] turns a [`PricingRequest`] into an itemized
//! [`PricingResponse`] using the fixed price tables in [`catalog`].

pub mod catalog;
pub mod engine;
pub mod error;
pub mod types;

pub use catalog::{CleaningType, Extra, Frequency, HomeArea, ACTION_TAKER_DISCOUNT_PERCENT};
pub use engine::calculate_pricing;
pub use error::PricingError;
pub use types::{
    Breakdown, DiscountLine, Discounts, ExtrasBreakdown, HomeDetails, HomeDetailsBreakdown,
    PriceLine, PricingRequest, PricingResponse,
};
