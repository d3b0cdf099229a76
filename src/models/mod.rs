//! Domain models for the Aurum backend.
//!
//! This module contains the database-backed models plus the derived pricing
//! types that only live for the duration of a request.

pub mod jewelry_item;
pub mod pricing;
pub mod purity;
pub mod rate_snapshot;

// Re-export all models for convenient access
pub use jewelry_item::{JewelryItem, ValuedItem};
pub use pricing::{PricingBreakdown, PricingInput, RateTable};
pub use purity::Purity;
pub use rate_snapshot::{DailyRates, RateSnapshot};
