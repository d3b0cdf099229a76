//! Live-rate driven jewelry pricing.

pub mod calculator;

pub use calculator::{calculate, PricingError, PricingResult, GST_RATE};
