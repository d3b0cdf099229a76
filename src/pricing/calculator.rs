use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{PricingBreakdown, PricingInput, Purity};

/// Error types for price calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("No rate available for {0}")]
    MissingRate(Purity),

    #[error("Rate for {0} is not positive")]
    InvalidRate(Purity),

    #[error("Weight must be positive, got {0}")]
    InvalidWeight(Decimal),

    #[error("{name} must be between 0 and 100, got {value}")]
    InvalidPercentage { name: &'static str, value: Decimal },
}

/// Result type for price calculations
pub type PricingResult<T> = Result<T, PricingError>;

/// GST applied to the subtotal (3%)
pub const GST_RATE: Decimal = Decimal::new(3, 2);

/// Calculate an itemized price breakdown from a pricing input and the
/// current per-gram rates.
///
/// Pure and deterministic: no state, no caching, safe to call from any
/// number of concurrent callers. The chain keeps full precision; rounding
/// happens only at the presentation boundary.
///
/// ```text
/// gold_value     = weight_grams * rate(purity)
/// making_charges = gold_value * making_charge_pct / 100
/// wastage_amount = gold_value * wastage_pct / 100
/// subtotal       = gold_value + making_charges + wastage_amount
/// gst_amount     = subtotal * 3%
/// total_price    = subtotal + gst_amount
/// ```
pub fn calculate(
    input: &PricingInput,
    rates: &HashMap<Purity, Decimal>,
) -> PricingResult<PricingBreakdown> {
    if input.weight_grams <= Decimal::ZERO {
        return Err(PricingError::InvalidWeight(input.weight_grams));
    }

    validate_percentage("making_charge_pct", input.making_charge_pct)?;
    validate_percentage("wastage_pct", input.wastage_pct)?;

    let rate = rates
        .get(&input.purity)
        .copied()
        .ok_or(PricingError::MissingRate(input.purity))?;

    if rate <= Decimal::ZERO {
        return Err(PricingError::InvalidRate(input.purity));
    }

    let gold_value = input.weight_grams * rate;
    let making_charges = gold_value * input.making_charge_pct / Decimal::ONE_HUNDRED;
    let wastage_amount = gold_value * input.wastage_pct / Decimal::ONE_HUNDRED;
    let subtotal = gold_value + making_charges + wastage_amount;
    let gst_amount = subtotal * GST_RATE;

    Ok(PricingBreakdown {
        gold_value,
        making_charges,
        wastage_amount,
        subtotal,
        gst_amount,
        total_price: subtotal + gst_amount,
    })
}

fn validate_percentage(name: &'static str, value: Decimal) -> PricingResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(PricingError::InvalidPercentage { name, value });
    }
    Ok(())
}
