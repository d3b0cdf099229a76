use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::purity::Purity;

/// Input to a price calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingInput {
    pub weight_grams: Decimal,
    pub purity: Purity,
    pub making_charge_pct: Decimal,
    pub wastage_pct: Decimal,
    /// Informational only, never enters the arithmetic
    pub category: Option<String>,
}

/// Itemized price breakdown. Derived on every request, never persisted,
/// never the system of record for what a customer was charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub gold_value: Decimal,
    pub making_charges: Decimal,
    pub wastage_amount: Decimal,
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub total_price: Decimal,
}

impl PricingBreakdown {
    /// Round for display: half-up to whole rupees. Applied only at the
    /// presentation boundary; the arithmetic chain keeps full precision.
    ///
    /// `subtotal` and `total_price` are re-derived from the rounded
    /// components so the additive identities still hold in the rounded
    /// figures.
    pub fn rounded(&self) -> PricingBreakdown {
        let gold_value = round_rupees(self.gold_value);
        let making_charges = round_rupees(self.making_charges);
        let wastage_amount = round_rupees(self.wastage_amount);
        let gst_amount = round_rupees(self.gst_amount);
        let subtotal = gold_value + making_charges + wastage_amount;

        PricingBreakdown {
            gold_value,
            making_charges,
            wastage_amount,
            subtotal,
            gst_amount,
            total_price: subtotal + gst_amount,
        }
    }
}

/// Round half-up to 0 decimal places (whole rupees)
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Current per-gram rates for every known purity, as fetched from the
/// upstream feed. Held in memory and replaced wholesale on each refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    pub rates: HashMap<Purity, Decimal>,
    pub last_updated: DateTime<Utc>,
    pub source: String,
}

impl RateTable {
    /// Look up the per-gram rate for a purity
    pub fn rate_for(&self, purity: Purity) -> Option<Decimal> {
        self.rates.get(&purity).copied()
    }

    /// Age of the table relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.last_updated)
    }

    /// Whether the table is older than the freshness window
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match chrono::Duration::from_std(window) {
            Ok(window) => self.age(now) > window,
            Err(_) => false,
        }
    }
}
