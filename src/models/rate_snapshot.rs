use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::purity::Purity;

/// Persisted per-metal rate observation. Immutable once recorded; a newer
/// snapshot supersedes the prior one for "current" lookups.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RateSnapshot {
    pub id: Uuid,
    pub metal: String, // Stored as TEXT, use Purity enum for type safety
    pub rate_per_gram: Decimal,
    pub source: String,
    pub observed_at: NaiveDateTime,
}

impl RateSnapshot {
    /// Create a new RateSnapshot
    pub fn new(metal: Purity, rate_per_gram: Decimal, source: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            metal: metal.as_str().to_string(),
            rate_per_gram,
            source,
            observed_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Get metal as a purity enum
    pub fn metal_enum(&self) -> Result<Purity, String> {
        Purity::from_str(&self.metal)
    }
}

/// One day's worth of rates, folded from the persisted snapshots.
/// Serializes like the current-rates object plus a `date` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRates {
    pub date: chrono::NaiveDate,
    #[serde(flatten)]
    pub rates: std::collections::HashMap<Purity, Decimal>,
    pub last_updated: NaiveDateTime,
    pub source: String,
}
