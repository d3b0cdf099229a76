use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::purity::Purity;

/// Jewelry item model representing a stored inventory record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JewelryItem {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub purity: String, // Stored as TEXT, use Purity enum for type safety
    pub weight_grams: Decimal,
    pub making_charge_pct: Decimal,
    pub wastage_pct: Decimal,
    /// Price captured at the last manual valuation, the display fallback
    /// when live rates are unavailable
    pub selling_price: Decimal,
    pub in_stock: bool,
    pub created_at: NaiveDateTime,
}

impl JewelryItem {
    /// Create a new JewelryItem
    pub fn new(
        sku: String,
        name: String,
        category: String,
        purity: Purity,
        weight_grams: Decimal,
        making_charge_pct: Decimal,
        wastage_pct: Decimal,
        selling_price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku,
            name,
            category,
            purity: purity.as_str().to_string(),
            weight_grams,
            making_charge_pct,
            wastage_pct,
            selling_price,
            in_stock: true,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Get purity as an enum
    pub fn purity_enum(&self) -> Result<Purity, String> {
        Purity::from_str(&self.purity)
    }
}

/// A stored item augmented with its live calculated value. When rates are
/// unavailable the value is omitted and the display falls back to the
/// stored `selling_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedItem {
    #[serde(flatten)]
    pub item: JewelryItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_value: Option<Decimal>,
}
