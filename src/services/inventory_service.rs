use crate::error::{AppError, AppResult};
use crate::models::pricing::round_rupees;
use crate::models::{JewelryItem, PricingInput, Purity, RateTable, ValuedItem};
use crate::pricing;
use crate::repositories::JewelryItemRepository;
use crate::services::RateFeedService;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Request to add an item to the inventory
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewJewelryItem {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub purity: String,
    pub weight_grams: Decimal,
    pub making_charge_pct: Decimal,
    pub wastage_pct: Decimal,
    pub selling_price: Decimal,
}

/// Inventory operations plus the live-value display layer
pub struct InventoryService {
    item_repo: Arc<JewelryItemRepository>,
    rate_feed: Arc<RateFeedService>,
}

impl InventoryService {
    /// Create a new InventoryService
    pub fn new(item_repo: Arc<JewelryItemRepository>, rate_feed: Arc<RateFeedService>) -> Self {
        Self {
            item_repo,
            rate_feed,
        }
    }

    /// Validate and store a new item
    pub async fn create(&self, new_item: NewJewelryItem) -> AppResult<JewelryItem> {
        let purity = Purity::from_str(&new_item.purity).map_err(AppError::Validation)?;

        if new_item.weight_grams <= Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "weight_grams must be positive, got {}",
                new_item.weight_grams
            )));
        }

        if new_item.sku.trim().is_empty() || new_item.name.trim().is_empty() {
            return Err(AppError::Validation(
                "sku and name must not be empty".to_string(),
            ));
        }

        let item = JewelryItem::new(
            new_item.sku,
            new_item.name,
            new_item.category,
            purity,
            new_item.weight_grams,
            new_item.making_charge_pct,
            new_item.wastage_pct,
            new_item.selling_price,
        );

        Ok(self.item_repo.create(&item).await?)
    }

    /// All stored items with their live calculated values attached.
    ///
    /// When rates are unavailable or stale the batch is returned
    /// unaugmented and the dashboard falls back to the stored
    /// `selling_price`.
    pub async fn list_with_live_value(&self, in_stock_only: bool) -> AppResult<Vec<ValuedItem>> {
        let items = if in_stock_only {
            self.item_repo.list_in_stock().await?
        } else {
            self.item_repo.list().await?
        };
        let rates = self.current_rates_for_display().await?;

        Ok(augment_items(items, rates.as_ref()))
    }

    /// One item by id with its live calculated value attached
    pub async fn get_with_live_value(&self, id: Uuid) -> AppResult<ValuedItem> {
        let item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("jewelry item {}", id)))?;

        let rates = self.current_rates_for_display().await?;
        let mut valued = augment_items(vec![item], rates.as_ref());

        // augment_items preserves its input one-to-one
        valued
            .pop()
            .ok_or_else(|| AppError::Message("augmentation dropped an item".to_string()))
    }

    /// Rates for display augmentation: unavailable/stale degrades to None,
    /// anything else propagates
    async fn current_rates_for_display(&self) -> AppResult<Option<RateTable>> {
        match self.rate_feed.current().await {
            Ok(table) => Ok(Some(table)),
            Err(e) if e.is_rate_unavailable() => {
                debug!("Serving inventory without live values: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Map stored items to their augmented form. A `None` rate table leaves the
/// whole batch unaugmented; an individual item that cannot be priced (bad
/// stored purity, rate missing for its metal) is passed through untouched
/// while the rest of the batch still carries values.
pub fn augment_items(items: Vec<JewelryItem>, rates: Option<&RateTable>) -> Vec<ValuedItem> {
    items
        .into_iter()
        .map(|item| {
            let calculated_value = rates.and_then(|table| live_value(&item, table));
            ValuedItem {
                item,
                calculated_value,
            }
        })
        .collect()
}

/// Live value of a single item under the given rates, rounded for display
fn live_value(item: &JewelryItem, rates: &RateTable) -> Option<Decimal> {
    let purity = item.purity_enum().ok()?;

    let input = PricingInput {
        weight_grams: item.weight_grams,
        purity,
        making_charge_pct: item.making_charge_pct,
        wastage_pct: item.wastage_pct,
        category: Some(item.category.clone()),
    };

    let breakdown = pricing::calculate(&input, &rates.rates).ok()?;
    Some(round_rupees(breakdown.total_price))
}
