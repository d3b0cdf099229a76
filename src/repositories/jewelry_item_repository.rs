use crate::error::RepositoryError;
use crate::models::JewelryItem;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for jewelry inventory data access
pub struct JewelryItemRepository {
    pool: PgPool,
}

impl JewelryItemRepository {
    /// Create a new JewelryItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new jewelry item
    pub async fn create(&self, item: &JewelryItem) -> Result<JewelryItem, RepositoryError> {
        let created = sqlx::query_as::<_, JewelryItem>(
            r#"
            INSERT INTO jewelry_items
                (id, sku, name, category, purity, weight_grams,
                 making_charge_pct, wastage_pct, selling_price, in_stock, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING
                id, sku, name, category, purity, weight_grams,
                making_charge_pct, wastage_pct, selling_price, in_stock, created_at
            "#,
        )
        .bind(item.id)
        .bind(&item.sku)
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.purity)
        .bind(item.weight_grams)
        .bind(item.making_charge_pct)
        .bind(item.wastage_pct)
        .bind(item.selling_price)
        .bind(item.in_stock)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Find a jewelry item by UUID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<JewelryItem>, RepositoryError> {
        let item = sqlx::query_as::<_, JewelryItem>(
            r#"
            SELECT
                id, sku, name, category, purity, weight_grams,
                making_charge_pct, wastage_pct, selling_price, in_stock, created_at
            FROM jewelry_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// List all items, newest first
    pub async fn list(&self) -> Result<Vec<JewelryItem>, RepositoryError> {
        let items = sqlx::query_as::<_, JewelryItem>(
            r#"
            SELECT
                id, sku, name, category, purity, weight_grams,
                making_charge_pct, wastage_pct, selling_price, in_stock, created_at
            FROM jewelry_items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// List items currently in stock, newest first
    pub async fn list_in_stock(&self) -> Result<Vec<JewelryItem>, RepositoryError> {
        let items = sqlx::query_as::<_, JewelryItem>(
            r#"
            SELECT
                id, sku, name, category, purity, weight_grams,
                making_charge_pct, wastage_pct, selling_price, in_stock, created_at
            FROM jewelry_items
            WHERE in_stock = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
