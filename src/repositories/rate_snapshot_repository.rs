use chrono::NaiveDateTime;
use crate::error::RepositoryError;
use crate::models::RateSnapshot;
use sqlx::PgPool;

/// Repository for persisted rate observations
pub struct RateSnapshotRepository {
    pool: PgPool,
}

impl RateSnapshotRepository {
    /// Create a new RateSnapshotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one snapshot row per metal for a completed feed refresh
    pub async fn insert_batch(&self, snapshots: &[RateSnapshot]) -> Result<(), RepositoryError> {
        for snapshot in snapshots {
            sqlx::query(
                r#"
                INSERT INTO rate_snapshots (id, metal, rate_per_gram, source, observed_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(snapshot.id)
            .bind(&snapshot.metal)
            .bind(snapshot.rate_per_gram)
            .bind(&snapshot.source)
            .bind(snapshot.observed_at)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    /// All snapshots observed at or after the cutoff, newest first
    pub async fn find_since(
        &self,
        cutoff: NaiveDateTime,
    ) -> Result<Vec<RateSnapshot>, RepositoryError> {
        let snapshots = sqlx::query_as::<_, RateSnapshot>(
            r#"
            SELECT id, metal, rate_per_gram, source, observed_at
            FROM rate_snapshots
            WHERE observed_at >= $1
            ORDER BY observed_at DESC
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(snapshots)
    }

    /// The most recent snapshot for each metal, if any have been recorded
    pub async fn latest_per_metal(&self) -> Result<Vec<RateSnapshot>, RepositoryError> {
        let snapshots = sqlx::query_as::<_, RateSnapshot>(
            r#"
            SELECT DISTINCT ON (metal)
                id, metal, rate_per_gram, source, observed_at
            FROM rate_snapshots
            ORDER BY metal, observed_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(snapshots)
    }
}
