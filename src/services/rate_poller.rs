use crate::config::RateFeedConfig;
use crate::error::AppResult;
use crate::models::{Purity, RateSnapshot, RateTable};
use crate::repositories::RateSnapshotRepository;
use crate::services::RateFeedService;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{error, info};
use uuid::Uuid;

/// Background task that refreshes the rate feed on a fixed interval,
/// persists a snapshot row per metal, and logs notable rate moves.
pub struct RatePoller {
    rate_feed: Arc<RateFeedService>,
    rate_repo: Arc<RateSnapshotRepository>,
    poll_interval: Duration,
    /// Minimum relative move that gets logged (e.g. 0.005 = 0.5%)
    change_log_threshold: f64,
    last_rates: tokio::sync::RwLock<HashMap<Purity, Decimal>>,
}

impl RatePoller {
    /// Create a new RatePoller
    pub fn new(
        rate_feed: Arc<RateFeedService>,
        rate_repo: Arc<RateSnapshotRepository>,
        config: &RateFeedConfig,
    ) -> Self {
        Self {
            rate_feed,
            rate_repo,
            poll_interval: config.poll_interval(),
            change_log_threshold: config.change_log_threshold,
            last_rates: tokio::sync::RwLock::new(HashMap::new()),
        }
    }

    /// Start polling the rate feed. The first poll fires immediately.
    pub async fn start(self) {
        let mut interval = time::interval(self.poll_interval);
        info!("Rate poller started, polling every {:?}", self.poll_interval);

        loop {
            interval.tick().await;

            if let Err(e) = self.poll_once().await {
                error!("Error in rate poller: {}", e);
            }
        }
    }

    /// Refresh the feed, persist the observations, log significant moves
    async fn poll_once(&self) -> AppResult<()> {
        let table = self.rate_feed.refresh().await?;

        self.rate_repo.insert_batch(&snapshot_rows(&table)).await?;
        self.log_rate_moves(&table).await;

        Ok(())
    }

    /// Log any rate that moved more than the threshold since the last poll
    async fn log_rate_moves(&self, table: &RateTable) {
        let mut last_rates = self.last_rates.write().await;

        for (purity, rate) in &table.rates {
            if let Some(previous) = last_rates.get(purity) {
                let current_f64 = rate.to_f64().unwrap_or(0.0);
                let previous_f64 = previous.to_f64().unwrap_or(0.0);

                if previous_f64 > 0.0 {
                    let change = (current_f64 - previous_f64).abs() / previous_f64;
                    if change >= self.change_log_threshold {
                        info!(
                            "{} rate moved {:.2}%: {} -> {}",
                            purity,
                            change * 100.0,
                            previous,
                            rate
                        );
                    }
                }
            }
            last_rates.insert(*purity, *rate);
        }
    }
}

/// One persistable snapshot row per metal in the table
fn snapshot_rows(table: &RateTable) -> Vec<RateSnapshot> {
    let observed_at = table.last_updated.naive_utc();

    table
        .rates
        .iter()
        .map(|(purity, rate)| RateSnapshot {
            id: Uuid::new_v4(),
            metal: purity.as_str().to_string(),
            rate_per_gram: *rate,
            source: table.source.clone(),
            observed_at,
        })
        .collect()
}
