use crate::config::RateFeedConfig;
use crate::error::{AppError, AppResult};
use crate::models::{DailyRates, Purity, RateSnapshot, RateTable};
use crate::repositories::RateSnapshotRepository;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Gold-rate provider: fetches the upstream feed, caches the latest rate
/// table in memory, and answers current/history queries.
///
/// Read-only towards the upstream source. Callers re-poll on a fixed
/// interval; there is no push or subscribe model.
pub struct RateFeedService {
    client: reqwest::Client,
    feed_url: String,
    freshness_window: Duration,
    rate_repo: Arc<RateSnapshotRepository>,
    cache: tokio::sync::RwLock<Option<RateTable>>,
}

impl RateFeedService {
    /// Create a new RateFeedService
    pub fn new(config: &RateFeedConfig, rate_repo: Arc<RateSnapshotRepository>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            feed_url: config.url.clone(),
            freshness_window: config.freshness_window(),
            rate_repo,
            cache: tokio::sync::RwLock::new(None),
        }
    }

    /// Current rate table.
    ///
    /// Fails with `RateUnavailable` when nothing has been fetched yet and
    /// with `RateStale` when the cached table is older than the freshness
    /// window. Never substitutes zero or a stored price.
    pub async fn current(&self) -> AppResult<RateTable> {
        let cache = self.cache.read().await;
        let table = cache
            .as_ref()
            .ok_or_else(|| AppError::RateUnavailable("no rate data fetched yet".to_string()))?;

        if table.is_stale(Utc::now(), self.freshness_window) {
            return Err(AppError::RateStale(table.last_updated.to_rfc3339()));
        }

        Ok(table.clone())
    }

    /// Fetch the upstream feed and install the result as the current table
    pub async fn refresh(&self) -> AppResult<RateTable> {
        let table = self.fetch_remote().await?;

        let mut cache = self.cache.write().await;
        *cache = Some(table.clone());

        Ok(table)
    }

    /// Seed the cache from the most recent persisted snapshots, if a full
    /// set exists. The staleness check still applies when serving, so an
    /// old warm start never masquerades as fresh data.
    pub async fn warm_from_database(&self) -> AppResult<bool> {
        let rows = self.rate_repo.latest_per_metal().await?;

        let mut rates = HashMap::new();
        let mut last_updated: Option<DateTime<Utc>> = None;
        let mut source = String::new();

        for row in &rows {
            let Ok(purity) = row.metal_enum() else {
                continue;
            };
            rates.insert(purity, row.rate_per_gram);
            let observed = row.observed_at.and_utc();
            if last_updated.map_or(true, |t| observed > t) {
                last_updated = Some(observed);
                source = row.source.clone();
            }
        }

        if rates.len() < Purity::ALL.len() {
            debug!("No complete snapshot set persisted, starting cold");
            return Ok(false);
        }

        let table = RateTable {
            rates,
            last_updated: last_updated.unwrap_or_else(Utc::now),
            source,
        };

        info!(
            "Warmed rate cache from database (last updated {})",
            table.last_updated.to_rfc3339()
        );

        let mut cache = self.cache.write().await;
        *cache = Some(table);

        Ok(true)
    }

    /// Daily rate history, newest first, at most `days` entries
    pub async fn history(&self, days: i64) -> AppResult<Vec<DailyRates>> {
        if days <= 0 {
            return Err(AppError::Validation(format!(
                "days must be greater than 0, got {}",
                days
            )));
        }

        let cutoff = (Utc::now() - chrono::Duration::days(days)).naive_utc();
        let snapshots = self.rate_repo.find_since(cutoff).await?;

        Ok(fold_daily(&snapshots, days as usize))
    }

    /// GET the upstream feed and parse it into a rate table
    async fn fetch_remote(&self) -> AppResult<RateTable> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| AppError::RateUnavailable(format!("rate feed unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::RateUnavailable(format!(
                "rate feed returned HTTP {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::RateUnavailable(format!("invalid rate feed payload: {}", e)))?;

        parse_rate_payload(&payload, Utc::now())
    }
}

/// Parse an upstream payload into a rate table.
///
/// The payload is a flat JSON object with one numeric field per purity key
/// plus optional `source` and `last_updated` fields. A missing or
/// non-positive rate for any known purity fails the whole refresh.
pub fn parse_rate_payload(
    payload: &serde_json::Value,
    fetched_at: DateTime<Utc>,
) -> AppResult<RateTable> {
    let mut rates = HashMap::new();

    for purity in Purity::ALL {
        let value = payload
            .get(purity.as_str())
            .and_then(|v| v.as_f64())
            .ok_or_else(|| {
                AppError::RateUnavailable(format!("upstream payload missing rate for {}", purity))
            })?;

        let rate = Decimal::try_from(value).map_err(|_| {
            AppError::RateUnavailable(format!("unrepresentable rate for {}: {}", purity, value))
        })?;

        if rate <= Decimal::ZERO {
            return Err(AppError::RateUnavailable(format!(
                "non-positive rate for {}: {}",
                purity, rate
            )));
        }

        rates.insert(purity, rate);
    }

    let source = payload
        .get("source")
        .and_then(|v| v.as_str())
        .unwrap_or("upstream")
        .to_string();

    let last_updated = payload
        .get("last_updated")
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(fetched_at);

    Ok(RateTable {
        rates,
        last_updated,
        source,
    })
}

/// Fold per-metal snapshot rows (newest first) into daily entries, newest
/// first, no duplicate dates, at most `max_entries` entries. Within a day
/// the latest observation per metal wins.
pub fn fold_daily(snapshots: &[RateSnapshot], max_entries: usize) -> Vec<DailyRates> {
    let mut days: Vec<DailyRates> = Vec::new();

    for snapshot in snapshots {
        let Ok(purity) = snapshot.metal_enum() else {
            continue;
        };
        let date = snapshot.observed_at.date();

        let idx = match days.iter().position(|d| d.date == date) {
            Some(idx) => idx,
            None => {
                if days.len() == max_entries {
                    // Rows are newest first, so anything older is out of range
                    break;
                }
                days.push(DailyRates {
                    date,
                    rates: HashMap::new(),
                    last_updated: snapshot.observed_at,
                    source: snapshot.source.clone(),
                });
                days.len() - 1
            }
        };
        let entry = &mut days[idx];

        // First row seen per (date, metal) is the latest observation
        entry.rates.entry(purity).or_insert(snapshot.rate_per_gram);
        if snapshot.observed_at > entry.last_updated {
            entry.last_updated = snapshot.observed_at;
        }
    }

    days.sort_by(|a, b| b.date.cmp(&a.date));
    days
}
