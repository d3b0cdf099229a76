use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AppResult;
use crate::models::{Purity, RateTable};
use crate::AppState;

/// Wire shape for the current rate table: one numeric field per purity
/// plus `last_updated` and `source`
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentRatesResponse {
    #[serde(flatten)]
    pub rates: HashMap<Purity, Decimal>,
    pub last_updated: DateTime<Utc>,
    pub source: String,
}

impl From<RateTable> for CurrentRatesResponse {
    fn from(table: RateTable) -> Self {
        Self {
            rates: table.rates,
            last_updated: table.last_updated,
            source: table.source,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<i64>,
}

#[get("/rates/current")]
pub async fn current_rates(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let table = state.rate_feed.current().await?;
    Ok(HttpResponse::Ok().json(CurrentRatesResponse::from(table)))
}

#[get("/rates/history")]
pub async fn rate_history(
    state: web::Data<AppState>,
    query: web::Query<HistoryQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days.unwrap_or(7);
    let history = state.rate_feed.history(days).await?;
    Ok(HttpResponse::Ok().json(history))
}
