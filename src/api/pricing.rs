use actix_web::{post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{PricingInput, Purity};
use crate::pricing;
use crate::AppState;

/// Price calculation request body
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(alias = "weight")]
    pub weight_grams: Decimal,
    pub purity: String,
    #[serde(default)]
    pub making_charge_percentage: Decimal,
    #[serde(default)]
    pub wastage_percentage: Decimal,
    pub category: Option<String>,
}

#[post("/pricing/calculate")]
pub async fn calculate_price(
    state: web::Data<AppState>,
    body: web::Json<CalculateRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();

    let purity = Purity::from_str(&request.purity).map_err(AppError::Validation)?;

    let input = PricingInput {
        weight_grams: request.weight_grams,
        purity,
        making_charge_pct: request.making_charge_percentage,
        wastage_pct: request.wastage_percentage,
        category: request.category,
    };

    let table = state.rate_feed.current().await?;
    let breakdown = pricing::calculate(&input, &table.rates)?;

    // Full precision through the chain, half-up whole rupees on the wire
    Ok(HttpResponse::Ok().json(breakdown.rounded()))
}
