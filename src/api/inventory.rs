use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::NewJewelryItem;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub in_stock: Option<bool>,
}

#[get("/inventory")]
pub async fn list_inventory(
    state: web::Data<AppState>,
    query: web::Query<InventoryQuery>,
) -> AppResult<HttpResponse> {
    let items = state
        .inventory
        .list_with_live_value(query.in_stock.unwrap_or(false))
        .await?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/inventory/{id}")]
pub async fn get_inventory_item(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let item = state.inventory.get_with_live_value(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

#[post("/inventory")]
pub async fn create_inventory_item(
    state: web::Data<AppState>,
    body: web::Json<NewJewelryItem>,
) -> AppResult<HttpResponse> {
    let item = state.inventory.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(item))
}
