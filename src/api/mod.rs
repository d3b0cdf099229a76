//! HTTP API surface.

pub mod inventory;
pub mod pricing;
pub mod rates;

use actix_web::{get, web, HttpResponse, Responder};

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api")
            .service(rates::current_rates)
            .service(rates::rate_history)
            .service(pricing::calculate_price)
            .service(inventory::list_inventory)
            .service(inventory::get_inventory_item)
            .service(inventory::create_inventory_item),
    );
}
