//! Aurum Backend Library
//!
//! This module exposes the backend components for use by tests and other
//! consumers.

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod pricing;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use config::RateFeedConfig;
use database::Database;
use repositories::*;
use services::{InventoryService, RateFeedService};
use std::sync::Arc;

/// Application state containing all repositories and services
pub struct AppState {
    pub database: Database,
    pub item_repo: Arc<JewelryItemRepository>,
    pub rate_repo: Arc<RateSnapshotRepository>,
    pub rate_feed: Arc<RateFeedService>,
    pub inventory: Arc<InventoryService>,
}

impl AppState {
    /// Create a new AppState with initialized repositories and services
    pub fn new(pool: sqlx::PgPool, rate_feed_config: &RateFeedConfig) -> Self {
        let database = Database::new(pool.clone());

        let item_repo = Arc::new(JewelryItemRepository::new(pool.clone()));
        let rate_repo = Arc::new(RateSnapshotRepository::new(pool));
        let rate_feed = Arc::new(RateFeedService::new(rate_feed_config, rate_repo.clone()));
        let inventory = Arc::new(InventoryService::new(item_repo.clone(), rate_feed.clone()));

        Self {
            database,
            item_repo,
            rate_repo,
            rate_feed,
            inventory,
        }
    }
}
