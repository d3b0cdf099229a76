//! Aurum Backend Service
//!
//! Main entry point for the jewelry shop backend. This service provides:
//! - HTTP JSON API for live rates, price calculation, and inventory
//! - Background task polling the upstream gold-rate feed

use actix_web::{web, App, HttpServer};
use aurum_backend::config::AppConfig;
use aurum_backend::database::{create_pool, run_migrations};
use aurum_backend::error::{AppError, AppResult};
use aurum_backend::services::RatePoller;
use aurum_backend::{api, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "aurum_backend={},sqlx=warn,actix_web=info",
                    config.log_level
                )
                .into()
            }),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║           Aurum Backend Service Starting                  ║");
    info!("╚══════════════════════════════════════════════════════════╝");
    info!("Environment: {}", config.environment);
    info!("Log level: {}", config.log_level);
    info!("HTTP port: {}", config.http_port);
    info!("Rate feed: {}", config.rate_feed.url);

    // =========================================================================
    // DATABASE SETUP
    // =========================================================================
    info!("Connecting to database...");

    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        AppError::Database(e)
    })?;

    info!("Database connection pool created successfully");
    info!("Max connections: {}", config.database.max_connections);

    // Run migrations
    info!("Running database migrations...");
    run_migrations(&pool, None).await.map_err(|e| {
        error!("Database migration failed: {}", e);
        AppError::Database(e)
    })?;

    info!("Database migrations completed successfully");

    // =========================================================================
    // CORE SERVICES INITIALIZATION
    // =========================================================================
    info!("Initializing core services...");

    let app_state = web::Data::new(AppState::new(pool.clone(), &config.rate_feed));
    info!("✓ Application state initialized with repositories");

    // Serve persisted rates until the first successful poll; the staleness
    // window decides whether they are still usable
    match app_state.rate_feed.warm_from_database().await {
        Ok(true) => info!("✓ Rate cache warmed from persisted snapshots"),
        Ok(false) => info!("Rate cache starting cold, waiting for first poll"),
        Err(e) => warn!("Could not warm rate cache: {}", e),
    }

    // =========================================================================
    // BACKGROUND TASKS
    // =========================================================================
    let poller_handle = if config.rate_feed.poll_enabled {
        let poller = RatePoller::new(
            app_state.rate_feed.clone(),
            app_state.rate_repo.clone(),
            &config.rate_feed,
        );

        let handle = tokio::spawn(async move {
            poller.start().await;
        });
        info!(
            "✓ Rate poller background task started ({}s interval)",
            config.rate_feed.poll_interval_secs
        );
        Some(handle)
    } else {
        warn!("RATE_POLL_ENABLED=false - upstream rate feed will not be polled");
        None
    };

    // =========================================================================
    // START SERVER
    // =========================================================================
    info!("Starting HTTP server on 0.0.0.0:{}...", config.http_port);

    let state_for_server = app_state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_for_server.clone())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", config.http_port))
    .map_err(|e| AppError::Message(format!("Failed to bind HTTP server: {}", e)))?
    .disable_signals()
    .run();

    let server_handle = tokio::spawn(server);

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║           Aurum Backend Service Ready!                    ║");
    info!("╠══════════════════════════════════════════════════════════╣");
    info!("║  HTTP API:     0.0.0.0:{}                              ║", config.http_port);
    info!("║  Environment:  {}                                    ║", config.environment);
    info!("╚══════════════════════════════════════════════════════════╝");
    info!("Press Ctrl+C to shutdown gracefully");

    // =========================================================================
    // SHUTDOWN HANDLING
    // =========================================================================
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down gracefully...");
        }
        _ = server_handle => {
            error!("HTTP server exited unexpectedly");
        }
        _ = async {
            if let Some(handle) = poller_handle {
                handle.await.ok();
            } else {
                // Never completes if the poller is not running
                futures::future::pending::<()>().await;
            }
        } => {
            error!("Rate poller task exited unexpectedly");
        }
    }

    info!("Aurum backend service shutdown complete");
    Ok(())
}
