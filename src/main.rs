//! Commerce API server
//!
//! Users and Orders CRUD services over a relational store.
//! Reads configuration from TOML file (~/.config/commerce-api/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use commerce_api::application::OrderService;
use commerce_api::config::AppConfig;
use commerce_api::domain::OrderRepository;
use commerce_api::infrastructure::database::migrator::Migrator;
use commerce_api::infrastructure::database::repositories::SeaOrmOrderRepository;
use commerce_api::shared::{listen_for_shutdown_signals, ShutdownSignal};
use commerce_api::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("COMMERCE_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Commerce API...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database_url(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Wire services (explicit constructor injection) ─────────
    let order_repository: Arc<dyn OrderRepository> =
        Arc::new(SeaOrmOrderRepository::new(db.clone()));
    let order_service = Arc::new(OrderService::new(order_repository));

    let api_router = create_api_router(order_service);

    // ── Shutdown coordination ──────────────────────────────────
    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    // ── Serve ──────────────────────────────────────────────────
    let api_addr = app_cfg.server_address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_shutdown = shutdown.clone();
    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        })
        .await?;

    // Perform final cleanup, bounded by the configured shutdown timeout
    let timeout = std::time::Duration::from_secs(app_cfg.server.shutdown_timeout);
    match tokio::time::timeout(timeout, db.close()).await {
        Ok(Ok(())) => info!("Database connection closed"),
        Ok(Err(e)) => warn!("Error closing database connection: {}", e),
        Err(_) => warn!(
            "Cleanup timed out after {}s",
            app_cfg.server.shutdown_timeout
        ),
    }

    info!("Commerce API shutdown complete");
    Ok(())
}
