//! Flight Log Service - Main Application Entry Point
//!
//! REST API server for a personal flight log. Users submit a flight number
//! and date; the service enriches it into a full itinerary (live data when
//! the provider cooperates, a synthetic estimate otherwise) and stores it
//! under their account.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use flightlog::{AppState, app, clock::Clock, config::Config, db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");
    if config.aerodatabox_api_key.is_none() {
        tracing::warn!("AERODATABOX_API_KEY not set; all enrichment will use synthetic estimates");
    }

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let addr = format!("0.0.0.0:{}", config.server_port);

    // Production wiring: real wall clock
    let state = AppState { pool, config, clock: Clock::System };
    let app = app(state);

    // Bind to network address and start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
