//! Flight log service library.
//!
//! A personal flight logging API: users submit a flight number and date, the
//! service enriches that into a full itinerary (live provider data when
//! available, a synthetic estimate otherwise), and the result lands in a
//! per-user flight log with aggregate statistics on top.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: bearer session tokens with SHA-256 hashing
//! - **Enrichment**: AeroDataBox client with an always-available synthetic
//!   fallback; provenance (`live`/`estimated`) recorded on every record
//! - **Format**: JSON requests/responses

pub mod airports;
pub mod clock;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::clock::Clock;
use crate::config::Config;
use crate::db::DbPool;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: DbPool,

    /// Loaded configuration (provider credentials live here)
    pub config: Config,

    /// Time source for status classification and the upcoming/past split
    pub clock: Clock,
}

/// Build the HTTP router.
///
/// Separated from `main` so tests can assemble the exact production router
/// around their own state.
///
/// # Routes
///
/// - `GET /health` - public health check
/// - `POST /api/v1/flights` - log a flight (session required)
/// - `GET /api/v1/flights` - list flights (session required)
/// - `DELETE /api/v1/flights/{id}` - delete a flight (session required)
/// - `GET /api/v1/stats` - aggregate statistics (session required)
pub fn app(state: AppState) -> Router {
    // Authenticated routes (API endpoints)
    let authenticated_routes = Router::new()
        // Flight log routes
        .route("/api/v1/flights", post(handlers::flights::add_flight))
        .route("/api/v1/flights", get(handlers::flights::list_flights))
        .route("/api/v1/flights/{id}", delete(handlers::flights::delete_flight))
        // Statistics route
        .route("/api/v1/stats", get(handlers::stats::get_stats))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine authenticated routes with public routes
    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        // Merge authenticated routes
        .merge(authenticated_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // The web frontend is served from a different origin
        .layer(CorsLayer::permissive())
        // Share state with all handlers via State extraction
        .with_state(state)
}
