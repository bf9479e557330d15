//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating and managing a PostgreSQL connection pool
//! - Running schema migrations at startup

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool.
///
/// Shorthand for `Pool<Postgres>`, which shows up in nearly every signature
/// that touches storage.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool hands out reusable connections across HTTP requests instead of
/// dialing the database per request.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Configuration
///
/// - Maximum connections: 5
/// - Connections are created lazily as needed and kept alive while idle
///
/// # Errors
///
/// Returns an error if:
/// - The connection string is malformed
/// - The PostgreSQL server is unreachable
/// - Authentication fails
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Applies every pending SQL migration in order. Applied migrations are
/// recorded in the `_sqlx_migrations` table, so each file runs exactly once
/// per database.
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Migration Files
///
/// Migration files live in `migrations/` and are named
/// `<timestamp>_<name>.sql` (e.g. `20260110000002_create_flights.sql`).
///
/// # Errors
///
/// Returns an error if a migration file is unreadable, contains invalid SQL,
/// or the database rejects it.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds the ./migrations directory at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
