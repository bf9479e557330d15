//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (validation, enrichment, database queries)
//! 3. Returns HTTP response (JSON, status code)

/// Flight log endpoints
pub mod flights;
/// Health check endpoint
pub mod health;
/// Flight statistics endpoint
pub mod stats;
