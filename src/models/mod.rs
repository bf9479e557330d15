//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the canonical enrichment shapes shared by both enrichment paths.

/// Flight records, enrichment shapes, and flight API types
pub mod flight;
/// Session authentication model
pub mod session;
