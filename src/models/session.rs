//! Session model for authentication.
//!
//! Sessions are issued out-of-band (account signup and login are not part of
//! this service) and presented as bearer tokens. Tokens are stored in the
//! database as SHA-256 hashes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents a session record from the database.
///
/// # Database Table
///
/// Maps to the `sessions` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `user_id`: The user this session belongs to
/// - `token_hash`: SHA-256 hash of the actual session token
/// - `created_at`: When the session was issued
/// - `expires_at`: When the session stops being valid
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    /// Unique identifier for this session
    pub id: Uuid,

    /// The user authenticated by this session
    pub user_id: Uuid,

    /// SHA-256 hash of the actual session token (64 hex characters)
    ///
    /// When a request comes in with "Bearer abc123", we:
    /// 1. Hash "abc123" with SHA-256
    /// 2. Look up this hash in the database
    /// 3. If found and unexpired, authenticate the request
    pub token_hash: String,

    /// Timestamp when this session was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which this session is rejected
    ///
    /// Expiry is checked in SQL against the database clock, so revocation
    /// takes effect on the very next request.
    pub expires_at: DateTime<Utc>,
}
