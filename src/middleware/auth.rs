//! Session token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the session token from the Authorization header
//! 2. Hash it and verify an unexpired session exists in the database
//! 3. Inject the authenticated user into the request
//! 4. Reject unauthorized requests with HTTP 401
//!
//! Sessions themselves are provisioned out-of-band; this service never issues
//! or refreshes them.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{AppState, error::AppError, models::session::Session};

/// Authentication context attached to authenticated requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know whose flight log to operate on.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// ID of the authenticated user
    ///
    /// Scopes every flight query; nothing a handler does can cross users.
    pub user_id: Uuid,
}

/// Session authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Query database for a matching session where `expires_at` is still in
///    the future
/// 4. If found: inject `CurrentUser` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer abc123xyz
/// ```
///
/// # Returns
///
/// - `Ok(Response)` if authenticated successfully (calls next handler)
/// - `Err(AppError::Unauthorized)` if authentication fails (returns 401)
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // Step 2: Extract Bearer token
    // Expected format: "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    // Step 3: Hash the token using SHA-256
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());

    let token_hash = hex::encode(hasher.finalize());

    // Step 4: Look the hashed token up, rejecting expired sessions in SQL
    let session = sqlx::query_as::<_, Session>(
        "SELECT id, user_id, token_hash, created_at, expires_at
         FROM sessions
         WHERE token_hash = $1 AND expires_at > NOW()",
    )
    .bind(&token_hash)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::Unauthorized)?;

    // Step 5: Inject the user into request extensions
    // Route handlers can now extract this using Extension<CurrentUser>
    request.extensions_mut().insert(CurrentUser { user_id: session.user_id });

    // Step 6: Call the next middleware/handler
    Ok(next.run(request).await)
}
