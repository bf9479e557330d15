//! Flight statistics HTTP handler.

use axum::{Extension, Json, extract::State};

use crate::{
    AppState, error::AppError, middleware::auth::CurrentUser, models::flight::FlightStats,
    services::flight_service,
};

/// Aggregate statistics for the authenticated user's flight log.
///
/// # Endpoint
///
/// `GET /api/v1/stats`
///
/// # Authentication
///
/// Requires a valid session token.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "total_flights": 12,
///   "upcoming_flights": 3,
///   "past_flights": 9,
///   "total_distance_km": 48210,
///   "airports_visited": 11,
///   "airlines_flown": 5
/// }
/// ```
///
/// "Today" for the upcoming/past split comes from the application clock, so
/// the boundary is UTC midnight.
pub async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<FlightStats>, AppError> {
    let stats =
        flight_service::flight_stats(&state.pool, user.user_id, state.clock.today()).await?;

    Ok(Json(stats))
}
