//! Flight log HTTP handlers.
//!
//! This module implements the flight-related API endpoints:
//! - POST /api/v1/flights - Log a flight (enriching it first)
//! - GET /api/v1/flights - List the authenticated user's flights
//! - DELETE /api/v1/flights/{id} - Remove one flight entry
//!
//! Input validation happens here, before anything reaches enrichment or
//! storage, with distinct messages for missing vs malformed fields.

use std::sync::LazyLock;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::json;
use uuid::Uuid;

use crate::{
    AppState,
    enrichment,
    error::AppError,
    middleware::auth::CurrentUser,
    models::flight::{AddFlightRequest, AddFlightResponse, FlightResponse},
    services::flight_service,
};

/// Airline designator plus flight number: 2-3 alphanumerics then 1-4 digits.
static FLIGHT_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9]{2,3}[0-9]{1,4}$").expect("flight number pattern compiles")
});

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

/// Log a flight for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/v1/flights`
///
/// # Authentication
///
/// Requires a valid session token in the Authorization header.
///
/// # Request Body
///
/// ```json
/// {
///   "flight_number": "BA123",
///   "date": "2026-03-15"
/// }
/// ```
///
/// # Process
///
/// 1. Validate and normalize the input (trim, uppercase the flight number)
/// 2. Enrich via cache -> live provider -> synthetic fallback
/// 3. Store the flattened result in the user's log
///
/// Enrichment cannot fail, so the only error outcomes are validation (400),
/// authentication (401), and storage (500).
///
/// # Response
///
/// - **Success (201 Created)**: The stored flight plus its data source
/// - **Error (400)**: Missing or malformed flight number / date
/// - **Error (401)**: Invalid session
///
/// ```json
/// {
///   "flight": { "id": "...", "flight_number": "BA123", "status": "scheduled" },
///   "source": "estimated"
/// }
/// ```
pub async fn add_flight(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<AddFlightRequest>,
) -> Result<(StatusCode, Json<AddFlightResponse>), AppError> {
    let flight_number = validate_flight_number(request.flight_number.as_deref())?;
    let date = validate_date(request.date.as_deref())?;

    let (enriched, provenance) =
        enrichment::enrich_cached(&state.pool, &state.config, &flight_number, date, &state.clock)
            .await;

    let record = flight_service::insert_flight(
        &state.pool,
        user.user_id,
        &flight_number,
        date,
        &enriched,
        provenance,
    )
    .await?;

    tracing::info!(
        "Logged flight {} on {} for user {} ({})",
        flight_number,
        date,
        user.user_id,
        provenance.as_str()
    );

    Ok((
        StatusCode::CREATED,
        Json(AddFlightResponse { flight: record.into(), source: provenance }),
    ))
}

/// List the authenticated user's flights.
///
/// # Endpoint
///
/// `GET /api/v1/flights`
///
/// # Response
///
/// - **Success (200 OK)**: Array of flights, newest flight date first (may
///   be empty)
/// - **Error (401)**: Invalid session
pub async fn list_flights(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let flights = flight_service::list_flights(&state.pool, user.user_id).await?;

    let responses: Vec<FlightResponse> = flights.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Delete one flight entry.
///
/// # Endpoint
///
/// `DELETE /api/v1/flights/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: `{"success": true}` whether or not the id matched
///   anything this user owns. Deleting an unknown or foreign id reports
///   success because the end state is the same, and a distinct error would
///   leak which ids exist.
/// - **Error (401)**: Invalid session
pub async fn delete_flight(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(flight_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    flight_service::delete_flight(&state.pool, user.user_id, flight_id).await?;

    Ok(Json(json!({ "success": true })))
}

/// Validate and normalize a flight number.
///
/// Missing/empty input and malformed input produce distinct messages so the
/// caller can say exactly what to fix.
fn validate_flight_number(raw: Option<&str>) -> Result<String, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Err(AppError::InvalidRequest("Flight number is required".to_string()));
    };

    if !FLIGHT_NUMBER_RE.is_match(raw) {
        return Err(AppError::InvalidRequest(
            "Invalid flight number format. Use format like BA123, EZY456, or U2986".to_string(),
        ));
    }

    Ok(raw.to_uppercase())
}

/// Validate a date string as a real YYYY-MM-DD calendar date.
fn validate_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Err(AppError::InvalidRequest("Date is required".to_string()));
    };

    // The regex rejects the wrong shape; the parse rejects impossible dates
    // like 2026-02-30
    if !DATE_RE.is_match(raw) {
        return Err(AppError::InvalidRequest("Invalid date format. Use YYYY-MM-DD".to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidRequest("Invalid date format. Use YYYY-MM-DD".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<impl std::fmt::Debug, AppError>) -> String {
        match result {
            Err(AppError::InvalidRequest(message)) => message,
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn accepts_and_normalizes_valid_flight_numbers() {
        assert_eq!(validate_flight_number(Some("BA123")).unwrap(), "BA123");
        assert_eq!(validate_flight_number(Some("ezy456")).unwrap(), "EZY456");
        assert_eq!(validate_flight_number(Some("U2986")).unwrap(), "U2986");
        assert_eq!(validate_flight_number(Some("  lh7  ")).unwrap(), "LH7");
        // Seven characters still fit: designator "BA1", flight number "2345"
        assert_eq!(validate_flight_number(Some("BA12345")).unwrap(), "BA12345");
    }

    #[test]
    fn missing_and_malformed_flight_numbers_report_distinct_messages() {
        assert_eq!(message(validate_flight_number(None)), "Flight number is required");
        assert_eq!(message(validate_flight_number(Some("   "))), "Flight number is required");

        let malformed = message(validate_flight_number(Some("BA")));
        assert!(malformed.starts_with("Invalid flight number format"));
        // Whitespace inside the designator is not tolerated
        let spaced = message(validate_flight_number(Some("BA 123")));
        assert!(spaced.starts_with("Invalid flight number format"));
        // Eight characters: no designator/number split satisfies the pattern
        let long = message(validate_flight_number(Some("BA123456")));
        assert!(long.starts_with("Invalid flight number format"));
    }

    #[test]
    fn accepts_valid_dates() {
        assert_eq!(
            validate_date(Some("2026-03-15")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
    }

    #[test]
    fn missing_and_malformed_dates_report_distinct_messages() {
        assert_eq!(message(validate_date(None)), "Date is required");
        assert_eq!(message(validate_date(Some(""))), "Date is required");

        assert_eq!(
            message(validate_date(Some("15/03/2026"))),
            "Invalid date format. Use YYYY-MM-DD"
        );
        // Right shape, impossible date
        assert_eq!(
            message(validate_date(Some("2026-02-30"))),
            "Invalid date format. Use YYYY-MM-DD"
        );
    }
}
