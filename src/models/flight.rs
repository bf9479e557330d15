//! Flight data models and API request/response types.
//!
//! This module defines:
//! - `EnrichedFlight` / `FlightLeg`: the canonical enrichment result, produced
//!   by both the live provider path and the synthetic fallback
//! - `FlightRecord`: database entity for a logged flight
//! - `AddFlightRequest` and the response types returned to clients
//! - `FlightStats`: aggregate statistics over one user's flights

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a flight.
///
/// Stored in the database as its lowercase string form (see [`as_str`]).
///
/// [`as_str`]: FlightStatus::as_str
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    /// Not yet departed
    Scheduled,
    /// Currently in the air
    Active,
    /// Arrived at the destination
    Landed,
    /// Cancelled by the carrier
    Cancelled,
    /// Delayed or diverted
    Delayed,
}

impl FlightStatus {
    /// The lowercase database/JSON representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Active => "active",
            FlightStatus::Landed => "landed",
            FlightStatus::Cancelled => "cancelled",
            FlightStatus::Delayed => "delayed",
        }
    }

    /// Parses the lowercase string form back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(FlightStatus::Scheduled),
            "active" => Some(FlightStatus::Active),
            "landed" => Some(FlightStatus::Landed),
            "cancelled" => Some(FlightStatus::Cancelled),
            "delayed" => Some(FlightStatus::Delayed),
            _ => None,
        }
    }
}

/// Where a flight's enrichment data came from.
///
/// - `Live`: the upstream flight data provider (or a cache of it)
/// - `Estimated`: the synthetic generator, used whenever live data
///   is unavailable for any reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Estimated,
}

impl Provenance {
    /// The lowercase database/JSON representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Live => "live",
            Provenance::Estimated => "estimated",
        }
    }
}

/// One endpoint (departure or arrival) of an enriched flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLeg {
    /// IATA code, or `"???"` when the provider omitted it
    pub airport_code: String,

    /// Airport display name, when known
    pub airport_name: Option<String>,

    /// Country of the airport, when known
    pub country: Option<String>,

    /// Scheduled time (UTC)
    pub scheduled_time: DateTime<Utc>,

    /// Actual or revised time (UTC)
    ///
    /// Absent when the flight ran exactly to schedule or no revision
    /// was reported.
    pub actual_time: Option<DateTime<Utc>>,

    /// Terminal, when reported
    pub terminal: Option<String>,
}

/// The canonical enrichment result.
///
/// Both enrichment paths (live provider and synthetic generator) produce this
/// same shape, so everything downstream is indifferent to where the data came
/// from. Provenance travels separately as [`Provenance`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFlight {
    /// Operating airline display name
    pub airline: String,

    pub departure: FlightLeg,
    pub arrival: FlightLeg,

    pub status: FlightStatus,

    /// Aircraft model, when known
    pub aircraft: Option<String>,

    /// Great-circle distance in whole kilometers
    ///
    /// `None` when the provider gave no distance and the route endpoints are
    /// outside the airport directory.
    pub distance_km: Option<i32>,
}

/// Represents a logged flight from the database.
///
/// # Database Table
///
/// Maps to the `flights` table: the user's input (`flight_number`, `date`)
/// plus the enrichment result flattened into columns, with `source` recording
/// whether the data was live or estimated.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct FlightRecord {
    /// Unique identifier for this flight entry
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Normalized flight number (trimmed, uppercase), e.g. "BA123"
    pub flight_number: String,

    /// Calendar date the flight operates (UTC)
    pub date: NaiveDate,

    /// Airline display name
    pub airline: String,

    pub departure_airport: String,
    pub departure_airport_name: Option<String>,
    pub departure_country: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub departure_time_actual: Option<DateTime<Utc>>,
    pub departure_terminal: Option<String>,

    pub arrival_airport: String,
    pub arrival_airport_name: Option<String>,
    pub arrival_country: Option<String>,
    pub arrival_time: DateTime<Utc>,
    pub arrival_time_actual: Option<DateTime<Utc>>,
    pub arrival_terminal: Option<String>,

    /// Flight status ("scheduled", "active", "landed", "cancelled", "delayed")
    pub status: String,

    /// Aircraft model, when known
    pub aircraft: Option<String>,

    /// Great-circle distance in whole kilometers, when known
    pub distance_km: Option<i32>,

    /// Data provenance ("live" or "estimated")
    pub source: String,

    /// When the entry was logged
    pub created_at: DateTime<Utc>,
}

/// Request to log a flight.
///
/// # JSON Example
///
/// ```json
/// {
///   "flight_number": "BA123",
///   "date": "2026-03-15"
/// }
/// ```
///
/// # Validation
///
/// Both fields are deserialized as optional so that a missing field produces
/// a "required" message while a malformed value produces a format message.
/// The handler validates:
/// - `flight_number` against the airline-designator pattern (BA123, EZY456, U2986)
/// - `date` as a real `YYYY-MM-DD` calendar date
#[derive(Debug, Deserialize)]
pub struct AddFlightRequest {
    /// Flight designator, e.g. "BA123"
    pub flight_number: Option<String>,

    /// Flight date in YYYY-MM-DD form
    pub date: Option<String>,
}

/// Response returned for flight read/write operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "flight_number": "BA123",
///   "date": "2026-03-15",
///   "airline": "British Airways",
///   "departure_airport": "LHR",
///   "departure_time": "2026-03-15T14:10:00Z",
///   "arrival_airport": "JFK",
///   "arrival_time": "2026-03-15T21:05:00Z",
///   "status": "scheduled",
///   "distance_km": 5555,
///   "source": "live",
///   "created_at": "2026-03-01T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub id: Uuid,
    pub flight_number: String,
    pub date: NaiveDate,
    pub airline: String,
    pub departure_airport: String,
    pub departure_airport_name: Option<String>,
    pub departure_country: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub departure_time_actual: Option<DateTime<Utc>>,
    pub departure_terminal: Option<String>,
    pub arrival_airport: String,
    pub arrival_airport_name: Option<String>,
    pub arrival_country: Option<String>,
    pub arrival_time: DateTime<Utc>,
    pub arrival_time_actual: Option<DateTime<Utc>>,
    pub arrival_terminal: Option<String>,
    pub status: String,
    pub aircraft: Option<String>,
    pub distance_km: Option<i32>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Convert database FlightRecord to API FlightResponse.
///
/// This removes the internal `user_id`; clients only ever see their own
/// flights, so the owner column is noise.
impl From<FlightRecord> for FlightResponse {
    fn from(record: FlightRecord) -> Self {
        Self {
            id: record.id,
            flight_number: record.flight_number,
            date: record.date,
            airline: record.airline,
            departure_airport: record.departure_airport,
            departure_airport_name: record.departure_airport_name,
            departure_country: record.departure_country,
            departure_time: record.departure_time,
            departure_time_actual: record.departure_time_actual,
            departure_terminal: record.departure_terminal,
            arrival_airport: record.arrival_airport,
            arrival_airport_name: record.arrival_airport_name,
            arrival_country: record.arrival_country,
            arrival_time: record.arrival_time,
            arrival_time_actual: record.arrival_time_actual,
            arrival_terminal: record.arrival_terminal,
            status: record.status,
            aircraft: record.aircraft,
            distance_km: record.distance_km,
            source: record.source,
            created_at: record.created_at,
        }
    }
}

/// Response for a successful add, pairing the stored flight with where its
/// data came from.
///
/// # JSON Example
///
/// ```json
/// {
///   "flight": { "id": "...", "flight_number": "BA123", "...": "..." },
///   "source": "estimated"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AddFlightResponse {
    pub flight: FlightResponse,
    pub source: Provenance,
}

/// Aggregate statistics over one user's flight log.
///
/// # JSON Example
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
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct FlightStats {
    /// All logged flights
    pub total_flights: i64,

    /// Flights dated today or later
    pub upcoming_flights: i64,

    /// Flights dated strictly before today
    pub past_flights: i64,

    /// Sum of known distances over flights that landed or are in the past
    ///
    /// Upcoming flights don't count toward distance flown, and neither do
    /// flights with no known distance.
    pub total_distance_km: i64,

    /// Distinct airports across both departure and arrival legs
    pub airports_visited: i64,

    /// Distinct airline names
    pub airlines_flown: i64,
}
