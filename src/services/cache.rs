//! Flight cache service - stores live provider responses.
//!
//! Backed by the `flight_cache` table, keyed by `(flight_number, date)` and
//! shared across users. Only landed flights are written: their data is final,
//! while anything still scheduled or airborne needs a fresh provider call.
//! Rows are treated as immutable once written.
//!
//! Errors here are `sqlx::Error`, not `AppError`: the cache is an optional
//! collaborator and the enrichment orchestrator degrades to a miss (or an
//! unwritten entry) instead of failing the request.

use chrono::{DateTime, NaiveDate, Utc};

use crate::db::DbPool;
use crate::models::flight::{EnrichedFlight, FlightLeg, FlightStatus};

/// Row shape of `flight_cache`, minus the bookkeeping columns.
#[derive(Debug, sqlx::FromRow)]
struct CachedFlightRow {
    airline: String,
    departure_airport: String,
    departure_airport_name: Option<String>,
    departure_country: Option<String>,
    departure_time: DateTime<Utc>,
    departure_time_actual: Option<DateTime<Utc>>,
    departure_terminal: Option<String>,
    arrival_airport: String,
    arrival_airport_name: Option<String>,
    arrival_country: Option<String>,
    arrival_time: DateTime<Utc>,
    arrival_time_actual: Option<DateTime<Utc>>,
    arrival_terminal: Option<String>,
    status: String,
    aircraft: Option<String>,
    distance_km: Option<i32>,
}

impl From<CachedFlightRow> for EnrichedFlight {
    fn from(row: CachedFlightRow) -> Self {
        EnrichedFlight {
            airline: row.airline,
            departure: FlightLeg {
                airport_code: row.departure_airport,
                airport_name: row.departure_airport_name,
                country: row.departure_country,
                scheduled_time: row.departure_time,
                actual_time: row.departure_time_actual,
                terminal: row.departure_terminal,
            },
            arrival: FlightLeg {
                airport_code: row.arrival_airport,
                airport_name: row.arrival_airport_name,
                country: row.arrival_country,
                scheduled_time: row.arrival_time,
                actual_time: row.arrival_time_actual,
                terminal: row.arrival_terminal,
            },
            // The write path only ever stores landed flights
            status: FlightStatus::parse(&row.status).unwrap_or(FlightStatus::Landed),
            aircraft: row.aircraft,
            distance_km: row.distance_km,
        }
    }
}

/// Look up a cached enrichment result.
///
/// Returns `Ok(None)` on a miss. Cached data originally came from the live
/// provider, so hits count as live provenance.
pub async fn get_cached_flight(
    pool: &DbPool,
    flight_number: &str,
    date: NaiveDate,
) -> Result<Option<EnrichedFlight>, sqlx::Error> {
    let row = sqlx::query_as::<_, CachedFlightRow>(
        r#"
        SELECT
            airline,
            departure_airport, departure_airport_name, departure_country,
            departure_time, departure_time_actual, departure_terminal,
            arrival_airport, arrival_airport_name, arrival_country,
            arrival_time, arrival_time_actual, arrival_terminal,
            status, aircraft, distance_km
        FROM flight_cache
        WHERE flight_number = $1 AND date = $2
        "#,
    )
    .bind(flight_number)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(EnrichedFlight::from))
}

/// Store a live enrichment result, if it is cacheable.
///
/// Returns `Ok(false)` without writing when the flight has not landed.
/// Upserts on `(flight_number, date)` so a re-add of the same flight never
/// conflicts.
pub async fn put_cached_flight(
    pool: &DbPool,
    flight_number: &str,
    date: NaiveDate,
    flight: &EnrichedFlight,
) -> Result<bool, sqlx::Error> {
    // Only landed flights have final data worth keeping
    if flight.status != FlightStatus::Landed {
        tracing::debug!(
            "Skipping cache for {} on {}: status is {}",
            flight_number,
            date,
            flight.status.as_str()
        );
        return Ok(false);
    }

    sqlx::query(
        r#"
        INSERT INTO flight_cache (
            flight_number, date,
            airline,
            departure_airport, departure_airport_name, departure_country,
            departure_time, departure_time_actual, departure_terminal,
            arrival_airport, arrival_airport_name, arrival_country,
            arrival_time, arrival_time_actual, arrival_terminal,
            status, aircraft, distance_km
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
        ON CONFLICT (flight_number, date) DO UPDATE SET
            airline = EXCLUDED.airline,
            departure_airport = EXCLUDED.departure_airport,
            departure_airport_name = EXCLUDED.departure_airport_name,
            departure_country = EXCLUDED.departure_country,
            departure_time = EXCLUDED.departure_time,
            departure_time_actual = EXCLUDED.departure_time_actual,
            departure_terminal = EXCLUDED.departure_terminal,
            arrival_airport = EXCLUDED.arrival_airport,
            arrival_airport_name = EXCLUDED.arrival_airport_name,
            arrival_country = EXCLUDED.arrival_country,
            arrival_time = EXCLUDED.arrival_time,
            arrival_time_actual = EXCLUDED.arrival_time_actual,
            arrival_terminal = EXCLUDED.arrival_terminal,
            status = EXCLUDED.status,
            aircraft = EXCLUDED.aircraft,
            distance_km = EXCLUDED.distance_km
        "#,
    )
    .bind(flight_number)
    .bind(date)
    .bind(&flight.airline)
    .bind(&flight.departure.airport_code)
    .bind(&flight.departure.airport_name)
    .bind(&flight.departure.country)
    .bind(flight.departure.scheduled_time)
    .bind(flight.departure.actual_time)
    .bind(&flight.departure.terminal)
    .bind(&flight.arrival.airport_code)
    .bind(&flight.arrival.airport_name)
    .bind(&flight.arrival.country)
    .bind(flight.arrival.scheduled_time)
    .bind(flight.arrival.actual_time)
    .bind(&flight.arrival.terminal)
    .bind(flight.status.as_str())
    .bind(&flight.aircraft)
    .bind(flight.distance_km)
    .execute(pool)
    .await?;

    tracing::info!("Cached {} on {}", flight_number, date);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_row_maps_back_into_the_canonical_shape() {
        let row = CachedFlightRow {
            airline: "British Airways".to_string(),
            departure_airport: "LHR".to_string(),
            departure_airport_name: Some("London Heathrow".to_string()),
            departure_country: Some("GB".to_string()),
            departure_time: "2026-01-20T14:10:00Z".parse().unwrap(),
            departure_time_actual: Some("2026-01-20T14:25:00Z".parse().unwrap()),
            departure_terminal: Some("5".to_string()),
            arrival_airport: "JFK".to_string(),
            arrival_airport_name: None,
            arrival_country: Some("US".to_string()),
            arrival_time: "2026-01-20T22:05:00Z".parse().unwrap(),
            arrival_time_actual: None,
            arrival_terminal: None,
            status: "landed".to_string(),
            aircraft: Some("Boeing 777-300ER".to_string()),
            distance_km: Some(5555),
        };

        let flight = EnrichedFlight::from(row);

        assert_eq!(flight.status, FlightStatus::Landed);
        assert_eq!(flight.departure.airport_code, "LHR");
        assert_eq!(flight.departure.terminal.as_deref(), Some("5"));
        assert_eq!(flight.arrival.airport_code, "JFK");
        assert_eq!(flight.arrival.actual_time, None);
        assert_eq!(flight.distance_km, Some(5555));
    }
}
