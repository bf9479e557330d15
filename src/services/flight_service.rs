//! Flight service - persistence for logged flights.
//!
//! This service handles:
//! - Inserting enriched flights for a user
//! - Listing a user's flight log
//! - Deleting entries, scoped to their owner
//! - Computing aggregate statistics
//!
//! Every operation is scoped by `user_id`; no query can cross user
//! boundaries.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::flight::{EnrichedFlight, FlightRecord, FlightStats, Provenance};

/// Insert an enriched flight into a user's log.
///
/// # Process
///
/// The enrichment result is flattened into columns alongside the user's
/// original input (`flight_number`, `date`) and the provenance of the data.
/// The same flight may be logged multiple times; each insert is its own row.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `user_id` - Owning user
/// * `flight_number` - Normalized flight number (trimmed, uppercase)
/// * `date` - Flight date
/// * `flight` - Enrichment result to flatten
/// * `source` - Whether the data was live or estimated
///
/// # Returns
///
/// The stored record, including its generated id and timestamp.
pub async fn insert_flight(
    pool: &DbPool,
    user_id: Uuid,
    flight_number: &str,
    date: NaiveDate,
    flight: &EnrichedFlight,
    source: Provenance,
) -> Result<FlightRecord, AppError> {
    let record = sqlx::query_as::<_, FlightRecord>(
        r#"
        INSERT INTO flights (
            user_id,
            flight_number,
            date,
            airline,
            departure_airport, departure_airport_name, departure_country,
            departure_time, departure_time_actual, departure_terminal,
            arrival_airport, arrival_airport_name, arrival_country,
            arrival_time, arrival_time_actual, arrival_terminal,
            status,
            aircraft,
            distance_km,
            source
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
            $11, $12, $13, $14, $15, $16, $17, $18, $19, $20
        )
        RETURNING *
        "#,
    )
    .bind(user_id)
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
    .bind(source.as_str())
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// List a user's flights, newest flight date first.
///
/// Same-date flights are ordered by insertion time, newest first, so the list
/// is stable across refreshes.
pub async fn list_flights(pool: &DbPool, user_id: Uuid) -> Result<Vec<FlightRecord>, AppError> {
    let flights = sqlx::query_as::<_, FlightRecord>(
        r#"
        SELECT * FROM flights
        WHERE user_id = $1
        ORDER BY date DESC, created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(flights)
}

/// Delete one flight entry, scoped to its owner.
///
/// Deleting an id that doesn't exist, or that belongs to another user, is a
/// quiet no-op rather than an error: the end state ("this user has no such
/// entry") is identical either way, and not distinguishing the cases avoids
/// leaking whether a given id exists at all.
pub async fn delete_flight(
    pool: &DbPool,
    user_id: Uuid,
    flight_id: Uuid,
) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM flights WHERE id = $1 AND user_id = $2")
        .bind(flight_id)
        .bind(user_id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        tracing::debug!("Delete of flight {} for user {} matched no rows", flight_id, user_id);
    }

    Ok(())
}

/// Compute aggregate statistics over a user's flight log.
///
/// # Definitions
///
/// * `upcoming_flights`: dated today or later; `past_flights`: dated strictly
///   before today. "Today" comes from the caller's clock, not the database's.
/// * `total_distance_km`: sum of known distances over flights that landed or
///   are in the past. A scheduled future flight hasn't been flown yet, so it
///   contributes nothing.
/// * `airports_visited`: distinct airport codes across both departure and
///   arrival legs.
/// * `airlines_flown`: distinct airline names.
///
/// Computed entirely in SQL; one round trip regardless of log size.
pub async fn flight_stats(
    pool: &DbPool,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<FlightStats, AppError> {
    let stats = sqlx::query_as::<_, FlightStats>(
        r#"
        SELECT
            COUNT(*)                           AS total_flights,
            COUNT(*) FILTER (WHERE date >= $2) AS upcoming_flights,
            COUNT(*) FILTER (WHERE date < $2)  AS past_flights,
            COALESCE(
                SUM(distance_km) FILTER (WHERE status = 'landed' OR date < $2),
                0
            )::BIGINT                          AS total_distance_km,
            (
                SELECT COUNT(*) FROM (
                    SELECT departure_airport FROM flights WHERE user_id = $1
                    UNION
                    SELECT arrival_airport FROM flights WHERE user_id = $1
                ) AS visited
            )                                  AS airports_visited,
            COUNT(DISTINCT airline)            AS airlines_flown
        FROM flights
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .bind(today)
    .fetch_one(pool)
    .await?;

    Ok(stats)
}
