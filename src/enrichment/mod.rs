//! Flight enrichment: turning flight-number + date into a full itinerary.
//!
//! Two paths produce the same canonical [`EnrichedFlight`] shape:
//!
//! - [`provider`]: the live AeroDataBox client
//! - [`mock`]: the synthetic generator, used whenever live data is
//!   unavailable
//!
//! The orchestrator tries the live path exactly once and absorbs every live
//! failure (missing credential, rate limit, upstream error, network error)
//! into a mock fallback. Callers always get a result; the only signal of what
//! happened is the returned [`Provenance`].

pub mod mock;
pub mod provider;

pub use mock::MockGenerator;
pub use provider::ProviderError;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::config::Config;
use crate::db::DbPool;
use crate::models::flight::{EnrichedFlight, Provenance};
use crate::services::cache;

/// Enrich one flight: a single live attempt, then the synthetic fallback.
///
/// Never fails and never retries. "Flight not found" and every flavor of
/// provider failure all land in the estimated path; they differ only in what
/// gets logged.
pub async fn enrich(
    config: &Config,
    flight_number: &str,
    date: NaiveDate,
    clock: &Clock,
) -> (EnrichedFlight, Provenance) {
    match provider::fetch(config, flight_number, date, clock).await {
        Ok(Some(flight)) => (flight, Provenance::Live),
        Ok(None) => {
            tracing::info!("No live data for {} on {}, generating estimate", flight_number, date);
            let flight = MockGenerator::new().generate(flight_number, date, clock).await;
            (flight, Provenance::Estimated)
        }
        Err(err) => {
            tracing::warn!(
                "Live lookup failed for {} on {}, falling back to estimate: {}",
                flight_number,
                date,
                err
            );
            let flight = MockGenerator::new().generate(flight_number, date, clock).await;
            (flight, Provenance::Estimated)
        }
    }
}

/// [`enrich`] with the flight cache layered in front.
///
/// A cache hit short-circuits both enrichment paths and counts as live
/// provenance (cached rows originally came from the provider). On a miss the
/// result is enriched normally and, when it was live, offered back to the
/// cache (which only keeps landed flights).
///
/// Cache failures in either direction are logged and otherwise ignored; the
/// cache can be down without taking enrichment with it.
pub async fn enrich_cached(
    pool: &DbPool,
    config: &Config,
    flight_number: &str,
    date: NaiveDate,
    clock: &Clock,
) -> (EnrichedFlight, Provenance) {
    match cache::get_cached_flight(pool, flight_number, date).await {
        Ok(Some(flight)) => {
            tracing::info!("Cache hit for {} on {}", flight_number, date);
            return (flight, Provenance::Live);
        }
        Ok(None) => {}
        Err(err) => {
            tracing::warn!("Cache lookup failed for {} on {}: {}", flight_number, date, err);
        }
    }

    let (flight, provenance) = enrich(config, flight_number, date, clock).await;

    if provenance == Provenance::Live {
        if let Err(err) = cache::put_cached_flight(pool, flight_number, date, &flight).await {
            tracing::warn!("Failed to cache {} on {}: {}", flight_number, date, err);
        }
    }

    (flight, provenance)
}
