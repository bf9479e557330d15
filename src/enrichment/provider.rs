//! Live flight data client for AeroDataBox (via RapidAPI).
//!
//! One GET per lookup, keyed by cleaned flight number and date. The provider's
//! deeply optional response shape is modeled as raw structs and collapsed into
//! the canonical [`EnrichedFlight`] in [`normalize`]; nothing outside this
//! module ever sees a provider field.
//!
//! Every failure mode here is internal to enrichment: the orchestrator
//! absorbs [`ProviderError`] into a synthetic fallback and callers never see
//! it.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::clock::Clock;
use crate::config::Config;
use crate::models::flight::{EnrichedFlight, FlightLeg, FlightStatus};

/// Why a live lookup failed.
///
/// `NotConfigured` is fatal for the call (no credential, nothing to retry);
/// the rest distinguish rate limiting from other upstream failures so the log
/// line says which one happened.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("flight data provider is not configured")]
    NotConfigured,

    #[error("provider rate limit exceeded")]
    RateLimited,

    #[error("provider returned HTTP {0}")]
    Upstream(u16),

    #[error("failed to reach flight data provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid provider base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Raw provider payload, exactly as AeroDataBox ships it.
///
/// Every field can be absent. Defaulting happens once, in [`normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFlight {
    pub great_circle_distance: Option<RawDistance>,
    pub airline: Option<RawAirline>,
    pub departure: Option<RawLeg>,
    pub arrival: Option<RawLeg>,
    pub status: Option<String>,
    pub aircraft: Option<RawAircraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawDistance {
    pub km: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawAirline {
    pub name: Option<String>,
    pub iata: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLeg {
    pub airport: Option<RawAirport>,
    pub scheduled_time: Option<RawTime>,
    // Departures carry revisedTime, arrivals predictedTime; a leg never has both.
    pub revised_time: Option<RawTime>,
    pub predicted_time: Option<RawTime>,
    pub actual_time: Option<RawTime>,
    pub terminal: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAirport {
    pub iata: Option<String>,
    pub name: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawTime {
    pub utc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawAircraft {
    pub model: Option<String>,
}

/// Fetch and normalize flight data for one flight number and date.
///
/// Exactly one request, no retries. Returns:
/// - `Ok(Some(flight))` on a usable provider answer
/// - `Ok(None)` when the provider reports the flight as unknown (it answers
///   HTTP 204 rather than 404 for this, so both are treated as "not found")
/// - `Err(_)` for everything else (missing credential, 429, other non-2xx,
///   network or decode failure)
pub async fn fetch(
    config: &Config,
    flight_number: &str,
    date: NaiveDate,
    clock: &Clock,
) -> Result<Option<EnrichedFlight>, ProviderError> {
    let Some(api_key) = config.aerodatabox_api_key.as_deref() else {
        return Err(ProviderError::NotConfigured);
    };

    // The provider rejects flight numbers containing whitespace
    let clean = clean_flight_number(flight_number);

    let base = Url::parse(&config.aerodatabox_base_url)?;
    let url = base.join(&format!("flights/number/{clean}/{date}"))?;
    let host = base.host_str().unwrap_or_default().to_string();

    tracing::info!("Fetching flight data for {} on {}", clean, date);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let response = client
        .get(url)
        .header("x-rapidapi-host", &host)
        .header("x-rapidapi-key", api_key)
        .send()
        .await?;

    match response.status() {
        StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => {
            tracing::info!("Flight not found upstream: {} ({})", clean, response.status());
            return Ok(None);
        }
        StatusCode::TOO_MANY_REQUESTS => return Err(ProviderError::RateLimited),
        status if !status.is_success() => return Err(ProviderError::Upstream(status.as_u16())),
        _ => {}
    }

    // The provider answers with an array (multiple legs or dates are
    // possible); the first element is the one for the requested date.
    let flights: Vec<RawFlight> = response.json().await?;
    let Some(first) = flights.into_iter().next() else {
        tracing::info!("Empty provider response for {}", clean);
        return Ok(None);
    };

    let flight = normalize(first, date, clock);
    tracing::info!(
        "Provider data for {}: {} -> {}",
        clean,
        flight.departure.airport_code,
        flight.arrival.airport_code
    );

    Ok(Some(flight))
}

/// Strips whitespace and upper-cases a flight number ("ba 123" -> "BA123").
pub(crate) fn clean_flight_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Collapse a raw provider payload into the canonical shape.
///
/// All defaulting rules live here:
/// - airline: name, else IATA code, else "Unknown Airline"
/// - airport code: IATA, else "???"
/// - scheduled times: parsed from the provider's compact format; if absent,
///   the current time stands in
/// - actual times: actual, else revised/predicted, dropped when equal to the
///   scheduled time (equal means "no revision")
/// - status: substring-mapped, then overridden to `landed` when the provider
///   still says `scheduled` for a date strictly before today
pub(crate) fn normalize(raw: RawFlight, date: NaiveDate, clock: &Clock) -> EnrichedFlight {
    let mut status = map_status(raw.status.as_deref());
    // A past flight the provider never updated has long since flown
    if date < clock.today() && status == FlightStatus::Scheduled {
        status = FlightStatus::Landed;
    }

    let airline = raw
        .airline
        .and_then(|airline| airline.name.or(airline.iata))
        .unwrap_or_else(|| "Unknown Airline".to_string());

    EnrichedFlight {
        airline,
        departure: normalize_leg(raw.departure, clock),
        arrival: normalize_leg(raw.arrival, clock),
        status,
        aircraft: raw.aircraft.and_then(|aircraft| aircraft.model),
        distance_km: raw
            .great_circle_distance
            .and_then(|distance| distance.km)
            .map(|km| km.round() as i32),
    }
}

fn normalize_leg(raw: Option<RawLeg>, clock: &Clock) -> FlightLeg {
    let raw = raw.unwrap_or_default();
    let airport = raw.airport.unwrap_or_default();

    let scheduled_time =
        parse_provider_time(raw.scheduled_time.as_ref()).unwrap_or_else(|| clock.now());
    let actual_time = parse_provider_time(raw.actual_time.as_ref())
        .or_else(|| parse_provider_time(raw.revised_time.as_ref()))
        .or_else(|| parse_provider_time(raw.predicted_time.as_ref()))
        .filter(|actual| *actual != scheduled_time);

    FlightLeg {
        airport_code: airport.iata.unwrap_or_else(|| "???".to_string()),
        airport_name: airport.name,
        country: airport.country_code,
        scheduled_time,
        actual_time,
        terminal: raw.terminal,
    }
}

fn parse_provider_time(raw: Option<&RawTime>) -> Option<DateTime<Utc>> {
    let utc = raw?.utc.as_deref()?;
    DateTime::parse_from_rfc3339(&normalize_timestamp(utc))
        .ok()
        .map(|time| time.with_timezone(&Utc))
}

/// Rewrites the provider's compact "2026-01-20 14:10Z" format into RFC 3339
/// ("2026-01-20T14:10:00Z"). Timestamps that already carry seconds pass
/// through with only the separator fixed.
fn normalize_timestamp(raw: &str) -> String {
    let fixed = raw.trim().replace(' ', "T");
    match fixed.strip_suffix('Z') {
        // "2026-01-20T14:10" is 16 chars: minutes but no seconds
        Some(head) if head.len() == 16 => format!("{head}:00Z"),
        _ => fixed,
    }
}

/// Maps the provider's free-text status onto the five-value enum.
fn map_status(raw: Option<&str>) -> FlightStatus {
    let Some(raw) = raw else {
        return FlightStatus::Scheduled;
    };

    let status = raw.to_lowercase();
    if status.contains("landed") || status.contains("arrived") {
        FlightStatus::Landed
    } else if status.contains("active") || status.contains("en route") || status.contains("airborne")
    {
        FlightStatus::Active
    } else if status.contains("cancelled") {
        FlightStatus::Cancelled
    } else if status.contains("delayed") || status.contains("diverted") {
        FlightStatus::Delayed
    } else {
        FlightStatus::Scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_clock(at: &str) -> Clock {
        Clock::Fixed(at.parse().unwrap())
    }

    fn raw_time(utc: &str) -> Option<RawTime> {
        Some(RawTime { utc: Some(utc.to_string()) })
    }

    #[test]
    fn cleans_flight_numbers() {
        assert_eq!(clean_flight_number("ba 123"), "BA123");
        assert_eq!(clean_flight_number(" ez y 456 "), "EZY456");
        assert_eq!(clean_flight_number("U2986"), "U2986");
    }

    #[test]
    fn normalizes_compact_timestamps() {
        assert_eq!(normalize_timestamp("2026-01-20 14:10Z"), "2026-01-20T14:10:00Z");
        // Already well-formed input passes through
        assert_eq!(normalize_timestamp("2026-01-20T14:10:33Z"), "2026-01-20T14:10:33Z");
        assert_eq!(normalize_timestamp("2026-01-20 14:10:33Z"), "2026-01-20T14:10:33Z");
    }

    #[test]
    fn maps_provider_status_strings() {
        assert_eq!(map_status(None), FlightStatus::Scheduled);
        assert_eq!(map_status(Some("Landed 14:32")), FlightStatus::Landed);
        assert_eq!(map_status(Some("Arrived")), FlightStatus::Landed);
        assert_eq!(map_status(Some("En Route")), FlightStatus::Active);
        assert_eq!(map_status(Some("Airborne")), FlightStatus::Active);
        assert_eq!(map_status(Some("CANCELLED")), FlightStatus::Cancelled);
        assert_eq!(map_status(Some("Diverted to AMS")), FlightStatus::Delayed);
        assert_eq!(map_status(Some("Expected")), FlightStatus::Scheduled);
    }

    #[test]
    fn normalize_applies_defaults_for_sparse_payloads() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let flight = normalize(RawFlight::default(), date, &clock);

        assert_eq!(flight.airline, "Unknown Airline");
        assert_eq!(flight.departure.airport_code, "???");
        assert_eq!(flight.arrival.airport_code, "???");
        // Missing scheduled times fall back to "now"
        assert_eq!(flight.departure.scheduled_time, clock.now());
        assert_eq!(flight.departure.actual_time, None);
        assert_eq!(flight.status, FlightStatus::Scheduled);
        assert_eq!(flight.aircraft, None);
        assert_eq!(flight.distance_km, None);
    }

    #[test]
    fn normalize_prefers_airline_name_over_iata() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let named = RawFlight {
            airline: Some(RawAirline {
                name: Some("British Airways".to_string()),
                iata: Some("BA".to_string()),
            }),
            ..RawFlight::default()
        };
        assert_eq!(normalize(named, date, &clock).airline, "British Airways");

        let iata_only = RawFlight {
            airline: Some(RawAirline { name: None, iata: Some("BA".to_string()) }),
            ..RawFlight::default()
        };
        assert_eq!(normalize(iata_only, date, &clock).airline, "BA");
    }

    #[test]
    fn normalize_backdates_scheduled_past_flights_to_landed() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");

        let yesterday = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let flight = normalize(RawFlight::default(), yesterday, &clock);
        assert_eq!(flight.status, FlightStatus::Landed);

        // Today is not "strictly before today"
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let flight = normalize(RawFlight::default(), today, &clock);
        assert_eq!(flight.status, FlightStatus::Scheduled);

        // Non-scheduled statuses are left alone even in the past
        let cancelled = RawFlight { status: Some("Cancelled".to_string()), ..RawFlight::default() };
        let flight = normalize(cancelled, yesterday, &clock);
        assert_eq!(flight.status, FlightStatus::Cancelled);
    }

    #[test]
    fn normalize_leg_times_and_revisions() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();

        let raw = RawFlight {
            departure: Some(RawLeg {
                scheduled_time: raw_time("2026-01-20 14:10Z"),
                revised_time: raw_time("2026-01-20 14:45Z"),
                ..RawLeg::default()
            }),
            arrival: Some(RawLeg {
                scheduled_time: raw_time("2026-01-20 18:05Z"),
                actual_time: raw_time("2026-01-20 18:22Z"),
                predicted_time: raw_time("2026-01-20 18:40Z"),
                ..RawLeg::default()
            }),
            ..RawFlight::default()
        };
        let flight = normalize(raw, date, &clock);

        assert_eq!(
            flight.departure.scheduled_time,
            "2026-01-20T14:10:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        // No actual time on departure: the revised time stands in
        assert_eq!(
            flight.departure.actual_time,
            Some("2026-01-20T14:45:00Z".parse::<DateTime<Utc>>().unwrap())
        );
        // Actual beats predicted on arrival
        assert_eq!(
            flight.arrival.actual_time,
            Some("2026-01-20T18:22:00Z".parse::<DateTime<Utc>>().unwrap())
        );
    }

    #[test]
    fn normalize_drops_actual_time_equal_to_scheduled() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();

        let raw = RawFlight {
            departure: Some(RawLeg {
                scheduled_time: raw_time("2026-01-20 14:10Z"),
                actual_time: raw_time("2026-01-20 14:10Z"),
                ..RawLeg::default()
            }),
            ..RawFlight::default()
        };
        let flight = normalize(raw, date, &clock);

        assert_eq!(flight.departure.actual_time, None);
    }

    #[test]
    fn normalize_rounds_provider_distance() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let raw = RawFlight {
            great_circle_distance: Some(RawDistance { km: Some(5554.6) }),
            ..RawFlight::default()
        };
        assert_eq!(normalize(raw, date, &clock).distance_km, Some(5555));
    }

    #[test]
    fn raw_payload_deserializes_from_provider_json() {
        let payload = r#"{
            "greatCircleDistance": { "km": 5554.6, "mile": 3451.6 },
            "airline": { "name": "British Airways", "iata": "BA" },
            "departure": {
                "airport": { "iata": "LHR", "name": "London Heathrow", "countryCode": "GB" },
                "scheduledTime": { "utc": "2026-01-20 14:10Z", "local": "2026-01-20 14:10+00:00" },
                "revisedTime": { "utc": "2026-01-20 14:25Z" },
                "terminal": "5"
            },
            "arrival": {
                "airport": { "iata": "JFK", "countryCode": "US" },
                "scheduledTime": { "utc": "2026-01-20 22:05Z" },
                "predictedTime": { "utc": "2026-01-20 22:31Z" }
            },
            "status": "Expected",
            "aircraft": { "model": "Boeing 777-300ER", "reg": "G-STBD" }
        }"#;

        let raw: RawFlight = serde_json::from_str(payload).unwrap();
        let clock = fixed_clock("2026-01-01T00:00:00Z");
        let flight = normalize(raw, NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(), &clock);

        assert_eq!(flight.airline, "British Airways");
        assert_eq!(flight.departure.airport_code, "LHR");
        assert_eq!(flight.departure.country.as_deref(), Some("GB"));
        assert_eq!(flight.departure.terminal.as_deref(), Some("5"));
        assert_eq!(flight.arrival.airport_code, "JFK");
        assert_eq!(flight.arrival.airport_name, None);
        assert_eq!(flight.aircraft.as_deref(), Some("Boeing 777-300ER"));
        assert_eq!(flight.distance_km, Some(5555));
        assert_eq!(flight.status, FlightStatus::Scheduled);
    }
}
