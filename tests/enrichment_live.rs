//! End-to-end enrichment behavior against a reachable provider.
//!
//! Stands up a local HTTP server that answers the way AeroDataBox does and
//! points the client at it, so the whole fetch -> normalize -> provenance
//! path runs without touching the real API.

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Value, json};

use flightlog::clock::Clock;
use flightlog::config::Config;
use flightlog::enrichment;
use flightlog::models::flight::{FlightStatus, Provenance};

/// Serves `app` on an ephemeral local port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn provider_config(base_url: String) -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        server_port: 3000,
        aerodatabox_api_key: Some("test-key".to_string()),
        aerodatabox_base_url: base_url,
    }
}

fn fixed_clock() -> Clock {
    Clock::Fixed("2026-03-01T12:00:00Z".parse().unwrap())
}

#[tokio::test]
async fn reachable_provider_yields_live_data_from_the_first_array_element() {
    let payload: Value = json!([
        {
            "greatCircleDistance": { "km": 5554.6 },
            "airline": { "name": "British Airways", "iata": "BA" },
            "departure": {
                "airport": { "iata": "LHR", "name": "London Heathrow", "countryCode": "GB" },
                "scheduledTime": { "utc": "2026-01-20 14:10Z" },
                "revisedTime": { "utc": "2026-01-20 14:25Z" },
                "terminal": "5"
            },
            "arrival": {
                "airport": { "iata": "JFK", "countryCode": "US" },
                "scheduledTime": { "utc": "2026-01-20 22:05Z" }
            },
            "status": "Expected",
            "aircraft": { "model": "Boeing 777-300ER" }
        },
        // A later leg of the same number; everything after the first element
        // must be ignored
        {
            "airline": { "name": "Wrong Airways" },
            "departure": { "airport": { "iata": "XXX" } },
            "arrival": { "airport": { "iata": "YYY" } },
            "status": "Cancelled"
        }
    ]);

    let app = Router::new().route(
        "/flights/number/{number}/{date}",
        get(move |headers: HeaderMap| async move {
            // An unauthenticated request would never succeed upstream
            if headers.get("x-rapidapi-key").is_none() {
                return Err(StatusCode::UNAUTHORIZED);
            }
            Ok(Json(payload))
        }),
    );

    let config = provider_config(serve(app).await);
    let clock = fixed_clock();
    let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();

    let (flight, provenance) = enrichment::enrich(&config, "BA123", date, &clock).await;

    assert_eq!(provenance, Provenance::Live);
    assert_eq!(flight.airline, "British Airways");
    assert_eq!(flight.departure.airport_code, "LHR");
    assert_eq!(flight.departure.airport_name.as_deref(), Some("London Heathrow"));
    assert_eq!(flight.departure.country.as_deref(), Some("GB"));
    assert_eq!(flight.departure.terminal.as_deref(), Some("5"));
    assert_eq!(flight.arrival.airport_code, "JFK");

    // Compact provider timestamps come back parsed and second-padded
    assert_eq!(
        flight.departure.scheduled_time,
        "2026-01-20T14:10:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    // No actual time on departure: the revised time stands in
    assert_eq!(
        flight.departure.actual_time,
        Some("2026-01-20T14:25:00Z".parse::<DateTime<Utc>>().unwrap())
    );
    assert_eq!(flight.arrival.actual_time, None);

    // "Expected" maps to scheduled, and a flight dated before the clock's
    // today that is still scheduled has long since flown
    assert_eq!(flight.status, FlightStatus::Landed);

    assert_eq!(flight.distance_km, Some(5555));
    assert_eq!(flight.aircraft.as_deref(), Some("Boeing 777-300ER"));
}

#[tokio::test]
async fn flight_unknown_upstream_falls_back_to_an_estimate() {
    // The provider reports unknown flight numbers as an empty 204
    let app = Router::new().route(
        "/flights/number/{number}/{date}",
        get(|| async { StatusCode::NO_CONTENT }),
    );

    let config = provider_config(serve(app).await);
    let clock = fixed_clock();
    let date = NaiveDate::from_ymd_opt(2027, 6, 15).unwrap();

    let (flight, provenance) = enrichment::enrich(&config, "ZZ999", date, &clock).await;

    assert_eq!(provenance, Provenance::Estimated);
    assert_eq!(flight.airline, "ZZ Airlines");
    assert_eq!(flight.status, FlightStatus::Scheduled);
    assert_ne!(flight.departure.airport_code, flight.arrival.airport_code);
}
