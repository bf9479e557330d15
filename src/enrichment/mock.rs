//! Synthetic flight enrichment.
//!
//! Generates plausible itineraries when live data is unavailable for any
//! reason. Always succeeds: routes come from a small fixed pool of major
//! airports, times and statuses are drawn from a seedable RNG, and a short
//! simulated delay keeps the call shaped like a network round trip so callers
//! never learn to expect the fallback to be instant.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use regex::Regex;

use crate::airports::{self, Airport, haversine_km};
use crate::clock::Clock;
use crate::models::flight::{EnrichedFlight, FlightLeg, FlightStatus};

/// Airline names keyed by 2-letter IATA prefix.
const AIRLINES: [(&str, &str); 20] = [
    ("BA", "British Airways"),
    ("AA", "American Airlines"),
    ("UA", "United Airlines"),
    ("DL", "Delta Air Lines"),
    ("LH", "Lufthansa"),
    ("AF", "Air France"),
    ("KL", "KLM Royal Dutch Airlines"),
    ("EK", "Emirates"),
    ("QF", "Qantas"),
    ("SQ", "Singapore Airlines"),
    ("CX", "Cathay Pacific"),
    ("JL", "Japan Airlines"),
    ("NH", "All Nippon Airways"),
    ("VS", "Virgin Atlantic"),
    ("IB", "Iberia"),
    ("AY", "Finnair"),
    ("SK", "SAS Scandinavian"),
    ("LX", "Swiss International"),
    ("OS", "Austrian Airlines"),
    ("EI", "Aer Lingus"),
];

/// Aircraft models the generator can assign.
const AIRCRAFT: [&str; 8] = [
    "Boeing 777-300ER",
    "Boeing 787-9 Dreamliner",
    "Boeing 747-400",
    "Airbus A380-800",
    "Airbus A350-900",
    "Airbus A320neo",
    "Boeing 737 MAX 8",
    "Airbus A330-300",
];

/// Candidate route endpoints. Kept much smaller than the full directory;
/// fallback routes only need to look plausible, not exhaustive.
const POOL_CODES: [&str; 15] = [
    "LHR", "JFK", "LAX", "CDG", "FRA", "DXB", "SIN", "HKG", "NRT", "SYD", "AMS", "MAD", "MUC",
    "ORD", "SFO",
];

/// Assumed average cruise speed for deriving flight duration from distance.
const CRUISE_SPEED_KMH: f64 = 800.0;

/// Possible statuses for a flight dated today.
const TODAY_STATUSES: [FlightStatus; 4] = [
    FlightStatus::Scheduled,
    FlightStatus::Active,
    FlightStatus::Landed,
    FlightStatus::Delayed,
];

static AIRLINE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{2})").expect("airline prefix pattern compiles"));

static ROUTE_POOL: LazyLock<Vec<&'static Airport>> =
    LazyLock::new(|| POOL_CODES.iter().filter_map(|code| airports::lookup(code)).collect());

/// Synthetic itinerary generator with an explicit random source.
///
/// Production callers use [`MockGenerator::new`] (OS entropy); tests use
/// [`MockGenerator::with_seed`] to make every draw reproducible.
pub struct MockGenerator {
    rng: StdRng,
}

impl MockGenerator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// A deterministic generator for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate a full itinerary for a flight number and date.
    ///
    /// Sleeps 300-800 ms first to mimic a provider round trip, then derives:
    /// - airline from the flight number's 2-letter prefix
    /// - a random distinct airport pair from the route pool
    /// - departure between 06:00 and 21:55 UTC on `date`, minutes in
    ///   5-minute steps
    /// - arrival from the haversine distance at an assumed 800 km/h cruise
    /// - status from how `date` relates to the clock's today
    ///
    /// Unlike the live path this never produces an unknown distance, and the
    /// departure and arrival codes are always distinct.
    pub async fn generate(
        &mut self,
        flight_number: &str,
        date: NaiveDate,
        clock: &Clock,
    ) -> EnrichedFlight {
        let delay = self.rng.random_range(300..=800);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        self.synthesize(flight_number, date, clock)
    }

    /// The synchronous generation core, separated from the simulated delay.
    fn synthesize(&mut self, flight_number: &str, date: NaiveDate, clock: &Clock) -> EnrichedFlight {
        let airline = airline_name(flight_number);
        let (from, to) = self.pick_route();

        let departure_time = self.departure_time(date);
        let distance_km =
            haversine_km(from.latitude, from.longitude, to.latitude, to.longitude).round() as i32;
        let duration_hours = f64::from(distance_km) / CRUISE_SPEED_KMH;
        let arrival_time = departure_time
            + chrono::Duration::milliseconds((duration_hours * 3_600_000.0).round() as i64);

        let status = self.status_for(date, clock);

        EnrichedFlight {
            airline,
            departure: FlightLeg {
                airport_code: from.code.to_string(),
                airport_name: None,
                country: None,
                scheduled_time: departure_time,
                actual_time: None,
                terminal: self.terminal(),
            },
            arrival: FlightLeg {
                airport_code: to.code.to_string(),
                airport_name: None,
                country: None,
                scheduled_time: arrival_time,
                actual_time: None,
                terminal: self.terminal(),
            },
            status,
            aircraft: Some(AIRCRAFT[self.rng.random_range(0..AIRCRAFT.len())].to_string()),
            distance_km: Some(distance_km),
        }
    }

    /// Two distinct airports, uniformly at random from the pool.
    fn pick_route(&mut self) -> (&'static Airport, &'static Airport) {
        let pool = &*ROUTE_POOL;
        let from = pool[self.rng.random_range(0..pool.len())];
        let mut to = pool[self.rng.random_range(0..pool.len())];
        while to.code == from.code {
            to = pool[self.rng.random_range(0..pool.len())];
        }
        (from, to)
    }

    /// A departure instant on `date`: hour in [6,22), minute in 5-minute steps.
    fn departure_time(&mut self, date: NaiveDate) -> DateTime<Utc> {
        let hour = self.rng.random_range(6..22u32);
        let minute = self.rng.random_range(0..12u32) * 5;
        date.and_hms_opt(hour, minute, 0)
            .expect("hour and minute are in range")
            .and_utc()
    }

    /// Status policy relative to the clock's "today":
    /// - future date: scheduled
    /// - today: uniformly one of scheduled/active/landed/delayed
    /// - past date: landed with probability 0.9, else cancelled
    fn status_for(&mut self, date: NaiveDate, clock: &Clock) -> FlightStatus {
        let today = clock.today();
        if date > today {
            FlightStatus::Scheduled
        } else if date == today {
            TODAY_STATUSES[self.rng.random_range(0..TODAY_STATUSES.len())]
        } else if self.rng.random_bool(0.9) {
            FlightStatus::Landed
        } else {
            FlightStatus::Cancelled
        }
    }

    /// 70% chance of a terminal in {1..5}, else absent.
    fn terminal(&mut self) -> Option<String> {
        if self.rng.random_bool(0.7) {
            Some(self.rng.random_range(1..=5).to_string())
        } else {
            None
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a flight number's leading 2-letter prefix to an airline name.
///
/// Unknown prefixes become "<CODE> Airlines"; numbers without a 2-letter
/// prefix (e.g. "U2986") fall back to "XX Airlines".
fn airline_name(flight_number: &str) -> String {
    let code = AIRLINE_PREFIX
        .captures(flight_number)
        .and_then(|captures| captures.get(1))
        .map(|prefix| prefix.as_str().to_ascii_uppercase())
        .unwrap_or_else(|| "XX".to_string());

    AIRLINES
        .iter()
        .find(|(iata, _)| *iata == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("{code} Airlines"))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn fixed_clock(at: &str) -> Clock {
        Clock::Fixed(at.parse().unwrap())
    }

    #[test]
    fn route_pool_fully_resolves_against_the_directory() {
        assert_eq!(ROUTE_POOL.len(), POOL_CODES.len());
    }

    #[test]
    fn airline_names_from_prefix() {
        assert_eq!(airline_name("BA123"), "British Airways");
        assert_eq!(airline_name("ba123"), "British Airways");
        assert_eq!(airline_name("EK7"), "Emirates");
        assert_eq!(airline_name("ZZ999"), "ZZ Airlines");
        // Digit in the prefix: no 2-letter code to parse
        assert_eq!(airline_name("U2986"), "XX Airlines");
    }

    #[test]
    fn same_seed_gives_same_itinerary() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();

        let a = MockGenerator::with_seed(42).synthesize("BA123", date, &clock);
        let b = MockGenerator::with_seed(42).synthesize("BA123", date, &clock);

        assert_eq!(a, b);
    }

    #[test]
    fn generated_itineraries_hold_their_invariants() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let mut generator = MockGenerator::with_seed(7);

        for _ in 0..200 {
            let flight = generator.synthesize("LH456", date, &clock);

            assert_ne!(flight.departure.airport_code, flight.arrival.airport_code);
            assert!(flight.arrival.scheduled_time > flight.departure.scheduled_time);
            assert!(flight.distance_km.unwrap() > 0);
            assert_eq!(flight.airline, "Lufthansa");
            assert!(flight.aircraft.is_some());

            let departure = flight.departure.scheduled_time;
            assert_eq!(departure.date_naive(), date);
            assert!((6..22).contains(&departure.hour()));
            assert_eq!(departure.minute() % 5, 0);

            for terminal in [&flight.departure.terminal, &flight.arrival.terminal] {
                if let Some(terminal) = terminal {
                    let n: u32 = terminal.parse().unwrap();
                    assert!((1..=5).contains(&n));
                }
            }
        }
    }

    #[test]
    fn future_flights_are_scheduled() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let future = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let mut generator = MockGenerator::with_seed(3);

        for _ in 0..50 {
            let flight = generator.synthesize("BA123", future, &clock);
            assert_eq!(flight.status, FlightStatus::Scheduled);
        }
    }

    #[test]
    fn past_flights_mostly_landed_sometimes_cancelled() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let past = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut generator = MockGenerator::with_seed(11);

        let mut landed = 0;
        let mut cancelled = 0;
        for _ in 0..200 {
            match generator.synthesize("BA123", past, &clock).status {
                FlightStatus::Landed => landed += 1,
                FlightStatus::Cancelled => cancelled += 1,
                other => panic!("unexpected past status {other:?}"),
            }
        }
        assert!(landed > cancelled);
        assert!(cancelled > 0);
    }

    #[test]
    fn todays_flights_cover_the_in_day_statuses() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut generator = MockGenerator::with_seed(19);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let status = generator.synthesize("BA123", today, &clock).status;
            assert!(TODAY_STATUSES.contains(&status));
            seen.insert(status.as_str());
        }
        assert_eq!(seen.len(), TODAY_STATUSES.len());
    }

    #[tokio::test]
    async fn generate_simulates_a_provider_round_trip() {
        let clock = fixed_clock("2026-03-01T12:00:00Z");
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();

        let started = std::time::Instant::now();
        let flight = MockGenerator::with_seed(5).generate("BA123", date, &clock).await;
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(300));
        assert_ne!(flight.departure.airport_code, flight.arrival.airport_code);
    }
}
