//! Airport directory and great-circle distance.
//!
//! The directory is a static table of major world airports, indexed once into
//! a `HashMap` for O(1) lookups by IATA code. Distances come from the
//! haversine formula over the stored coordinates.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// One directory entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    /// Three-letter IATA code, uppercase.
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

static BY_CODE: LazyLock<HashMap<&'static str, &'static Airport>> =
    LazyLock::new(|| data::AIRPORTS.iter().map(|airport| (airport.code, airport)).collect());

/// Looks up an airport by IATA code.
///
/// The code is trimmed and upper-cased first, so `"lhr"` and `" LHR "` both
/// resolve. Returns `None` for codes outside the directory.
pub fn lookup(code: &str) -> Option<&'static Airport> {
    let code = code.trim().to_ascii_uppercase();
    BY_CODE.get(code.as_str()).copied()
}

/// The country an airport sits in, if the code is known.
pub fn country_of(code: &str) -> Option<&'static str> {
    lookup(code).map(|airport| airport.country)
}

/// Great-circle distance between two airports, rounded to whole kilometers.
///
/// Returns `None` when either code is missing from the directory. Callers
/// treat that as "distance unknown" rather than an error.
pub fn distance_km(from: &str, to: &str) -> Option<i32> {
    let from = lookup(from)?;
    let to = lookup(to)?;
    let km = haversine_km(from.latitude, from.longitude, to.latitude, to.longitude);
    Some(km.round() as i32)
}

/// Haversine distance in kilometers between two coordinates.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
