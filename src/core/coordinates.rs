use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Query parameter names accepted for latitude, in priority order
pub const LATITUDE_KEYS: [&str; 3] = ["lat", "latitude", "latitud"];

/// Query parameter names accepted for longitude, in priority order
pub const LONGITUDE_KEYS: [&str; 4] = ["lon", "lng", "longitude", "longitud"];

/// Which end of a coordinate range was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// Errors produced while reading a coordinate pair
///
/// The display strings are part of the public API contract and are returned
/// to clients unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Debes indicar `lat` y `lon` como números (ej: ?lat=-31.3648&lon=-64.149057). También se aceptan `latitude`/`longitude` y `lng`.")]
    Unparseable,

    /// The message names the full range; read `bound` for the side crossed
    #[error("El parámetro `lat` debe estar entre -90 y 90.")]
    LatitudeOutOfRange { value: f64, bound: Bound },

    /// The message names the full range; read `bound` for the side crossed
    #[error("El parámetro `lon` debe estar entre -180 y 180.")]
    LongitudeOutOfRange { value: f64, bound: Bound },
}

/// A validated geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LON: f64 = -180.0;
    pub const MAX_LON: f64 = 180.0;

    /// Build a coordinate, rejecting NaN and anything outside the valid ranges
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if lat.is_nan() || lon.is_nan() {
            return Err(CoordinateError::Unparseable);
        }

        if let Some(bound) = crossed_bound(lat, Self::MIN_LAT, Self::MAX_LAT) {
            return Err(CoordinateError::LatitudeOutOfRange { value: lat, bound });
        }

        if let Some(bound) = crossed_bound(lon, Self::MIN_LON, Self::MAX_LON) {
            return Err(CoordinateError::LongitudeOutOfRange { value: lon, bound });
        }

        Ok(Self { lat, lon })
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

#[inline]
fn crossed_bound(value: f64, min: f64, max: f64) -> Option<Bound> {
    if value < min {
        Some(Bound::Min)
    } else if value > max {
        Some(Bound::Max)
    } else {
        None
    }
}

/// Read a coordinate pair from query parameters
///
/// Aliases are checked in priority order and the first key present wins,
/// even when its value is empty. A decimal comma (`-31,3648`) is accepted.
/// Missing or non-numeric values are reported before any range problem.
pub fn parse_coordinates(params: &HashMap<String, String>) -> Result<Coordinate, CoordinateError> {
    let lat = first_present(params, &LATITUDE_KEYS).and_then(parse_degrees);
    let lon = first_present(params, &LONGITUDE_KEYS).and_then(parse_degrees);

    match (lat, lon) {
        (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
        _ => Err(CoordinateError::Unparseable),
    }
}

fn first_present<'a>(params: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| params.get(*key)).map(String::as_str)
}

/// Normalize a decimal comma and read the leading number
fn parse_degrees(raw: &str) -> Option<f64> {
    let normalized = raw.replacen(',', ".", 1);
    parse_leading_float(&normalized)
}

/// Read the longest decimal literal at the start of `raw`
///
/// Leading whitespace is skipped and trailing characters are ignored, so
/// `"-31.4abc"` reads as `-31.4`. Returns `None` when no digits are found.
pub(crate) fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
