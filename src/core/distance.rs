use crate::core::coordinates::Coordinate;
use crate::models::CenterRecord;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can leave `a` just above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

impl Coordinate {
    /// Great-circle distance to `other` in kilometers
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self.lat(), self.lon(), other.lat(), other.lon())
    }
}

/// Distance from `query` to a dataset record
///
/// `None` means the record cannot be placed: a coordinate is missing, not
/// numeric, out of range, or the result is not finite. Callers drop such
/// records instead of ranking them.
#[inline]
pub fn distance_to_record(query: &Coordinate, record: &CenterRecord) -> Option<f64> {
    let position = record.coordinate()?;
    let distance = query.distance_to(&position);
    (distance.is_finite() && distance >= 0.0).then_some(distance)
}

/// Round a distance to two decimals for presentation
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
