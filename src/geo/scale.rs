//! Length of a degree in meters

/// Approximate meters per degree of latitude
const LATITUDE_DEGREE_METERS: f64 = 111_132.954;

/// Equatorial circumference in meters
const EQUATOR_METERS: f64 = 40_075_017.0;

/// Length of one degree of latitude in meters
///
/// Treated as constant over the globe; the true value varies between about
/// 110.57 km and 111.69 km.
pub fn latitude_degree_length_meters() -> f64 {
    LATITUDE_DEGREE_METERS
}

/// Length of one degree of longitude in meters at `latitude` (degrees)
pub fn longitude_degree_length_meters(latitude: f64) -> f64 {
    EQUATOR_METERS * latitude.to_radians().cos() / 360.0
}

/// Longitude degree length as computed by earlier releases
///
/// Feeds `latitude` to the cosine without converting it to radians and scales
/// by the circumference in kilometers. Only useful for reproducing stored
/// values; use [`longitude_degree_length_meters`] otherwise.
pub fn longitude_degree_length_legacy(latitude: f64) -> f64 {
    40_075.017 * latitude.cos() / 360.0
}
