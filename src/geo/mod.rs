//! Geodesic calculations
//!
//! Stateless functions for great-circle distance, Mercator-style latitude
//! normalization and the length of a degree in meters.

mod distance;
mod projection;
mod scale;

pub use distance::{distance_meters, path_length_meters, EARTH_DIAMETER_METERS};
pub use projection::{denormalize_latitude, normalize_latitude};
pub use scale::{
    latitude_degree_length_meters, longitude_degree_length_legacy, longitude_degree_length_meters,
};
