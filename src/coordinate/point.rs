//! Plain two-field coordinate value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::factory::SimpleCoordinateFactory;
use super::traits::{self, Coordinate};
use crate::errors::CoordError;
use crate::utils::parse_utils::parse_coordinate;

/// An immutable latitude/longitude pair
///
/// Equality, ordering and hashing follow the exact-value contract of
/// [`traits::compare`]; use [`Coordinate::same_location`] for tolerance checks.
#[derive(Debug, Clone, Copy)]
pub struct SimpleCoordinate {
    latitude: f64,
    longitude: f64,
}

impl SimpleCoordinate {
    /// Create a new coordinate from degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        SimpleCoordinate { latitude, longitude }
    }
}

impl Coordinate for SimpleCoordinate {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for SimpleCoordinate {
    fn eq(&self, other: &Self) -> bool {
        traits::compare(self, other) == Ordering::Equal
    }
}

impl Eq for SimpleCoordinate {}

impl PartialOrd for SimpleCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimpleCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        traits::compare(self, other)
    }
}

impl Hash for SimpleCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        traits::hash(self, state);
    }
}

impl fmt::Display for SimpleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&traits::to_display_string(self))
    }
}

impl FromStr for SimpleCoordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s, &SimpleCoordinateFactory)
    }
}
