//! Start/end coordinate pair with a stable textual key

use std::fmt;
use std::hash::{Hash, Hasher};

use super::traits::Coordinate;
use crate::geo;

/// An ordered `(start, end)` pair of coordinates
///
/// Equality and hashing use only the derived key
/// `"<startLat>,<startLon>|<endLat>,<endLon>"`, so pairs built from different
/// coordinate representations compare equal when their values are identical.
#[derive(Debug, Clone)]
pub struct CoordinatePair<S, E = S> {
    start: S,
    end: E,
    key: String,
}

impl<S: Coordinate, E: Coordinate> CoordinatePair<S, E> {
    /// Create a new pair and derive its key
    pub fn new(start: S, end: E) -> Self {
        let key = format!(
            "{},{}|{},{}",
            start.latitude(),
            start.longitude(),
            end.latitude(),
            end.longitude()
        );
        CoordinatePair { start, end, key }
    }

    /// Great-circle distance from start to end in meters
    pub fn distance_meters(&self) -> f64 {
        geo::distance_meters(&self.start, &self.end)
    }
}

impl<S, E> CoordinatePair<S, E> {
    /// Start coordinate
    pub fn start(&self) -> &S {
        &self.start
    }

    /// End coordinate
    pub fn end(&self) -> &E {
        &self.end
    }

    /// Canonical key of this pair
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Split the pair back into its coordinates
    pub fn into_parts(self) -> (S, E) {
        (self.start, self.end)
    }
}

impl<S, E, S2, E2> PartialEq<CoordinatePair<S2, E2>> for CoordinatePair<S, E> {
    fn eq(&self, other: &CoordinatePair<S2, E2>) -> bool {
        self.key == other.key
    }
}

impl<S, E> Eq for CoordinatePair<S, E> {}

impl<S, E> Hash for CoordinatePair<S, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<S, E> fmt::Display for CoordinatePair<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
