//! Coordinate capability and its comparison contracts
//!
//! Two notions of "equal" live here and must not be mixed up:
//! [`compare`]/[`hash`] work on the exact `(latitude, longitude)` values and
//! back ordered and hashed collections, while [`same_location`] is a
//! tolerance check used for approximate deduplication.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

/// Tolerance in degrees below which two coordinates describe the same location
pub const SAME_LOCATION_EPSILON: f64 = 0.0000011;

/// A latitude/longitude position in degrees
///
/// Implementors only supply the two accessors; comparison, proximity and
/// rendering come for free and behave identically for every representation.
pub trait Coordinate {
    /// Latitude in degrees, conventionally within [-90, 90]
    fn latitude(&self) -> f64;

    /// Longitude in degrees, conventionally within [-180, 180]
    fn longitude(&self) -> f64;

    /// Total order by latitude, then longitude
    fn compare_to(&self, other: &dyn Coordinate) -> Ordering {
        compare(self, other)
    }

    /// Check whether `other` lies within [`SAME_LOCATION_EPSILON`] on both axes
    fn same_location(&self, other: &dyn Coordinate) -> bool {
        same_location(self, other)
    }

    /// Render as `"<lat>, <lon>"`
    fn to_display_string(&self) -> String {
        to_display_string(self)
    }
}

/// Something that may expose a coordinate, e.g. a waypoint without a fix yet
pub trait GetCoordinate {
    /// The coordinate of this instance, if it has one
    fn coordinate(&self) -> Option<&dyn Coordinate>;
}

impl<T: Coordinate> GetCoordinate for T {
    fn coordinate(&self) -> Option<&dyn Coordinate> {
        Some(self)
    }
}

/// Compare two coordinates by latitude, falling back to longitude on a tie
///
/// Uses IEEE-754 `totalOrder`, so the result is a valid total order even for
/// signed zeros and NaN.
pub fn compare<A, B>(coordinate: &A, other: &B) -> Ordering
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    coordinate
        .latitude()
        .total_cmp(&other.latitude())
        .then_with(|| coordinate.longitude().total_cmp(&other.longitude()))
}

/// Feed latitude and longitude into `state`
///
/// Consistent with [`compare`]: coordinates comparing `Equal` hash identically.
pub fn hash<C, H>(coordinate: &C, state: &mut H)
where
    C: Coordinate + ?Sized,
    H: Hasher,
{
    coordinate.latitude().to_bits().hash(state);
    coordinate.longitude().to_bits().hash(state);
}

/// Check whether two coordinates are closer than [`SAME_LOCATION_EPSILON`] on both axes
pub fn same_location<A, B>(coordinate: &A, other: &B) -> bool
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    (coordinate.latitude() - other.latitude()).abs() < SAME_LOCATION_EPSILON
        && (coordinate.longitude() - other.longitude()).abs() < SAME_LOCATION_EPSILON
}

/// Render a coordinate as `"<lat>, <lon>"`
pub fn to_display_string<C: Coordinate + ?Sized>(coordinate: &C) -> String {
    format!("{}, {}", coordinate.latitude(), coordinate.longitude())
}

impl<T: Coordinate + ?Sized> Coordinate for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

impl<T: Coordinate + ?Sized> Coordinate for Box<T> {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

impl<T: Coordinate + ?Sized> Coordinate for Rc<T> {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

impl<T: Coordinate + ?Sized> Coordinate for Arc<T> {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}
