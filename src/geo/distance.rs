//! Haversine great-circle distance
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for more.
//!
//! **Distance is returned in meters**.

use crate::coordinate::Coordinate;
use crate::list::CoordinateList;

/// Twice the mean Earth radius of 6 371 000 meters
pub const EARTH_DIAMETER_METERS: f64 = 12_742_000.0;

/// Radians per degree
const P: f64 = 0.017453292519943295;

/// Calculate the great-circle distance between two coordinates in meters
///
/// Symmetric in `start` and `end`, zero for coincident points. NaN inputs
/// propagate to the result.
pub fn distance_meters<A, B>(start: &A, end: &B) -> f64
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let a = 0.5 - ((end.latitude() - start.latitude()) * P).cos() / 2.0
        + (start.latitude() * P).cos()
            * (end.latitude() * P).cos()
            * (1.0 - ((end.longitude() - start.longitude()) * P).cos())
            / 2.0;

    // Rounding can push `a` just above 1 for near-antipodal points
    let a = if a > 1.0 { 1.0 } else { a };

    EARTH_DIAMETER_METERS * a.sqrt().asin()
}

/// Sum of the distances between consecutive coordinates of `list`
///
/// Lists with fewer than two coordinates have length 0.
pub fn path_length_meters<C: Coordinate>(list: &dyn CoordinateList<C>) -> f64 {
    let mut coordinates = list.iter();
    let mut previous = match coordinates.next() {
        Some(coordinate) => coordinate,
        None => return 0.0,
    };

    let mut total = 0.0;
    for coordinate in coordinates {
        total += distance_meters(previous, coordinate);
        previous = coordinate;
    }
    total
}
