//! Coordinate handling for geographic positions
//!
//! This module provides the coordinate capability, a simple value type,
//! factories that decouple algorithms from concrete representations, and
//! coordinate pairs usable as map keys.

mod traits;
mod point;
mod factory;
mod pair;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::traits::{
    compare, hash, same_location, to_display_string, Coordinate, GetCoordinate,
    SAME_LOCATION_EPSILON,
};
pub use self::point::SimpleCoordinate;
pub use self::factory::{CoordinateFactory, SharedCoordinateFactory, SimpleCoordinateFactory};
pub use self::pair::CoordinatePair;
