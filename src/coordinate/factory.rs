//! Factories for creating coordinates

use std::rc::Rc;

use super::point::SimpleCoordinate;
use super::traits::Coordinate;

/// Builds coordinates of one concrete representation
///
/// Generic algorithms take a factory instead of naming a coordinate type, so
/// callers decide what the algorithm produces.
pub trait CoordinateFactory {
    /// The coordinate type produced by this factory
    type Output: Coordinate;

    /// Create a coordinate from degrees
    fn create(&self, latitude: f64, longitude: f64) -> Self::Output;

    /// Create a new coordinate at the location of `coordinate`
    fn clone_coordinate(&self, coordinate: &dyn Coordinate) -> Self::Output {
        self.create(coordinate.latitude(), coordinate.longitude())
    }
}

impl<F: CoordinateFactory + ?Sized> CoordinateFactory for &F {
    type Output = F::Output;

    fn create(&self, latitude: f64, longitude: f64) -> Self::Output {
        (**self).create(latitude, longitude)
    }

    fn clone_coordinate(&self, coordinate: &dyn Coordinate) -> Self::Output {
        (**self).clone_coordinate(coordinate)
    }
}

/// Factory for [`SimpleCoordinate`] values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleCoordinateFactory;

impl CoordinateFactory for SimpleCoordinateFactory {
    type Output = SimpleCoordinate;

    fn create(&self, latitude: f64, longitude: f64) -> SimpleCoordinate {
        SimpleCoordinate::new(latitude, longitude)
    }
}

/// Factory for reference-counted [`SimpleCoordinate`] handles
///
/// Every call allocates, so clones never alias their source. Lists of these
/// handles share elements on shallow copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharedCoordinateFactory;

impl CoordinateFactory for SharedCoordinateFactory {
    type Output = Rc<SimpleCoordinate>;

    fn create(&self, latitude: f64, longitude: f64) -> Rc<SimpleCoordinate> {
        Rc::new(SimpleCoordinate::new(latitude, longitude))
    }
}
