pub mod errors;
pub mod coordinate;
pub mod list;
pub mod geo;
pub mod utils;
pub mod config;
pub mod commands;

pub use errors::{CoordError, CoordResult};
pub use coordinate::{
    Coordinate, CoordinateFactory, CoordinatePair, GetCoordinate, SharedCoordinateFactory,
    SimpleCoordinate, SimpleCoordinateFactory,
};
pub use list::{
    CoordinateList, CoordinateListFactory, CoordinateListView, VecCoordinateList,
    VecCoordinateListFactory,
};
