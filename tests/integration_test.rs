//! Integration tests for the coordinate toolkit

extern crate std;

use std::fs;
use std::rc::Rc;

use coordkit::commands::{build_cli, CommandFactory, CoordkitCommandFactory};
use coordkit::config::Settings;
use coordkit::geo::{distance_meters, path_length_meters};
use coordkit::utils::logger::Logger;
use coordkit::{
    Coordinate, CoordinateFactory, CoordinateList, CoordinateListFactory, CoordinatePair,
    SharedCoordinateFactory, SimpleCoordinate, SimpleCoordinateFactory, VecCoordinateList,
    VecCoordinateListFactory,
};

/// Generic routine that only knows the capability traits
fn densify<F: CoordinateFactory>(
    factory: &F,
    list: &dyn CoordinateList<F::Output>,
) -> VecCoordinateList<F::Output> {
    let mut result = VecCoordinateList::new();
    for (index, current) in list.iter().enumerate() {
        if index > 0 {
            let previous = list.get(index - 1).unwrap();
            let middle = factory.create(
                (previous.latitude() + current.latitude()) / 2.0,
                (previous.longitude() + current.longitude()) / 2.0,
            );
            result.push(middle).unwrap();
        }
        result.push(factory.clone_coordinate(current)).unwrap();
    }
    result
}

#[test]
fn test_generic_workflow_over_representations() {
    let list_factory = VecCoordinateListFactory::<Rc<SimpleCoordinate>>::new();
    let mut route = list_factory.create();
    for (lat, lon) in [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)] {
        route.push(SharedCoordinateFactory.create(lat, lon)).unwrap();
    }

    let dense = densify(&SharedCoordinateFactory, &route);
    std::assert_eq!(dense.len(), 5);
    std::assert!(dense.get(1).unwrap().same_location(&SimpleCoordinate::new(0.0, 1.0)));

    // Midpoints along a meridian and the equator do not change the length
    let original = path_length_meters(&route);
    let densified = path_length_meters(&dense);
    std::assert!((original - densified).abs() < 1e-6);

    let simple_copy = VecCoordinateListFactory::<SimpleCoordinate>::new()
        .deep_copy(&dense, &SimpleCoordinateFactory)
        .unwrap();
    std::assert_eq!(simple_copy.len(), dense.len());
    std::assert_eq!(
        CoordinatePair::new(*simple_copy.get(0).unwrap(), *simple_copy.get(4).unwrap()),
        CoordinatePair::new(dense.get(0).unwrap().clone(), dense.get(4).unwrap().clone())
    );
}

#[test]
fn test_distance_through_cli_and_library_agree() {
    let settings = Settings::defaults();
    let matches = build_cli()
        .try_get_matches_from(["coordkit", "distance", "berlin", "london"])
        .unwrap();
    let command = CoordkitCommandFactory::new()
        .create_command(&matches, &settings)
        .unwrap();

    let berlin = settings.place("berlin").unwrap();
    let london = settings.place("london").unwrap();
    let expected = format!("{} m", settings.format_value(distance_meters(berlin, london)));
    std::assert_eq!(command.render().unwrap(), expected);
}

#[test]
fn test_logger_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coordkit.log");
    let logger = Logger::new(&path).unwrap();

    logger.log("first line").unwrap();
    logger.log("second line").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    std::assert_eq!(content, "first line\nsecond line\n");
}
