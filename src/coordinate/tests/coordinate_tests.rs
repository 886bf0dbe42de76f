//! Tests for the coordinate contracts and factories

extern crate std;

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use proptest::prelude::*;

use crate::coordinate::{
    compare, hash, same_location, Coordinate, CoordinateFactory, GetCoordinate,
    SharedCoordinateFactory, SimpleCoordinate, SimpleCoordinateFactory,
};
use crate::errors::CoordError;

/// Coordinate stored in radians, to check contracts across representations
struct RadianCoordinate {
    lat_rad: f64,
    lon_rad: f64,
}

impl Coordinate for RadianCoordinate {
    fn latitude(&self) -> f64 {
        self.lat_rad.to_degrees()
    }

    fn longitude(&self) -> f64 {
        self.lon_rad.to_degrees()
    }
}

/// Waypoint that may not have a position yet
struct Waypoint {
    position: Option<SimpleCoordinate>,
}

impl GetCoordinate for Waypoint {
    fn coordinate(&self) -> Option<&dyn Coordinate> {
        self.position.as_ref().map(|c| c as &dyn Coordinate)
    }
}

fn hash_of<C: Coordinate + ?Sized>(coordinate: &C) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash(coordinate, &mut hasher);
    hasher.finish()
}

#[test]
fn test_compare_latitude_then_longitude() {
    let a = SimpleCoordinate::new(10.0, 50.0);
    let b = SimpleCoordinate::new(20.0, -50.0);
    let c = SimpleCoordinate::new(20.0, 0.0);

    std::assert_eq!(compare(&a, &b), Ordering::Less);
    std::assert_eq!(compare(&b, &a), Ordering::Greater);
    std::assert_eq!(compare(&b, &c), Ordering::Less);
    std::assert_eq!(b.compare_to(&b), Ordering::Equal);
}

#[test]
fn test_sorted_containers_use_exact_order() {
    let set: BTreeSet<SimpleCoordinate> = [
        SimpleCoordinate::new(1.0, 2.0),
        SimpleCoordinate::new(0.0, 5.0),
        SimpleCoordinate::new(1.0, 1.0),
        SimpleCoordinate::new(0.0, 5.0),
    ]
    .into_iter()
    .collect();

    let ordered: std::vec::Vec<_> = set.into_iter().collect();
    std::assert_eq!(
        ordered,
        std::vec![
            SimpleCoordinate::new(0.0, 5.0),
            SimpleCoordinate::new(1.0, 1.0),
            SimpleCoordinate::new(1.0, 2.0),
        ]
    );
}

#[test]
fn test_hash_set_does_not_merge_nearby_coordinates() {
    let a = SimpleCoordinate::new(52.0, 13.0);
    let b = SimpleCoordinate::new(52.0 + 1.0e-7, 13.0);
    std::assert!(a.same_location(&b));

    let set: HashSet<SimpleCoordinate> = [a, b, a].into_iter().collect();
    std::assert_eq!(set.len(), 2);
}

#[test]
fn test_hash_matches_across_representations() {
    let simple = SimpleCoordinate::new(0.5_f64.to_degrees(), 1.5_f64.to_degrees());
    let radian = RadianCoordinate { lat_rad: 0.5, lon_rad: 1.5 };

    std::assert_eq!(compare(&simple, &radian), Ordering::Equal);
    std::assert_eq!(hash_of(&simple), hash_of(&radian));

    let mut hasher = DefaultHasher::new();
    simple.hash(&mut hasher);
    std::assert_eq!(hasher.finish(), hash_of(&simple));
}

#[test]
fn test_signed_zero_and_nan_are_totally_ordered() {
    let negative_zero = SimpleCoordinate::new(-0.0, 0.0);
    let zero = SimpleCoordinate::new(0.0, 0.0);
    let nan = SimpleCoordinate::new(f64::NAN, 0.0);

    std::assert_eq!(compare(&negative_zero, &zero), Ordering::Less);
    std::assert_eq!(compare(&nan, &nan), Ordering::Equal);
    std::assert_eq!(nan, nan);
    std::assert!(negative_zero.same_location(&zero));
}

#[test]
fn test_same_location_boundary() {
    let origin = SimpleCoordinate::new(0.0, 0.0);

    std::assert!(same_location(&origin, &origin));
    std::assert!(origin.same_location(&SimpleCoordinate::new(1.0e-6, 0.0)));
    std::assert!(origin.same_location(&SimpleCoordinate::new(0.0, -1.0e-6)));
    std::assert!(!origin.same_location(&SimpleCoordinate::new(1.1e-6, 0.0)));
    std::assert!(!origin.same_location(&SimpleCoordinate::new(0.0, 1.1e-6)));
    std::assert!(!origin.same_location(&SimpleCoordinate::new(2.0e-6, 2.0e-6)));
}

#[test]
fn test_display_and_parse() {
    let coordinate = SimpleCoordinate::new(52.52, -13.5);
    std::assert_eq!(coordinate.to_display_string(), "52.52, -13.5");
    std::assert_eq!(coordinate.to_string(), "52.52, -13.5");

    let parsed: SimpleCoordinate = "52.52, -13.5".parse().unwrap();
    std::assert_eq!(parsed, coordinate);
    let parsed: SimpleCoordinate = " 1e-3 ,2 ".parse().unwrap();
    std::assert_eq!(parsed, SimpleCoordinate::new(0.001, 2.0));

    for bad in ["", "52.52", "52.52;13", "a,b", "1,2,3"] {
        std::assert!(
            std::matches!(bad.parse::<SimpleCoordinate>(), Err(CoordError::ParseError(_))),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn test_factories_create_and_clone() {
    let factory = SimpleCoordinateFactory;
    let created = factory.create(1.0, 2.0);
    std::assert_eq!(created, SimpleCoordinate::new(1.0, 2.0));

    let radian = RadianCoordinate { lat_rad: 0.25, lon_rad: -0.75 };
    let cloned = factory.clone_coordinate(&radian);
    std::assert_eq!(compare(&cloned, &radian), Ordering::Equal);

    let shared = SharedCoordinateFactory.create(3.0, 4.0);
    let shared_clone = SharedCoordinateFactory.clone_coordinate(&shared);
    std::assert!(!Rc::ptr_eq(&shared, &shared_clone));
    std::assert_eq!(*shared, *shared_clone);
}

#[test]
fn test_dyn_factory() {
    let factory: &dyn CoordinateFactory<Output = SimpleCoordinate> = &SimpleCoordinateFactory;
    std::assert_eq!(factory.create(5.0, 6.0), SimpleCoordinate::new(5.0, 6.0));
}

#[test]
fn test_get_coordinate() {
    let coordinate = SimpleCoordinate::new(7.0, 8.0);
    let exposed = coordinate.coordinate().unwrap();
    std::assert_eq!(exposed.latitude(), 7.0);

    let pending = Waypoint { position: None };
    std::assert!(pending.coordinate().is_none());

    let fixed = Waypoint { position: Some(coordinate) };
    std::assert!(fixed.coordinate().unwrap().same_location(&coordinate));
}

proptest! {
    #[test]
    fn prop_compare_is_reflexive_and_antisymmetric(
        a_lat in -90.0f64..90.0, a_lon in -180.0f64..180.0,
        b_lat in -90.0f64..90.0, b_lon in -180.0f64..180.0,
    ) {
        let a = SimpleCoordinate::new(a_lat, a_lon);
        let b = SimpleCoordinate::new(b_lat, b_lon);
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn prop_compare_is_transitive(
        lats in proptest::array::uniform3(-2.0f64..2.0),
        lons in proptest::array::uniform3(-2.0f64..2.0),
    ) {
        let mut coordinates: std::vec::Vec<SimpleCoordinate> =
            (0..3).map(|i| SimpleCoordinate::new(lats[i].round(), lons[i])).collect();
        coordinates.sort_by(|a, b| compare(a, b));
        prop_assert_ne!(compare(&coordinates[0], &coordinates[1]), Ordering::Greater);
        prop_assert_ne!(compare(&coordinates[1], &coordinates[2]), Ordering::Greater);
        prop_assert_ne!(compare(&coordinates[0], &coordinates[2]), Ordering::Greater);
    }

    #[test]
    fn prop_equal_coordinates_hash_equally(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let simple = SimpleCoordinate::new(lat, lon);
        let shared = SharedCoordinateFactory.create(lat, lon);
        prop_assert_eq!(hash_of(&simple), hash_of(&shared));
        prop_assert!(simple.same_location(&shared));
    }
}
