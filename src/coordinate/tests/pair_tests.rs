//! Tests for coordinate pairs

extern crate std;

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::coordinate::{CoordinatePair, SimpleCoordinate};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_key_uses_raw_values() {
    let pair = CoordinatePair::new(SimpleCoordinate::new(52.5, 13.25), SimpleCoordinate::new(-1.0, 0.125));
    std::assert_eq!(pair.key(), "52.5,13.25|-1,0.125");
    std::assert_eq!(pair.to_string(), pair.key());
    std::assert_eq!(pair.start(), &SimpleCoordinate::new(52.5, 13.25));
    std::assert_eq!(pair.end(), &SimpleCoordinate::new(-1.0, 0.125));
}

#[test]
fn test_equality_across_representations() {
    let simple = CoordinatePair::new(SimpleCoordinate::new(1.0, 2.0), SimpleCoordinate::new(3.0, 4.0));
    let shared = CoordinatePair::new(
        Rc::new(SimpleCoordinate::new(1.0, 2.0)),
        Rc::new(SimpleCoordinate::new(3.0, 4.0)),
    );

    std::assert!(simple == shared);
    std::assert_eq!(hash_of(&simple), hash_of(&shared));
}

#[test]
fn test_direction_and_nearby_values_matter() {
    let a = SimpleCoordinate::new(1.0, 2.0);
    let b = SimpleCoordinate::new(3.0, 4.0);
    let near_b = SimpleCoordinate::new(3.0 + 1.0e-9, 4.0);

    std::assert_ne!(CoordinatePair::new(a, b), CoordinatePair::new(b, a));
    std::assert_ne!(CoordinatePair::new(a, b), CoordinatePair::new(a, near_b));
}

#[test]
fn test_pair_as_cache_key() {
    let mut cache: HashMap<CoordinatePair<SimpleCoordinate>, f64> = HashMap::new();
    let pair = CoordinatePair::new(SimpleCoordinate::new(0.0, 0.0), SimpleCoordinate::new(0.0, 1.0));
    let meters = pair.distance_meters();
    cache.insert(pair, meters);

    let lookup = CoordinatePair::new(SimpleCoordinate::new(0.0, 0.0), SimpleCoordinate::new(0.0, 1.0));
    std::assert_eq!(cache.get(&lookup), Some(&meters));

    let (start, end) = lookup.into_parts();
    std::assert_eq!(start, SimpleCoordinate::new(0.0, 0.0));
    std::assert_eq!(end, SimpleCoordinate::new(0.0, 1.0));
}
