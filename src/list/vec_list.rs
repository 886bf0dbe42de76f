//! Coordinate lists backed by a `Vec`

use std::mem;

use super::coordinate_list::{out_of_range, CoordinateList};
use crate::coordinate::Coordinate;
use crate::errors::CoordResult;

/// Growable array implementation of [`CoordinateList`]
#[derive(Debug, Clone, PartialEq)]
pub struct VecCoordinateList<C> {
    coordinates: Vec<C>,
}

impl<C> VecCoordinateList<C> {
    /// Create an empty list
    pub fn new() -> Self {
        VecCoordinateList { coordinates: Vec::new() }
    }

    /// Create an empty list with room for `capacity` coordinates
    pub fn with_capacity(capacity: usize) -> Self {
        VecCoordinateList { coordinates: Vec::with_capacity(capacity) }
    }

    /// Borrow the coordinates as a slice
    pub fn as_slice(&self) -> &[C] {
        &self.coordinates
    }

    /// Unwrap the underlying vector
    pub fn into_inner(self) -> Vec<C> {
        self.coordinates
    }
}

impl<C> Default for VecCoordinateList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> From<Vec<C>> for VecCoordinateList<C> {
    fn from(coordinates: Vec<C>) -> Self {
        VecCoordinateList { coordinates }
    }
}

impl<C> FromIterator<C> for VecCoordinateList<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        VecCoordinateList { coordinates: iter.into_iter().collect() }
    }
}

impl<C: Coordinate> CoordinateList<C> for VecCoordinateList<C> {
    fn len(&self) -> usize {
        self.coordinates.len()
    }

    fn get(&self, index: usize) -> CoordResult<&C> {
        checked_get(&self.coordinates, index)
    }

    fn set(&mut self, index: usize, coordinate: C) -> CoordResult<C> {
        checked_set(&mut self.coordinates, index, coordinate)
    }

    fn insert(&mut self, index: usize, coordinate: C) -> CoordResult<()> {
        checked_insert(&mut self.coordinates, index, coordinate)
    }

    fn remove(&mut self, index: usize) -> CoordResult<C> {
        checked_remove(&mut self.coordinates, index)
    }

    fn clear(&mut self) {
        self.coordinates.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &C> + '_> {
        Box::new(self.coordinates.iter())
    }
}

/// [`CoordinateList`] over a vector owned by the caller
///
/// Every mutation goes straight to the wrapped vector, which keeps the result
/// once the view is dropped.
#[derive(Debug)]
pub struct CoordinateListView<'a, C> {
    coordinates: &'a mut Vec<C>,
}

impl<'a, C> CoordinateListView<'a, C> {
    /// Wrap `coordinates` without copying
    pub fn new(coordinates: &'a mut Vec<C>) -> Self {
        CoordinateListView { coordinates }
    }
}

impl<C: Coordinate> CoordinateList<C> for CoordinateListView<'_, C> {
    fn len(&self) -> usize {
        self.coordinates.len()
    }

    fn get(&self, index: usize) -> CoordResult<&C> {
        checked_get(self.coordinates.as_slice(), index)
    }

    fn set(&mut self, index: usize, coordinate: C) -> CoordResult<C> {
        checked_set(self.coordinates, index, coordinate)
    }

    fn insert(&mut self, index: usize, coordinate: C) -> CoordResult<()> {
        checked_insert(self.coordinates, index, coordinate)
    }

    fn remove(&mut self, index: usize) -> CoordResult<C> {
        checked_remove(self.coordinates, index)
    }

    fn clear(&mut self) {
        self.coordinates.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &C> + '_> {
        Box::new(self.coordinates.iter())
    }
}

fn checked_get<C>(coordinates: &[C], index: usize) -> CoordResult<&C> {
    coordinates
        .get(index)
        .ok_or_else(|| out_of_range(index, coordinates.len()))
}

fn checked_set<C>(coordinates: &mut [C], index: usize, coordinate: C) -> CoordResult<C> {
    let len = coordinates.len();
    let slot = coordinates
        .get_mut(index)
        .ok_or_else(|| out_of_range(index, len))?;
    Ok(mem::replace(slot, coordinate))
}

fn checked_insert<C>(coordinates: &mut Vec<C>, index: usize, coordinate: C) -> CoordResult<()> {
    if index > coordinates.len() {
        return Err(out_of_range(index, coordinates.len()));
    }
    coordinates.insert(index, coordinate);
    Ok(())
}

fn checked_remove<C>(coordinates: &mut Vec<C>, index: usize) -> CoordResult<C> {
    if index >= coordinates.len() {
        return Err(out_of_range(index, coordinates.len()));
    }
    Ok(coordinates.remove(index))
}
