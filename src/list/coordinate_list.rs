//! Coordinate list trait definition

use log::debug;

use crate::coordinate::{Coordinate, CoordinateFactory};
use crate::errors::{CoordError, CoordResult};

/// Ordered, index-addressable sequence of coordinates
///
/// Implementations only provide storage access; everything else is layered on
/// top, so a list may be backed by a `Vec`, a view over caller-owned memory or
/// anything else without consumers noticing.
///
/// Indices are zero-based. `get`, `set` and `remove` accept `0..len()`,
/// `insert` accepts `0..=len()`; anything else fails with
/// [`CoordError::OutOfRange`] and leaves the list untouched.
pub trait CoordinateList<C: Coordinate> {
    /// Number of coordinates in the list
    fn len(&self) -> usize;

    /// Get the coordinate at `index`
    fn get(&self, index: usize) -> CoordResult<&C>;

    /// Replace the coordinate at `index`, returning the previous one
    fn set(&mut self, index: usize, coordinate: C) -> CoordResult<C>;

    /// Insert `coordinate` before `index`, shifting later elements up
    fn insert(&mut self, index: usize, coordinate: C) -> CoordResult<()>;

    /// Remove and return the coordinate at `index`, shifting later elements down
    fn remove(&mut self, index: usize) -> CoordResult<C>;

    /// Remove every coordinate
    fn clear(&mut self);

    /// Check whether the list holds no coordinates
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `coordinate` at the end of the list
    fn push(&mut self, coordinate: C) -> CoordResult<()> {
        let len = self.len();
        self.insert(len, coordinate)
    }

    /// Append every element of `other` without cloning the coordinates
    ///
    /// For handle types such as `Rc` the appended elements are shared with
    /// `other`. Use [`CoordinateList::add_all_cloned`] for independent copies.
    fn add_all(&mut self, other: &dyn CoordinateList<C>) -> CoordResult<()>
    where
        C: Clone,
    {
        debug!("Appending {} coordinates (shallow)", other.len());
        for index in 0..other.len() {
            self.push(other.get(index)?.clone())?;
        }
        Ok(())
    }

    /// Append a clone of every element of `other`, created through `factory`
    fn add_all_cloned<D: Coordinate>(
        &mut self,
        other: &dyn CoordinateList<D>,
        factory: &dyn CoordinateFactory<Output = C>,
    ) -> CoordResult<()>
    where
        Self: Sized,
    {
        debug!("Appending {} coordinates (cloned)", other.len());
        for index in 0..other.len() {
            self.push(factory.clone_coordinate(other.get(index)?))?;
        }
        Ok(())
    }

    /// Iterate over the coordinates in order
    fn iter(&self) -> Box<dyn Iterator<Item = &C> + '_> {
        Box::new((0..self.len()).filter_map(move |index| self.get(index).ok()))
    }

    /// Snapshot of the coordinates in order
    fn to_vec(&self) -> Vec<C>
    where
        C: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drop every element that shares its location with its predecessor
    ///
    /// # Returns
    /// The number of removed coordinates
    fn remove_consecutive_duplicates(&mut self) -> CoordResult<usize> {
        let mut removed = 0;
        let mut index = 1;
        while index < self.len() {
            if self.get(index - 1)?.same_location(self.get(index)?) {
                self.remove(index)?;
                removed += 1;
            } else {
                index += 1;
            }
        }
        if removed > 0 {
            debug!("Removed {} consecutive duplicate coordinates", removed);
        }
        Ok(removed)
    }
}

/// Build the out-of-range error for an access at `index` on a list of `len` elements
pub(crate) fn out_of_range(index: usize, len: usize) -> CoordError {
    debug!("Rejected list access at index {} (length {})", index, len);
    CoordError::OutOfRange { index, len }
}
