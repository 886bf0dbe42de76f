//! Factories for creating coordinate lists

use std::fmt;
use std::marker::PhantomData;

use log::debug;

use super::coordinate_list::CoordinateList;
use super::vec_list::VecCoordinateList;
use crate::coordinate::{Coordinate, CoordinateFactory};
use crate::errors::CoordResult;

/// Builds empty lists and copies of existing lists
pub trait CoordinateListFactory<C: Coordinate> {
    /// The list type produced by this factory
    type List: CoordinateList<C>;

    /// Create an empty list
    fn create(&self) -> Self::List;

    /// Create an empty list sized for `capacity` coordinates
    ///
    /// The hint may be ignored by lists that do not benefit from pre-sizing.
    fn create_with_capacity(&self, capacity: usize) -> Self::List;

    /// Copy `source` into a new list, cloning every coordinate via `coordinate_factory`
    ///
    /// The copy has the same length and order and shares no element with `source`.
    fn deep_copy<D: Coordinate>(
        &self,
        source: &dyn CoordinateList<D>,
        coordinate_factory: &dyn CoordinateFactory<Output = C>,
    ) -> CoordResult<Self::List> {
        debug!("Deep copying list of {} coordinates", source.len());
        let mut list = self.create_with_capacity(source.len());
        list.add_all_cloned(source, coordinate_factory)?;
        Ok(list)
    }

    /// Copy `source` into a new list that shares its elements
    fn shallow_copy(&self, source: &dyn CoordinateList<C>) -> CoordResult<Self::List>
    where
        C: Clone,
    {
        debug!("Shallow copying list of {} coordinates", source.len());
        let mut list = self.create_with_capacity(source.len());
        list.add_all(source)?;
        Ok(list)
    }
}

/// Factory for [`VecCoordinateList`]
pub struct VecCoordinateListFactory<C> {
    marker: PhantomData<fn() -> C>,
}

impl<C> VecCoordinateListFactory<C> {
    /// Create a new factory instance
    pub const fn new() -> Self {
        VecCoordinateListFactory { marker: PhantomData }
    }
}

impl<C> Default for VecCoordinateListFactory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for VecCoordinateListFactory<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for VecCoordinateListFactory<C> {}

impl<C> fmt::Debug for VecCoordinateListFactory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VecCoordinateListFactory")
    }
}

impl<C: Coordinate> CoordinateListFactory<C> for VecCoordinateListFactory<C> {
    type List = VecCoordinateList<C>;

    fn create(&self) -> VecCoordinateList<C> {
        VecCoordinateList::new()
    }

    fn create_with_capacity(&self, capacity: usize) -> VecCoordinateList<C> {
        VecCoordinateList::with_capacity(capacity)
    }
}
