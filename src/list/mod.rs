//! Coordinate lists
//!
//! This module defines the storage-independent list abstraction, its
//! `Vec`-backed implementations and the factories that create and copy lists.

mod coordinate_list;
mod vec_list;
mod factory;

pub use coordinate_list::CoordinateList;
pub use vec_list::{CoordinateListView, VecCoordinateList};
pub use factory::{CoordinateListFactory, VecCoordinateListFactory};
