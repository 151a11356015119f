//! Tolerance-bounded connected region search over numeric grids
//!
//! Starting from one cell, a breadth-first search collects every cell reachable
//! through 8-connected neighbours whose values pass an admission test. The test
//! compares a neighbour's value with a tolerance band that is either anchored to
//! the cell being expanded, anchored to the start cell, or fixed.

#![forbid(unsafe_code)]

/// Connectivity search, tolerance bands and the visited-cell mask
pub mod algorithm;
/// Loading, presentation, command-line handling and error types
pub mod io;
/// Grid storage and coordinate neighbourhoods
pub mod spatial;

pub use algorithm::search::{ConnectedRegion, ConnectivitySearch, find_connected_cells};
pub use algorithm::tolerance::{AdmissionPolicy, ToleranceBand};
pub use io::error::{Result, SearchError};
pub use spatial::{Coordinate, Grid};
