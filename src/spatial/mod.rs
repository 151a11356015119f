//! Spatial data structures for the searched grid
//!
//! This module contains:
//! - Coordinates and 8-connected neighbour enumeration
//! - The read-only numeric grid

/// Coordinates and neighbourhood enumeration
pub mod coordinate;
/// Read-only numeric grid with bounds-aware lookup
pub mod grid;

pub use coordinate::Coordinate;
pub use grid::Grid;
