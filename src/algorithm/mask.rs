use bitvec::prelude::*;
use std::fmt;

use crate::spatial::coordinate::Coordinate;

/// Dense membership set over the cells of a fixed-size grid
///
/// Stores one bit per cell in row-major order, giving O(1) insertion and
/// membership tests keyed on the coordinate pair. Coordinates outside the
/// mask's extent are never members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    columns: usize,
    rows: usize,
}

impl CellMask {
    /// Create a mask with no cells present
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            bits: bitvec![0; columns * rows],
            columns,
            rows,
        }
    }

    /// Create a mask sized to the zero-based maximum indices of a grid
    pub fn for_dimensions(width: usize, height: usize) -> Self {
        Self::new(width + 1, height + 1)
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        (coordinate.x < self.columns && coordinate.y < self.rows)
            .then(|| coordinate.y * self.columns + coordinate.x)
    }

    /// Insert a coordinate
    ///
    /// Returns `true` if the coordinate was not already present. Coordinates
    /// outside the mask are ignored and reported as not inserted.
    pub fn insert(&mut self, coordinate: Coordinate) -> bool {
        let Some(index) = self.index(coordinate) else {
            return false;
        };
        let was_present = self.bits.get(index).as_deref() == Some(&true);
        self.bits.set(index, true);
        !was_present
    }

    /// Test coordinate membership
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let columns = self.columns;
        self.bits
            .iter_ones()
            .map(move |index| Coordinate::new(index % columns, index / columns))
    }

    /// Check whether every member of `self` is also a member of `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|coordinate| other.contains(coordinate))
    }

    /// Build a mask from a set of coordinates
    pub fn from_coordinates(
        coordinates: impl IntoIterator<Item = Coordinate>,
        columns: usize,
        rows: usize,
    ) -> Self {
        let mut mask = Self::new(columns, rows);
        for coordinate in coordinates {
            mask.insert(coordinate);
        }
        mask
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellMask({}x{}, {} cells)",
            self.columns,
            self.rows,
            self.count()
        )
    }
}
