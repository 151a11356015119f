//! Read-only numeric grid with bounds-aware lookup
//!
//! Wraps an `ndarray` matrix stored row-major as `[row, column]` and exposes it
//! through `(x, y)` coordinates. Dimensions are reported as zero-based maximum
//! indices: a grid with 3 columns and 2 rows has `width == 2` and
//! `height == 1`.

use ndarray::{Array2, ArrayView2};
use num_traits::Float;

use crate::io::error::{Result, SearchError};
use crate::spatial::coordinate::Coordinate;

/// Rectangular grid of finite floating-point values
///
/// Construction validates that the grid has at least one row and one column
/// and that every value is finite. The grid is never mutated afterwards, so a
/// shared reference can serve any number of concurrent searches.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T = f64> {
    values: Array2<T>,
}

impl<T: Float> Grid<T> {
    /// Wrap a matrix indexed as `[row, column]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the matrix has no rows or no columns, or
    /// contains a NaN or infinite value
    pub fn from_array(values: Array2<T>) -> Result<Self> {
        let (rows, columns) = values.dim();
        if rows == 0 || columns == 0 {
            return Err(SearchError::InvalidGrid {
                reason: format!("grid must have at least one row and column, got {rows}x{columns}"),
            });
        }

        if let Some(((row, column), _)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SearchError::InvalidGrid {
                reason: format!("value at x={column}, y={row} is not finite"),
            });
        }

        Ok(Self { values })
    }

    /// Build a grid from a list of equal-length rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the rows are empty, differ in length, or
    /// contain a non-finite value
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_count)
        {
            return Err(SearchError::InvalidGrid {
                reason: format!(
                    "row {index} has {} columns, expected {column_count}",
                    row.len()
                ),
            });
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((row_count, column_count), flat).map_err(|e| {
            SearchError::InvalidGrid {
                reason: e.to_string(),
            }
        })?;

        Self::from_array(values)
    }

    /// Value stored at a coordinate
    ///
    /// Callers are expected to stay within `0..=width` and `0..=height`;
    /// lookups outside that range return `None`.
    pub fn value_at(&self, coordinate: Coordinate) -> Option<T> {
        self.values.get([coordinate.y, coordinate.x]).copied()
    }

    /// Zero-based maximum indices as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Maximum valid column index
    pub fn width(&self) -> usize {
        self.columns() - 1
    }

    /// Maximum valid row index
    pub fn height(&self) -> usize {
        self.rows() - 1
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.values.ncols()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// Check whether a coordinate addresses a cell of this grid
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.within(self.width(), self.height())
    }

    /// In-bounds 8-connected neighbours of a cell
    pub fn neighbours(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        coordinate.neighbours(self.width(), self.height())
    }

    /// Read-only view of the underlying `[row, column]` matrix
    pub fn values(&self) -> ArrayView2<'_, T> {
        self.values.view()
    }

    /// Smallest and largest value in the grid
    pub fn value_range(&self) -> (T, T) {
        self.values.iter().fold(
            (T::infinity(), T::neg_infinity()),
            |(min, max), &value| (min.min(value), max.max(value)),
        )
    }
}
