//! Grid coordinates and 8-connected neighbourhood enumeration
//!
//! Coordinates are `(x, y)` pairs where `x` selects the column and `y` the row.
//! Edge handling uses the zero-based maximum indices reported by
//! [`Grid::dimensions`](crate::spatial::Grid::dimensions), so a cell is on the
//! right edge when `x == width` rather than `x == width - 1`.

use std::fmt;

/// Largest number of neighbours a cell can have
pub const MAX_NEIGHBOURS: usize = 8;

/// Column/row position of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check the coordinate against zero-based maximum indices
    pub const fn within(self, width: usize, height: usize) -> bool {
        self.x <= width && self.y <= height
    }

    /// Push every in-bounds 8-connected neighbour into `buffer`
    ///
    /// The buffer is not cleared. Candidates are emitted right column first
    /// (centre, above, below), then the left column, then straight down and
    /// straight up. Emission order only affects visiting order, never which
    /// cells a search reaches.
    pub fn push_neighbours(self, width: usize, height: usize, buffer: &mut Vec<Self>) {
        let Self { x, y } = self;

        if x < width {
            buffer.push(Self::new(x + 1, y));
            if y > 0 {
                buffer.push(Self::new(x + 1, y - 1));
            }
            if y < height {
                buffer.push(Self::new(x + 1, y + 1));
            }
        }
        if x > 0 {
            buffer.push(Self::new(x - 1, y));
            if y > 0 {
                buffer.push(Self::new(x - 1, y - 1));
            }
            if y < height {
                buffer.push(Self::new(x - 1, y + 1));
            }
        }
        if y < height {
            buffer.push(Self::new(x, y + 1));
        }
        if y > 0 {
            buffer.push(Self::new(x, y - 1));
        }
    }

    /// Collect the in-bounds 8-connected neighbours into a new vector
    pub fn neighbours(self, width: usize, height: usize) -> Vec<Self> {
        let mut buffer = Vec::with_capacity(MAX_NEIGHBOURS);
        self.push_neighbours(width, height, &mut buffer);
        buffer
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
