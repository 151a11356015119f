//! Breadth-first search for the region connected to a start cell
//!
//! The search validates its inputs before any traversal work, then expands
//! cells in FIFO order. Each unvisited in-bounds neighbour of the expanded
//! cell is tested against the admission policy and, when admitted, marked
//! visited and queued. Every cell is queued at most once, so the search
//! always terminates after at most `cell_count` expansions.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::algorithm::mask::CellMask;
use crate::algorithm::tolerance::{AdmissionPolicy, ToleranceBand};
use crate::io::error::{Result, SearchError, invalid_argument};
use crate::spatial::Grid;
use crate::spatial::coordinate::{Coordinate, MAX_NEIGHBOURS};

/// Unvalidated search inputs as supplied by a caller
///
/// Start indices are signed so that negative input reaches bounds validation
/// and is reported as out of bounds rather than as a parse failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest<T = f64> {
    /// Requested start column
    pub x: i64,
    /// Requested start row
    pub y: i64,
    /// Tolerance limits
    pub band: ToleranceBand<T>,
}

impl<T: Float> SearchRequest<T> {
    /// Create a request from already-typed values
    pub const fn new(x: i64, y: i64, band: ToleranceBand<T>) -> Self {
        Self { x, y, band }
    }

    /// Parse a request from text arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either index is not an integer or either
    /// limit is not a number
    pub fn parse(x: &str, y: &str, lower_limit: &str, upper_limit: &str) -> Result<Self>
    where
        T: FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        let x = parse_index("x", x)?;
        let y = parse_index("y", y)?;
        let band = ToleranceBand::parse(lower_limit, upper_limit)?;
        Ok(Self::new(x, y, band))
    }
}

fn parse_index(parameter: &'static str, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| invalid_argument(parameter, &text, &format!("must be an integer ({e})")))
}

/// Cells connected to a start cell, frozen at the end of a search
///
/// Equality compares membership only: two regions are equal when they hold
/// the same set of cells, regardless of visiting order.
#[derive(Debug, Clone)]
pub struct ConnectedRegion {
    members: CellMask,
    order: Vec<Coordinate>,
    start: Coordinate,
    expansions: usize,
    complete: bool,
}

impl ConnectedRegion {
    /// The cell the search started from
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Test whether a cell belongs to the region
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.members.contains(coordinate)
    }

    /// Number of cells in the region
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: a region holds at least its start cell
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate cells in the order they were reached
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.order.iter().copied()
    }

    /// Cells in the order they were reached, start first
    pub fn visiting_order(&self) -> &[Coordinate] {
        &self.order
    }

    /// Cells sorted row by row, left to right
    pub fn sorted(&self) -> Vec<Coordinate> {
        self.members.iter().collect()
    }

    /// Cells as a hash set
    pub fn coordinates(&self) -> HashSet<Coordinate> {
        self.order.iter().copied().collect()
    }

    /// Membership mask of the region
    pub const fn mask(&self) -> &CellMask {
        &self.members
    }

    /// Number of cells whose neighbours were examined
    pub const fn expansions(&self) -> usize {
        self.expansions
    }

    /// Whether traversal ran until no queued cells remained
    ///
    /// Only `false` when an expansion budget stopped the search early.
    pub const fn is_complete(&self) -> bool {
        self.complete
    }
}

impl PartialEq for ConnectedRegion {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for ConnectedRegion {}

impl<'a> IntoIterator for &'a ConnectedRegion {
    type Item = Coordinate;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Coordinate>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// Connectivity search over a borrowed, read-only grid
///
/// The search holds no traversal state between runs, so one instance (or one
/// grid shared between several instances) can serve concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivitySearch<'g, T = f64> {
    grid: &'g Grid<T>,
    policy: AdmissionPolicy,
    max_expansions: Option<usize>,
}

impl<'g, T: Float> ConnectivitySearch<'g, T> {
    /// Create a search using the relative policy and no expansion budget
    pub const fn new(grid: &'g Grid<T>) -> Self {
        Self {
            grid,
            policy: AdmissionPolicy::Relative,
            max_expansions: None,
        }
    }

    /// Select the admission policy
    #[must_use]
    pub const fn with_policy(mut self, policy: AdmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cap the number of cells expanded; `None` removes the cap
    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Admission policy in use
    pub const fn policy(&self) -> AdmissionPolicy {
        self.policy
    }

    /// Grid being searched
    pub const fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    /// Check a requested start position against the grid's index range
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is negative or exceeds the
    /// corresponding maximum index
    pub fn validate_start(&self, x: i64, y: i64) -> Result<Coordinate> {
        let (width, height) = self.grid.dimensions();
        let column = usize::try_from(x).ok().filter(|&column| column <= width);
        let row = usize::try_from(y).ok().filter(|&row| row <= height);

        match (column, row) {
            (Some(column), Some(row)) => Ok(Coordinate::new(column, row)),
            _ => Err(SearchError::OutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }

    /// Validate a request and search from its start cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the start cell is outside the grid
    pub fn run(&self, request: &SearchRequest<T>) -> Result<ConnectedRegion> {
        let start = self.validate_start(request.x, request.y)?;
        Ok(self.traverse(start, &request.band))
    }

    /// Search from a typed start coordinate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the start cell is outside the grid
    pub fn run_from(&self, start: Coordinate, band: &ToleranceBand<T>) -> Result<ConnectedRegion> {
        if !self.grid.contains(start) {
            let (width, height) = self.grid.dimensions();
            return Err(SearchError::OutOfBounds {
                x: i64::try_from(start.x).unwrap_or(i64::MAX),
                y: i64::try_from(start.y).unwrap_or(i64::MAX),
                width,
                height,
            });
        }
        Ok(self.traverse(start, band))
    }

    fn traverse(&self, start: Coordinate, band: &ToleranceBand<T>) -> ConnectedRegion {
        let (width, height) = self.grid.dimensions();
        let mut members = CellMask::for_dimensions(width, height);
        let mut order = vec![start];
        let mut queue = VecDeque::from([start]);
        let mut neighbours = Vec::with_capacity(MAX_NEIGHBOURS);
        let mut expansions = 0;
        let mut complete = true;

        members.insert(start);

        let Some(start_value) = self.grid.value_at(start) else {
            return ConnectedRegion {
                members,
                order,
                start,
                expansions,
                complete,
            };
        };

        log::debug!(
            "searching from {start} on a {}x{} grid with the {} policy",
            width + 1,
            height + 1,
            self.policy
        );

        while let Some(current) = queue.pop_front() {
            if self.max_expansions.is_some_and(|limit| expansions >= limit) {
                log::warn!(
                    "expansion budget exhausted after {expansions} cells with {} still queued",
                    queue.len() + 1
                );
                complete = false;
                break;
            }
            expansions += 1;

            let Some(current_value) = self.grid.value_at(current) else {
                continue;
            };

            neighbours.clear();
            current.push_neighbours(width, height, &mut neighbours);

            for &candidate in &neighbours {
                if members.contains(candidate) {
                    continue;
                }
                let Some(value) = self.grid.value_at(candidate) else {
                    continue;
                };
                if self.policy.admits(band, current_value, start_value, value) {
                    members.insert(candidate);
                    order.push(candidate);
                    queue.push_back(candidate);
                }
            }
        }

        log::debug!(
            "connected region of {} cells after {expansions} expansions",
            order.len()
        );

        ConnectedRegion {
            members,
            order,
            start,
            expansions,
            complete,
        }
    }
}

/// Find every cell connected to `start` under the given band and policy
///
/// # Errors
///
/// Returns `OutOfBounds` if `start` is outside the grid
pub fn find_connected_cells<T: Float>(
    grid: &Grid<T>,
    start: Coordinate,
    band: ToleranceBand<T>,
    policy: AdmissionPolicy,
) -> Result<ConnectedRegion> {
    ConnectivitySearch::new(grid)
        .with_policy(policy)
        .run_from(start, &band)
}
