//! Text rendering of a grid with start and connected-cell markers
//!
//! Produces the three views of a search: the loaded grid, the grid with the
//! start cell suffixed by [`START_MARKER`], and the grid with every connected
//! cell wrapped in [`CONNECTED_MARKER`]. Columns are right-aligned under a
//! header of column indices, and each row is prefixed by its row index.

use std::fmt::{Display, Write};

use num_traits::Float;

use crate::algorithm::search::ConnectedRegion;
use crate::io::configuration::{COLUMN_GAP, CONNECTED_MARKER, START_MARKER};
use crate::spatial::Grid;
use crate::spatial::coordinate::Coordinate;

/// Which markers a rendered view carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkStage {
    /// Values only
    Plain,
    /// Start cell marked
    Start,
    /// Start cell and every connected cell marked
    Connected,
}

impl MarkStage {
    /// All stages in presentation order
    pub const ALL: [Self; 3] = [Self::Plain, Self::Start, Self::Connected];

    /// Caption printed under the view
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Plain => "Loaded data set",
            Self::Start => "Target cell marked with X",
            Self::Connected => "Connected cells circumfixed by *",
        }
    }
}

/// Renders a grid alongside the outcome of a search
pub struct GridPresenter<'a, T> {
    grid: &'a Grid<T>,
    region: &'a ConnectedRegion,
}

impl<'a, T: Float + Display> GridPresenter<'a, T> {
    /// Create a presenter for a grid and a region found on it
    pub const fn new(grid: &'a Grid<T>, region: &'a ConnectedRegion) -> Self {
        Self { grid, region }
    }

    /// Render one view as aligned text, one line per row plus a header
    pub fn render(&self, stage: MarkStage) -> String {
        let columns = self.grid.columns();
        let label_width = self.grid.rows().saturating_sub(1).to_string().len();

        let mut table: Vec<Vec<String>> = Vec::with_capacity(self.grid.rows() + 1);
        let mut header = vec![String::new()];
        header.extend((0..columns).map(|x| x.to_string()));
        table.push(header);

        for (y, row) in self.grid.values().rows().into_iter().enumerate() {
            let mut line = vec![format!("{y:>label_width$}")];
            line.extend(
                row.iter()
                    .enumerate()
                    .map(|(x, value)| self.cell_label(Coordinate::new(x, y), *value, stage)),
            );
            table.push(line);
        }

        let mut widths = vec![0usize; columns + 1];
        for line in &table {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let gap = " ".repeat(COLUMN_GAP);
        let mut output = String::new();
        for line in &table {
            let cells: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect();
            output.push_str(cells.join(&gap).trim_end());
            output.push('\n');
        }
        output
    }

    fn cell_label(&self, coordinate: Coordinate, value: T, stage: MarkStage) -> String {
        let mut label = value.to_string();
        if stage != MarkStage::Plain && coordinate == self.region.start() {
            label.push_str(START_MARKER);
        }
        if stage == MarkStage::Connected && self.region.contains(coordinate) {
            label = format!("{CONNECTED_MARKER}{label}{CONNECTED_MARKER}");
        }
        label
    }

    /// One-line description of the region
    pub fn summary(&self) -> String {
        let cells = self.region.len();
        let noun = if cells == 1 { "cell" } else { "cells" };
        let mut summary = format!(
            "{cells} connected {noun} from start {} on a {}x{} grid",
            self.region.start(),
            self.grid.columns(),
            self.grid.rows()
        );
        if !self.region.is_complete() {
            summary.push_str(" (search stopped early)");
        }
        summary
    }

    /// Region coordinates, row by row, one `x,y` pair per line
    pub fn coordinate_list(&self) -> String {
        self.region
            .sorted()
            .into_iter()
            .fold(String::new(), |mut output, coordinate| {
                let _ = writeln!(output, "{},{}", coordinate.x, coordinate.y);
                output
            })
    }
}
