//! CSV loading into a validated numeric grid
//!
//! Every record becomes one grid row and every field one cell. Input without
//! headers is expected; blank and whitespace-only lines are skipped and
//! whitespace around fields is ignored. Anything else that is not a finite
//! number rejects the whole file.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use num_traits::Float;

use crate::io::configuration::DEFAULT_DELIMITER;
use crate::io::error::{Result, SearchError, data_load_error};
use crate::spatial::Grid;

/// Name reported for sources that are not files
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Reader for delimiter-separated numeric tables
#[derive(Debug, Clone, Copy)]
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    /// Create a loader using the default comma delimiter
    pub const fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Use a different single-byte field delimiter
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Field delimiter in use
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Load a grid from a file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be opened and `DataLoad` if
    /// its contents are not a non-empty rectangular table of numbers
    pub fn load_path<T>(&self, path: &Path) -> Result<Grid<T>>
    where
        T: Float + FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        let file = File::open(path).map_err(|e| SearchError::FileSystem {
            path: path.to_path_buf(),
            operation: "open",
            source: e,
        })?;
        self.load_reader(file, path)
    }

    /// Load a grid from in-memory text
    ///
    /// # Errors
    ///
    /// Returns `DataLoad` if the text is not a non-empty rectangular table of
    /// numbers
    pub fn load_str<T>(&self, text: &str) -> Result<Grid<T>>
    where
        T: Float + FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        self.load_reader(text.as_bytes(), Path::new(IN_MEMORY_SOURCE))
    }

    /// Load a grid from any reader, naming `source` in errors
    ///
    /// # Errors
    ///
    /// Returns `DataLoad` if the input is empty, malformed, ragged, or holds
    /// an empty, non-numeric or non-finite field
    pub fn load_reader<T>(&self, reader: impl Read, source: &Path) -> Result<Grid<T>>
    where
        T: Float + FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        let mut csv = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows: Vec<Vec<T>> = Vec::new();
        let mut expected_columns = None;

        for result in csv.records() {
            let record = result.map_err(|e| {
                let line = e.position().map(|position| position.line() as usize);
                data_load_error(source, line, &e)
            })?;
            // Whitespace-only lines trim down to a single empty field
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map(|position| position.line() as usize);

            let expected = *expected_columns.get_or_insert(record.len());
            if record.len() != expected {
                return Err(data_load_error(
                    source,
                    line,
                    &format!("row has {} fields, expected {expected}", record.len()),
                ));
            }

            let row = record
                .iter()
                .enumerate()
                .map(|(column, field)| parse_cell(field, column, source, line))
                .collect::<Result<Vec<T>>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(data_load_error(source, None, &"no data rows found"));
        }

        let grid = Grid::from_rows(rows)?;
        log::info!(
            "loaded {}x{} grid from '{}'",
            grid.columns(),
            grid.rows(),
            source.display()
        );
        Ok(grid)
    }
}

fn parse_cell<T>(field: &str, column: usize, source: &Path, line: Option<usize>) -> Result<T>
where
    T: Float + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    if field.is_empty() {
        return Err(data_load_error(
            source,
            line,
            &format!("empty field in column {column}"),
        ));
    }

    let value = field.parse::<T>().map_err(|e| {
        data_load_error(
            source,
            line,
            &format!("field '{field}' in column {column} is not a number ({e})"),
        )
    })?;

    if !value.is_finite() {
        return Err(data_load_error(
            source,
            line,
            &format!("field '{field}' in column {column} is not a finite number"),
        ));
    }

    Ok(value)
}

/// Load a comma-separated grid of `f64` values from a file
///
/// # Errors
///
/// See [`CsvLoader::load_path`]
pub fn load_csv(path: impl Into<PathBuf>) -> Result<Grid<f64>> {
    CsvLoader::new().load_path(&path.into())
}
