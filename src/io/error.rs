//! Error types and corrective hints for search, loading and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all search operations
#[derive(Debug)]
pub enum SearchError {
    /// A supplied value could not be coerced into the required numeric type
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Start coordinate lies outside the grid's valid index range
    OutOfBounds {
        /// Requested column
        x: i64,
        /// Requested row
        y: i64,
        /// Maximum valid column index
        width: usize,
        /// Maximum valid row index
        height: usize,
    },

    /// Grid data doesn't meet the rectangular, finite, non-empty requirements
    InvalidGrid {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Tabular source could not be turned into a grid
    DataLoad {
        /// Path of the source file
        path: PathBuf,
        /// One-based line number where the problem was found, if known
        line: Option<usize>,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered grid image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl SearchError {
    /// Short corrective hint shown by the command surface alongside the error
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { .. } => Some(
                "start coordinates must be whole numbers and tolerance limits must be numbers",
            ),
            Self::OutOfBounds { .. } => {
                Some("pick a start column in 0..=width and a start row in 0..=height")
            }
            Self::DataLoad { .. } | Self::InvalidGrid { .. } => Some(
                "the input must be a non-empty CSV file of numbers with equal-length rows",
            ),
            Self::FileSystem { .. } => Some("check that the path exists and is readable"),
            Self::ImageExport { .. } => None,
        }
    }

    /// Whether the error comes from validating caller-supplied search inputs
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::OutOfBounds { .. }
        )
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Start coordinate ({x}, {y}) is out of bounds (valid x: 0..={width}, valid y: 0..={height})"
                )
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::DataLoad { path, line, reason } => match line {
                Some(line) => write!(
                    f,
                    "Failed to load '{}' at line {line}: {reason}",
                    path.display()
                ),
                None => write!(f, "Failed to load '{}': {reason}", path.display()),
            },
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, SearchError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a data load error for the given source
pub fn data_load_error(
    path: impl Into<PathBuf>,
    line: Option<usize>,
    reason: &impl ToString,
) -> SearchError {
    SearchError::DataLoad {
        path: path.into(),
        line,
        reason: reason.to_string(),
    }
}
