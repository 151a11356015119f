//! Input/output collaborators around the search
//!
//! This module contains:
//! - CSV loading into a grid
//! - Text and PNG presentation of search results
//! - Command-line parsing and orchestration
//! - Error types and configuration constants

/// Command-line arguments and search orchestration
pub mod cli;
/// Defaults, markers and rendering constants
pub mod configuration;
/// Error types and corrective hints
pub mod error;
/// PNG rendering of search results
pub mod image;
/// CSV loading into a grid
pub mod loader;
/// Text rendering of search results
pub mod presenter;
