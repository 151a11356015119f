//! Search defaults, presentation markers and rendering constants

// Loader settings
/// Field delimiter used when none is given on the command line
pub const DEFAULT_DELIMITER: u8 = b',';

// Text presentation markers
/// Suffix appended to the start cell's value
pub const START_MARKER: &str = "X";
/// Circumfix placed on both sides of every connected cell's value
pub const CONNECTED_MARKER: &str = "*";
/// Spaces between rendered columns
pub const COLUMN_GAP: usize = 2;

// PNG rendering
/// Default edge length of one grid cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Largest accepted cell edge length in pixels
pub const MAX_CELL_SIZE: u32 = 256;
/// Color blended into connected cells
pub const CONNECTED_TINT: [u8; 4] = [40, 120, 255, 255];
/// Fraction of the tint mixed into a connected cell's grayscale value
pub const CONNECTED_TINT_STRENGTH: f64 = 0.55;
/// Color used to fill the start cell
pub const START_COLOR: [u8; 4] = [230, 40, 40, 255];

// Logging
/// Log filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Interactive mode prompts
/// Prompt shown between views in interactive mode
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";
/// Prompt shown after the final view in interactive mode
pub const EXIT_PROMPT: &str = "Press Enter to exit...";
