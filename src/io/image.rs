//! PNG rendering of a grid with the connected region highlighted

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use num_traits::Float;

use crate::algorithm::search::ConnectedRegion;
use crate::io::configuration::{
    CONNECTED_TINT, CONNECTED_TINT_STRENGTH, MAX_CELL_SIZE, START_COLOR,
};
use crate::io::error::{Result, SearchError, invalid_argument};
use crate::spatial::Grid;
use crate::spatial::coordinate::Coordinate;

// Maps a value to a gray level, darkest at the grid minimum
fn gray_level<T: Float>(value: T, min: T, max: T) -> u8 {
    let span = max - min;
    if span <= T::zero() {
        return 128;
    }
    let normalized = ((value - min) / span).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
    (normalized * 255.0).round() as u8
}

fn blend(base: u8, tint: u8, strength: f64) -> u8 {
    (f64::from(base) * (1.0 - strength) + f64::from(tint) * strength).round() as u8
}

/// Render the grid as an image with `cell_size` pixels per cell
///
/// Cells are shaded by value, connected cells are tinted, and the start cell
/// is filled with a solid marker color.
///
/// # Errors
///
/// Returns `InvalidArgument` if `cell_size` is zero or above the supported
/// maximum
pub fn render_region<T: Float>(
    grid: &Grid<T>,
    region: &ConnectedRegion,
    cell_size: u32,
) -> Result<RgbaImage> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_argument(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }

    let pixels = |cells: usize| u32::try_from(cells).ok()?.checked_mul(cell_size);
    let (Some(width), Some(height)) = (pixels(grid.columns()), pixels(grid.rows())) else {
        return Err(invalid_argument(
            "cell_size",
            &cell_size,
            &"image dimensions would overflow",
        ));
    };

    let (min, max) = grid.value_range();

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let coordinate = Coordinate::new((px / cell_size) as usize, (py / cell_size) as usize);
        if coordinate == region.start() {
            return Rgba(START_COLOR);
        }

        let level = grid
            .value_at(coordinate)
            .map_or(0, |value| gray_level(value, min, max));

        if region.contains(coordinate) {
            Rgba([
                blend(level, CONNECTED_TINT[0], CONNECTED_TINT_STRENGTH),
                blend(level, CONNECTED_TINT[1], CONNECTED_TINT_STRENGTH),
                blend(level, CONNECTED_TINT[2], CONNECTED_TINT_STRENGTH),
                CONNECTED_TINT[3],
            ])
        } else {
            Rgba([level, level, level, 255])
        }
    });

    Ok(img)
}

/// Render the grid and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is out of range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_region_as_png<T: Float>(
    grid: &Grid<T>,
    region: &ConnectedRegion,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_region(grid, region, cell_size)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SearchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| SearchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("wrote region image to '{}'", output_path.display());
    Ok(())
}
