//! Raster rendering of the maze and PNG export

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    CELL_PIXELS, CURSOR_COLOR, MAX_IMAGE_PIXELS, PASSAGE_COLOR, ROOT_COLOR, TRAIL_COLOR,
    UNVISITED_COLOR, WALL_COLOR, WALL_PIXELS,
};
use crate::io::error::{MazeError, Result};
use crate::io::render::WalkView;
use crate::maze::grid::{Cell, CellState, Direction, Grid};

/// Pixel pitch between neighbouring cell origins
const PITCH: u32 = CELL_PIXELS + WALL_PIXELS;

/// Image dimensions in pixels for a grid
pub const fn image_dimensions(grid: &Grid) -> (u32, u32) {
    (
        grid.width() as u32 * PITCH + WALL_PIXELS,
        grid.height() as u32 * PITCH + WALL_PIXELS,
    )
}

/// Check that a raster of the grid stays within `MAX_IMAGE_PIXELS`
///
/// # Errors
///
/// Returns `InvalidParameter` if the image would exceed the limit
pub fn validate_image_size(grid: &Grid) -> Result<()> {
    let (width, height) = image_dimensions(grid);
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_IMAGE_PIXELS {
        return Err(MazeError::InvalidParameter {
            parameter: "dimensions",
            value: format!("{width}x{height} pixels"),
            reason: format!("image must not exceed {MAX_IMAGE_PIXELS} pixels"),
        });
    }
    Ok(())
}

/// Rasterize the grid with walls between cells
///
/// With a walk overlay the root, trail and walk head are highlighted;
/// without one every tree cell is drawn as open passage.
pub fn rasterize(grid: &Grid, walk: Option<&WalkView<'_>>) -> RgbaImage {
    let (width, height) = image_dimensions(grid);
    let mut img = RgbaImage::from_pixel(width, height, Rgba(WALL_COLOR));

    for cell in grid.cells() {
        let color = cell_color(grid, cell, walk);
        let left = WALL_PIXELS + cell.x as u32 * PITCH;
        let top = WALL_PIXELS + cell.y as u32 * PITCH;

        fill_rect(&mut img, left, top, CELL_PIXELS, CELL_PIXELS, color);

        // Only east and south are checked so each opening is carved once
        if grid.has_passage(cell, Direction::East) {
            fill_rect(
                &mut img,
                left + CELL_PIXELS,
                top,
                WALL_PIXELS,
                CELL_PIXELS,
                Rgba(PASSAGE_COLOR),
            );
        }
        if grid.has_passage(cell, Direction::South) {
            fill_rect(
                &mut img,
                left,
                top + CELL_PIXELS,
                CELL_PIXELS,
                WALL_PIXELS,
                Rgba(PASSAGE_COLOR),
            );
        }
    }

    img
}

fn cell_color(grid: &Grid, cell: Cell, walk: Option<&WalkView<'_>>) -> Rgba<u8> {
    let state = grid.state_of(cell).unwrap_or_default();

    let rgba = match walk {
        Some(view) if view.current == cell => CURSOR_COLOR,
        Some(view) if view.on_trail(cell) => TRAIL_COLOR,
        Some(_) if state == CellState::Root => ROOT_COLOR,
        _ if state.is_in_tree() => PASSAGE_COLOR,
        _ => UNVISITED_COLOR,
    };
    Rgba(rgba)
}

fn fill_rect(img: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32, color: Rgba<u8>) {
    for y in top..(top + height).min(img.height()) {
        for x in left..(left + width).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Export the finished maze as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The image would exceed `MAX_IMAGE_PIXELS`
/// - The maze still has unvisited cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    validate_image_size(grid)?;
    if grid.tree_size() != grid.len() {
        return Err(MazeError::InvalidParameter {
            parameter: "grid",
            value: format!("{}/{} cells in tree", grid.tree_size(), grid.len()),
            reason: "maze must be complete before export".to_string(),
        });
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    rasterize(grid, None)
        .save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
