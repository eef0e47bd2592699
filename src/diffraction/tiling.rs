//! Random two-orientation tilings.
//!
//! Each tile holds a pair of discs stacked along one axis. A tile is either
//! "vertical" (discs above each other) or "horizontal" (rotated by 90°),
//! and a grid of tiles is laid out as a checkerboard of the two whose
//! order is disturbed at random.

use ndarray::{s, Array2};
use rand::Rng;

use crate::error::{Result, SymfigError};

/// Orientation of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Discs stacked along the row axis.
    Vertical,
    /// Discs stacked along the column axis.
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Orientation of cell `(row, col)`.
    ///
    /// Cells keep their checkerboard orientation when `threshold < p` and
    /// take the other one otherwise, so `p = 1` gives a perfectly ordered
    /// checkerboard and `p = 0.5` a fully random tiling.
    pub fn for_cell(row: usize, col: usize, threshold: f64, p: f64) -> Self {
        let ordered = if (row + col) % 2 == 0 {
            Self::Vertical
        } else {
            Self::Horizontal
        };
        if threshold < p {
            ordered
        } else {
            ordered.flipped()
        }
    }
}

/// Binary `unit × unit` image with two discs centred on the middle column
/// at a quarter and three quarters of the height.
pub fn disc_pair(unit: usize) -> Array2<f64> {
    let cx = (unit as f64 * 0.5) as usize as f64;
    let cy1 = (unit as f64 * 0.25) as usize as f64;
    let cy2 = (unit as f64 * 0.75) as usize as f64;
    let radius = (unit as f64 * 0.2) as usize as f64;

    Array2::from_shape_fn((unit, unit), |(row, col)| {
        let x = col as f64;
        let y = row as f64;
        let inside = (x - cx).hypot(y - cy1) <= radius || (x - cx).hypot(y - cy2) <= radius;
        if inside {
            1.0
        } else {
            0.0
        }
    })
}

/// Rotate an image by 90° counter-clockwise.
pub fn rotate_ccw(data: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = data.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| data[[j, cols - 1 - i]])
}

/// The two tile images.
#[derive(Debug, Clone)]
pub struct Tiles {
    /// Edge length of a tile in pixels.
    pub unit: usize,
    /// Disc pair stacked vertically.
    pub vertical: Array2<f64>,
    /// Disc pair stacked horizontally.
    pub horizontal: Array2<f64>,
}

impl Tiles {
    /// Build both tiles for a given edge length.
    pub fn new(unit: usize) -> Self {
        let vertical = disc_pair(unit);
        let horizontal = rotate_ccw(&vertical);
        Self {
            unit,
            vertical,
            horizontal,
        }
    }

    /// Tile image for an orientation.
    pub fn get(&self, orientation: Orientation) -> &Array2<f64> {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }
}

/// Uniform thresholds in `[0, 1)`, one per grid cell.
pub fn random_thresholds(grid: usize, rng: &mut impl Rng) -> Array2<f64> {
    Array2::from_shape_fn((grid, grid), |_| rng.gen::<f64>())
}

/// Lay out the tiling for ordering probability `p`.
pub fn assemble(tiles: &Tiles, thresholds: &Array2<f64>, p: f64) -> Result<Array2<f64>> {
    let (rows, cols) = thresholds.dim();
    if rows != cols {
        return Err(SymfigError::invalid_config(format!(
            "threshold grid must be square, got {rows}x{cols}"
        )));
    }

    let unit = tiles.unit;
    let mut image = Array2::zeros((rows * unit, cols * unit));
    for ((row, col), &threshold) in thresholds.indexed_iter() {
        let tile = tiles.get(Orientation::for_cell(row, col, threshold, p));
        image
            .slice_mut(s![row * unit..(row + 1) * unit, col * unit..(col + 1) * unit])
            .assign(tile);
    }
    Ok(image)
}
