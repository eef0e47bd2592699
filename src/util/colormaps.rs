//! Color mapping functions for raster output.

use clap::ValueEnum;
use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Color palette for scalar images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorPalette {
    /// Reversed grayscale: low values white, high values black.
    #[default]
    GrayR,
    /// Grayscale: low values black, high values white.
    Gray,
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
}

impl ColorPalette {
    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Rgb<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::GrayR => gray_color(1.0 - t),
            Self::Gray => gray_color(t),
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
        }
    }
}

fn gray_color(t: f64) -> Rgb<u8> {
    let v = (t * 255.0).round() as u8;
    Rgb([v, v, v])
}

/// Piecewise linear interpolation through three anchor colours.
fn three_stop(t: f64, low: [f64; 3], mid: [f64; 3], high: [f64; 3]) -> Rgb<u8> {
    let channel = |c: usize| {
        let v = if t < 0.5 {
            low[c] + t * 2.0 * (mid[c] - low[c])
        } else {
            mid[c] + (t - 0.5) * 2.0 * (high[c] - mid[c])
        };
        v as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Rgb<u8> {
    three_stop(t, [68.0, 1.0, 84.0], [33.0, 104.0, 109.0], [253.0, 231.0, 37.0])
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Rgb<u8> {
    three_stop(t, [13.0, 8.0, 135.0], [180.0, 54.0, 121.0], [240.0, 175.0, 12.0])
}

/// Rescale finite values linearly onto `[0, 1]`.
///
/// A constant image maps to all zeros. Non-finite values stay as they are
/// and end up at the low end of the palette.
pub fn normalize(data: &Array2<f64>) -> Array2<f64> {
    let (min, max) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return data.mapv(|v| if v.is_finite() { 0.0 } else { v });
    }
    data.mapv(|v| (v - min) / span)
}

/// Normalize `data` and paint it with `palette`. Rows map to image rows.
pub fn colorize(data: &Array2<f64>, palette: ColorPalette) -> RgbImage {
    let norm = normalize(data);
    let (rows, cols) = norm.dim();
    RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        palette.color(norm[[y as usize, x as usize]])
    })
}
