//! Diffraction from a partially ordered tiling.
//!
//! A grid of disc-pair tiles is laid out as a checkerboard of two
//! orientations, with each cell keeping its ordered orientation with
//! probability `p`. For a series of `p` values the real-space image, the
//! tone-mapped diffraction intensity and the pair distribution function
//! are written as PNG files.

pub mod fourier;
pub mod tiling;
pub mod tone;

use std::path::{Path, PathBuf};

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Result, SymfigError};
use crate::style::Target;
use crate::util::colormaps::{colorize, ColorPalette};
use crate::util::output::{ensure_dir, write_png};

pub use tiling::{Orientation, Tiles};
pub use tone::{ToneCurve, ToneKind};

/// Settings for a diffraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffractionConfig {
    /// Tile edge length in pixels.
    pub unit: usize,
    /// Tiles per side.
    pub grid: usize,
    /// Number of ordering probabilities in the series.
    pub steps: usize,
    /// Lowest ordering probability.
    pub p_min: f64,
    /// Highest ordering probability.
    pub p_max: f64,
    /// Curve applied to the intensity.
    pub tone: ToneCurve,
    /// Palette for every image. `None` keeps reversed grayscale for real
    /// space and the tone curve's own palette for the intensity.
    pub palette: Option<ColorPalette>,
    /// Seed for the random thresholds. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for DiffractionConfig {
    fn default() -> Self {
        Self {
            unit: 50,
            grid: 20,
            steps: 8,
            p_min: 0.5,
            p_max: 1.0,
            tone: ToneCurve::default(),
            palette: None,
            seed: None,
        }
    }
}

impl DiffractionConfig {
    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.unit == 0 {
            return Err(SymfigError::invalid_config("unit must be at least 1"));
        }
        if self.grid == 0 {
            return Err(SymfigError::invalid_config("grid must be at least 1"));
        }
        if self.steps == 0 {
            return Err(SymfigError::invalid_config("steps must be at least 1"));
        }
        let unit_interval = 0.0..=1.0;
        if !unit_interval.contains(&self.p_min)
            || !unit_interval.contains(&self.p_max)
            || self.p_min > self.p_max
        {
            return Err(SymfigError::invalid_config(format!(
                "probability range [{}, {}] must lie within [0, 1]",
                self.p_min, self.p_max
            )));
        }
        if let ToneCurve::Power { exponent } = self.tone {
            if !(exponent > 0.0 && exponent.is_finite()) {
                return Err(SymfigError::invalid_config(format!(
                    "tone exponent must be positive, got {exponent}"
                )));
            }
        }
        Ok(())
    }

    /// Evenly spaced probabilities from `p_min` to `p_max`, both included.
    pub fn probabilities(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.p_min],
            n => {
                let step = (self.p_max - self.p_min) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { self.p_max } else { self.p_min + i as f64 * step })
                    .collect()
            }
        }
    }

    fn real_palette(&self) -> ColorPalette {
        self.palette.unwrap_or(ColorPalette::GrayR)
    }

    fn intensity_palette(&self) -> ColorPalette {
        self.palette.unwrap_or_else(|| self.tone.palette())
    }
}

/// Arrays computed for one ordering probability.
#[derive(Debug, Clone)]
pub struct DiffractionStep {
    /// Ordering probability.
    pub probability: f64,
    /// The tiling.
    pub real_space: Array2<f64>,
    /// Intensity after the tone curve.
    pub toned: Array2<f64>,
    /// Pair distribution function.
    pub pair_distribution: Array2<f64>,
}

/// Compute one step of the series.
pub fn simulate_step(
    tiles: &Tiles,
    thresholds: &Array2<f64>,
    probability: f64,
    tone: ToneCurve,
) -> Result<DiffractionStep> {
    let real_space = tiling::assemble(tiles, thresholds, probability)?;
    let intensity = fourier::intensity(&fourier::fft2(&real_space));
    let pair_distribution = fourier::pair_distribution(&intensity);
    Ok(DiffractionStep {
        probability,
        real_space,
        toned: tone.apply(&intensity),
        pair_distribution,
    })
}

/// Run the whole series and write `test{k}.png`, `fft{k}.png` and
/// `pdf{k}.png` to `<out_root>/report/imgs/`.
#[tracing::instrument(
    skip_all,
    fields(unit = config.unit, grid = config.grid, steps = config.steps)
)]
pub fn run(config: &DiffractionConfig, out_root: &Path) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let tiles = Tiles::new(config.unit);
    let thresholds = tiling::random_thresholds(config.grid, &mut rng);
    let dir = ensure_dir(&out_root.join(Target::Report.dir_name()).join("imgs"))?;

    let mut written = Vec::with_capacity(3 * config.steps);
    for (i, p) in config.probabilities().into_iter().enumerate() {
        let k = i + 1;
        tracing::debug!(step = k, probability = p, "simulating");
        let step = simulate_step(&tiles, &thresholds, p, config.tone)?;

        written.push(write_png(
            &dir,
            &format!("test{k}.png"),
            &colorize(&step.real_space, config.real_palette()),
        )?);
        written.push(write_png(
            &dir,
            &format!("fft{k}.png"),
            &colorize(&step.toned, config.intensity_palette()),
        )?);
        written.push(write_png(
            &dir,
            &format!("pdf{k}.png"),
            &colorize(&step.pair_distribution, config.real_palette()),
        )?);
    }

    tracing::info!(files = written.len(), dir = %dir.display(), "diffraction series done");
    Ok(written)
}
