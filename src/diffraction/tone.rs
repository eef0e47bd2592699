//! Tone curves that compress the dynamic range of diffraction patterns.

use clap::ValueEnum;
use ndarray::Array2;

use crate::util::colormaps::ColorPalette;

/// Selects a [`ToneCurve`] on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ToneKind {
    /// Raise intensities to a small power.
    #[default]
    Power,
    /// Natural logarithm above a floor.
    Log,
}

/// Monotone map applied to intensities before colouring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneCurve {
    /// `x ↦ x^exponent`.
    Power {
        /// Exponent, normally close to zero.
        exponent: f64,
    },
    /// `x ↦ ln(max(x, floor))`.
    Log {
        /// Smallest intensity kept apart from zero.
        floor: f64,
    },
}

/// Exponent of the default power curve.
pub const DEFAULT_EXPONENT: f64 = 0.01;

/// Floor of the logarithmic curve.
pub const DEFAULT_FLOOR: f64 = 1e-4;

impl Default for ToneCurve {
    fn default() -> Self {
        Self::Power {
            exponent: DEFAULT_EXPONENT,
        }
    }
}

impl ToneCurve {
    /// Build a curve of the given kind. `exponent` only affects
    /// [`ToneKind::Power`].
    pub fn from_kind(kind: ToneKind, exponent: f64) -> Self {
        match kind {
            ToneKind::Power => Self::Power { exponent },
            ToneKind::Log => Self::Log {
                floor: DEFAULT_FLOOR,
            },
        }
    }

    /// Apply the curve to one value.
    pub fn map(self, x: f64) -> f64 {
        match self {
            Self::Power { exponent } => x.max(0.0).powf(exponent),
            Self::Log { floor } => x.max(floor).ln(),
        }
    }

    /// Apply the curve to every value.
    pub fn apply(self, intensity: &Array2<f64>) -> Array2<f64> {
        intensity.mapv(|x| self.map(x))
    }

    /// Palette the curve is shown with unless overridden.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Power { .. } => ColorPalette::GrayR,
            Self::Log { .. } => ColorPalette::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_monotone(curve: ToneCurve) {
        let xs = [0.0, 1e-6, 1e-3, 0.5, 1.0, 10.0, 1e4, 1e9];
        for pair in xs.windows(2) {
            assert!(
                curve.map(pair[0]) <= curve.map(pair[1]),
                "{curve:?} decreases between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn curves_are_monotone() {
        assert_monotone(ToneCurve::default());
        assert_monotone(ToneCurve::from_kind(ToneKind::Power, 0.5));
        assert_monotone(ToneCurve::from_kind(ToneKind::Log, 0.0));
    }

    #[test]
    fn power_curve_flattens_range() {
        let curve = ToneCurve::default();
        let spread = curve.map(1e8) / curve.map(1.0);
        assert!(spread < 1.3, "spread {spread}");
    }

    #[test]
    fn log_curve_clamps_at_floor() {
        let curve = ToneCurve::from_kind(ToneKind::Log, 0.0);
        assert_eq!(curve.map(0.0), curve.map(DEFAULT_FLOOR));
        assert!(curve.map(0.0).is_finite());
    }

    #[test]
    fn palette_follows_curve() {
        assert_eq!(ToneCurve::default().palette(), ColorPalette::GrayR);
        assert_eq!(ToneCurve::from_kind(ToneKind::Log, 1.0).palette(), ColorPalette::Gray);
    }
}
