//! Visual styles for the two output targets.
//!
//! The presentation is shown on a dark slide background and uses a wider
//! canvas with heavier strokes; the report is printed on white paper.

pub mod palette;

use std::fmt;

use clap::ValueEnum;

pub use palette::{desaturated_colors, hex_color, hsv_to_rgb, saturated_colors, NUM_COLORS};

/// Dash patterns distinguishing arrow families, in legend order.
pub const DASHES: [&str; 3] = ["none", "5 1", "5 1 1 1"];

/// Fill colour used for motifs.
pub const MOTIF_COLOR: &str = "red";

/// Which document a figure is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Target {
    /// Slides with a dark background.
    Presentation,
    /// Printed report.
    Report,
}

impl Target {
    /// All targets, in render order.
    pub const ALL: [Target; 2] = [Target::Presentation, Target::Report];

    /// Directory name used for this target's output.
    pub fn dir_name(self) -> &'static str {
        match self {
            Target::Presentation => "presentation",
            Target::Report => "report",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// How the identity ("do nothing") arrow is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuroborosShape {
    /// A near-complete circle with the head sitting in the gap.
    Arc,
    /// A single cubic loop leaving and re-entering the motif.
    Curl,
}

/// Colour and dash pattern of one arrow family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowVariant {
    /// Stroke and head fill colour.
    pub color: String,
    /// SVG dash array, or `"none"`.
    pub dashes: &'static str,
}

impl ArrowVariant {
    /// Create a new arrow variant.
    pub fn new(color: impl Into<String>, dashes: &'static str) -> Self {
        Self {
            color: color.into(),
            dashes,
        }
    }
}

/// Full set of drawing constants for one target.
#[derive(Debug, Clone)]
pub struct Style {
    /// Document this style renders for.
    pub target: Target,
    /// Canvas width.
    pub width: f64,
    /// Legend font size.
    pub font_size: f64,
    /// Stroke width of heavy lines; light lines use half of it.
    pub main_stroke_width: f64,
    /// Arrow head radius as a multiple of the stroke width.
    pub arrow_head_factor: f64,
    /// Dash array for glide lines.
    pub mirror_dashes: &'static str,
    /// Colour of lattice lines and default arrows.
    pub main_color: String,
    /// Colour of legend labels.
    pub text_color: String,
    /// Muted colours for symmetry elements.
    pub desaturated: Vec<String>,
    /// Strong colours for arrows.
    pub saturated: Vec<String>,
    /// Shape of the identity arrow.
    pub ouroboros: OuroborosShape,
    /// Horizontal space reserved for a legend.
    pub legend_width: f64,
    /// Gap between the diagram and its legend.
    pub legend_margin: f64,
}

impl Style {
    /// Create the style for a target.
    pub fn for_target(target: Target) -> Self {
        match target {
            Target::Presentation => Self {
                target,
                width: 800.0,
                font_size: 20.0,
                main_stroke_width: 3.0,
                arrow_head_factor: 4.0,
                mirror_dashes: "5 5",
                main_color: "#aaaaaa".to_string(),
                text_color: "white".to_string(),
                desaturated: desaturated_colors(0.65),
                saturated: saturated_colors(),
                ouroboros: OuroborosShape::Arc,
                legend_width: 100.0,
                legend_margin: 80.0,
            },
            Target::Report => Self {
                target,
                width: 500.0,
                font_size: 20.0,
                main_stroke_width: 2.0,
                arrow_head_factor: 4.0,
                mirror_dashes: "2 2",
                main_color: "black".to_string(),
                text_color: "black".to_string(),
                desaturated: desaturated_colors(0.80),
                saturated: saturated_colors(),
                ouroboros: OuroborosShape::Curl,
                legend_width: 100.0,
                legend_margin: 80.0,
            },
        }
    }

    /// Whether figures carry a legend and coloured identity arrows.
    pub fn annotated(&self) -> bool {
        self.target == Target::Presentation
    }

    /// Horizontal space taken by a legend, or zero without one.
    pub fn legend_reserve(&self) -> f64 {
        if self.annotated() {
            self.legend_width + self.legend_margin
        } else {
            0.0
        }
    }

    /// Default stroke width for arrows and thin lines.
    pub fn thin_stroke(&self) -> f64 {
        self.main_stroke_width / 2.0
    }

    /// Arrow in the main colour with a solid stroke.
    pub fn plain_arrow(&self) -> ArrowVariant {
        ArrowVariant::new(self.main_color.clone(), DASHES[0])
    }

    /// All arrow variants: every dash pattern crossed with every colour.
    ///
    /// Index `k` uses dash pattern `k / NUM_COLORS` and colour `k % NUM_COLORS`.
    pub fn arrow_variants(&self) -> Vec<ArrowVariant> {
        DASHES
            .iter()
            .flat_map(|&dashes| {
                self.saturated
                    .iter()
                    .map(move |color| ArrowVariant::new(color.clone(), dashes))
            })
            .collect()
    }

    /// Arrow variant `k` (see [`Style::arrow_variants`]).
    pub fn variant(&self, k: usize) -> ArrowVariant {
        let color = &self.saturated[k % NUM_COLORS];
        ArrowVariant::new(color.clone(), DASHES[(k / NUM_COLORS) % DASHES.len()])
    }
}
