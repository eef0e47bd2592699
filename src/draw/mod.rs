//! SVG construction.
//!
//! Thin wrappers over the `svg` crate: a canvas constructor, the basic
//! shapes the diagrams are made of, and the composite glyphs in
//! [`glyphs`] and [`legend`].

pub mod glyphs;
pub mod legend;

use glam::DVec2;
use svg::node::element::{Ellipse, Line};
use svg::Document;

pub use glyphs::{
    arc_arrow, arrow, ouroboros, regular_polygon, ArcArrow, ArrowHead, LoopPath, Ouroboros,
};
pub use legend::{legend, row_positions, LegendEntry};

/// Empty document of the given size with the origin in the top left.
pub fn canvas(width: f64, height: f64) -> Document {
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
}

/// Empty document of the given size with the origin in the centre.
pub fn centered_canvas(width: f64, height: f64) -> Document {
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (-width / 2.0, -height / 2.0, width, height))
}

/// Straight line segment.
pub fn line(from: DVec2, to: DVec2, stroke: &str, width: f64) -> Line {
    Line::new()
        .set("x1", from.x)
        .set("y1", from.y)
        .set("x2", to.x)
        .set("y2", to.y)
        .set("stroke", stroke)
        .set("stroke-width", width)
}

/// Dashed straight line segment.
pub fn dashed_line(from: DVec2, to: DVec2, stroke: &str, width: f64, dashes: &str) -> Line {
    line(from, to, stroke, width).set("stroke-dasharray", dashes)
}

/// Filled axis-aligned ellipse.
pub fn ellipse(center: DVec2, rx: f64, ry: f64, fill: &str) -> Ellipse {
    Ellipse::new()
        .set("cx", center.x)
        .set("cy", center.y)
        .set("rx", rx)
        .set("ry", ry)
        .set("fill", fill)
}
