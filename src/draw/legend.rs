//! Legend listing each arrow family with its multiplicity.

use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text};

use crate::style::{ArrowVariant, Style};

/// Length of the sample stroke in each row.
const SAMPLE_LENGTH: f64 = 60.0;
/// Gap between the sample stroke and its label.
const TEXT_OFFSET: f64 = 20.0;
/// Row pitch in multiples of the font size.
const ROW_SPACING: f64 = 1.5;

/// One legend row: the arrow family and how many operations it stands for.
pub type LegendEntry = (ArrowVariant, usize);

/// Vertical positions of `rows` legend rows centred on `h_center`.
pub fn row_positions(style: &Style, h_center: f64, rows: usize) -> Vec<f64> {
    let pitch = style.font_size * ROW_SPACING;
    let top = h_center - rows.saturating_sub(1) as f64 * pitch / 2.0;
    (0..rows).map(|i| top + i as f64 * pitch).collect()
}

/// Column of sample strokes and counts, vertically centred on `h_center`.
pub fn legend(style: &Style, h_center: f64, left: f64, entries: &[LegendEntry]) -> Group {
    let line_end = left + SAMPLE_LENGTH;
    let text_start = line_end + TEXT_OFFSET;

    let mut group = Group::new();
    let rows = row_positions(style, h_center, entries.len());
    for ((variant, count), y) in entries.iter().zip(rows) {

        let sample = Path::new()
            .set("fill", "none")
            .set("stroke", variant.color.clone())
            .set("stroke-width", style.thin_stroke())
            .set("stroke-dasharray", variant.dashes)
            .set("d", Data::new().move_to((left, y)).line_to((line_end, y)));

        let label = Text::new(count.to_string())
            .set("fill", style.text_color.clone())
            .set("font-size", style.font_size)
            .set("dominant-baseline", "middle")
            .set("x", text_start)
            .set("y", y);

        group = group.add(sample).add(label);
    }
    group
}
