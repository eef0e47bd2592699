//! One-dimensional frieze diagrams.
//!
//! A horizontal axis with lattice ticks, motifs sitting on the axis, and
//! arcs from one chosen motif to each of its images. The presentation
//! versions add a legend and a coloured identity loop.

use std::f64::consts::PI;

use glam::DVec2;
use svg::node::element::{Group, Path};
use svg::Document;

use super::SvgFile;
use crate::draw::{self, LegendEntry};
use crate::error::Result;
use crate::style::{ArrowVariant, Style, MOTIF_COLOR, NUM_COLORS};
use crate::symmetry::{BuiltinGroup, PairExpansion, SymmetryGroup};
use crate::util::layout_config::FriezeLayout;

/// Bow of every connection arc.
const BOW: f64 = 1.0 / 5.0;

/// Arrow variant of the identity loop in the mirror friezes.
const MIRROR_IDENTITY_VARIANT: usize = 12;

/// Axis with lattice ticks.
fn base(style: &Style, layout: &FriezeLayout) -> Document {
    let y = layout.axis_y();
    let mut doc = draw::canvas(layout.width, layout.height).add(draw::line(
        DVec2::new(layout.margin, y),
        DVec2::new(layout.axis_end(), y),
        &style.main_color,
        style.main_stroke_width,
    ));

    for i in 0..=layout.unitcells {
        let x = layout.tick_x(i);
        doc = doc.add(draw::line(
            DVec2::new(x, y + layout.tick_height / 2.0),
            DVec2::new(x, y - layout.tick_height / 2.0),
            &style.main_color,
            style.thin_stroke(),
        ));
    }
    doc
}

/// Horizontal position and family of every mirror tick.
///
/// Family 0 passes through the motif, family 1 lies half a cell further.
fn mirror_ticks(layout: &FriezeLayout) -> Vec<(f64, usize)> {
    [(0, 0.0), (1, layout.cell_length / 2.0)]
        .into_iter()
        .flat_map(|(family, shift)| {
            (0..layout.unitcells)
                .map(move |i| (layout.tick_x(i) + layout.mirror_offset + shift, family))
        })
        .collect()
}

/// Axis with lattice ticks and both families of mirror ticks.
fn base_with_mirrors(style: &Style, layout: &FriezeLayout) -> Document {
    let y = layout.axis_y();
    let mut doc = base(style, layout);

    for (x, family) in mirror_ticks(layout) {
        doc = doc.add(draw::line(
            DVec2::new(x, y + layout.tick_height / 3.0),
            DVec2::new(x, y - layout.tick_height / 3.0),
            &style.desaturated[family],
            style.thin_stroke(),
        ));
    }
    doc
}

/// Ordered pairs per cell equivalent to the pair from `origin` to `end`.
fn pair_count(group: &SymmetryGroup, layout: &FriezeLayout, origin: f64, end: f64) -> usize {
    let at = DVec2::new(layout.fraction(origin), 0.0);
    let vector = DVec2::new((end - origin) / layout.cell_length, 0.0);
    PairExpansion::new(group, at, vector).multiplicity()
}

/// End points of an arc from a point off the axis to the tip of a tick,
/// and whether the arc must be flipped.
///
/// `under` puts the arc below the axis (larger y). The arc always bows
/// away from the axis.
fn connection_ends(
    layout: &FriezeLayout,
    x1: f64,
    x2: f64,
    y_offset: f64,
    under: bool,
) -> (DVec2, DVec2, bool) {
    let flip = !((under && x1 > x2) || (!under && x1 < x2));
    let (y1, y2) = if under {
        let y2 = layout.axis_y() + layout.tick_height / 2.0;
        (y2 + y_offset, y2)
    } else {
        let y2 = layout.axis_y() - layout.tick_height / 2.0;
        (y2 - y_offset, y2)
    };
    (DVec2::new(x1, y1), DVec2::new(x2, y2), flip)
}

fn connection(
    style: &Style,
    layout: &FriezeLayout,
    x1: f64,
    x2: f64,
    y_offset: f64,
    under: bool,
    variant: &ArrowVariant,
) -> Group {
    let (start, end, flip) = connection_ends(layout, x1, x2, y_offset, under);
    draw::arc_arrow(style, start, end, flip, BOW, variant, style.thin_stroke())
}

fn motif(layout: &FriezeLayout, x: f64, corners: usize, theta_0: f64) -> Path {
    let center = DVec2::new(x, layout.axis_y());
    draw::regular_polygon(center, corners, layout.obj_radius, theta_0, MOTIF_COLOR)
}

fn right_triangle(layout: &FriezeLayout, x: f64) -> Path {
    motif(layout, x, 3, 0.0)
}

fn left_triangle(layout: &FriezeLayout, x: f64) -> Path {
    motif(layout, x, 3, PI)
}

fn diamond(layout: &FriezeLayout, x: f64) -> Path {
    motif(layout, x, 4, 0.0)
}

/// Add the identity loop and, when annotated, the legend.
fn finish(
    style: &Style,
    layout: &FriezeLayout,
    doc: Document,
    origin: f64,
    identity: Option<(ArrowVariant, usize)>,
    mut entries: Vec<LegendEntry>,
) -> Document {
    let center = DVec2::new(origin, layout.axis_y());
    let Some((variant, count)) = identity else {
        return doc;
    };

    let doc = doc.add(draw::ouroboros(style, center, 0.0, &variant, style.thin_stroke()));
    if !style.annotated() {
        return doc;
    }

    entries.insert(0, (variant, count));
    doc.add(draw::legend(
        style,
        layout.axis_y(),
        layout.width - layout.margin - style.legend_width,
        &entries,
    ))
}

/// `p1`: pure translations, up to three cells either way.
pub fn p1(style: &Style) -> Result<Vec<SvgFile>> {
    let group = BuiltinGroup::P1.group()?;
    let layout = FriezeLayout::for_style(style);
    let feature_offset = layout.cell_length / 3.0;
    let mut doc = base(style, &layout);

    for i in 0..layout.unitcells {
        doc = doc.add(right_triangle(&layout, layout.tick_x(i) + feature_offset));
    }

    let origin = layout.tick_x(layout.unitcells / 2) + feature_offset;
    for i in -3i32..=3 {
        if i == 0 {
            continue;
        }
        let variant = style.variant(i.unsigned_abs() as usize - 1);
        doc = doc.add(connection(
            style,
            &layout,
            origin,
            origin + layout.cell_length * f64::from(i),
            f64::from((3 * i).abs()),
            i < 0,
            &variant,
        ));
    }

    let (identity, entries) = if style.annotated() {
        let entries: Vec<LegendEntry> = (1..=3)
            .map(|i| {
                let end = origin + layout.cell_length * f64::from(i);
                (style.variant(i as usize - 1), pair_count(&group, &layout, origin, end))
            })
            .collect();
        (style.variant(6), entries)
    } else {
        (style.plain_arrow(), Vec::new())
    };
    let count = pair_count(&group, &layout, origin, origin);
    let doc = finish(style, &layout, doc, origin, Some((identity, count)), entries);

    Ok(vec![SvgFile::new("p1.svg", doc)])
}

/// `p1m` with the motif in general position: each cell holds a motif and
/// its mirror image, so images are reached by translations (below the
/// axis) and by reflections (above).
pub fn p1m_general(style: &Style) -> Result<Vec<SvgFile>> {
    let group = BuiltinGroup::P1m.group()?;
    let layout = FriezeLayout::for_style(style);
    let feature_offset = layout.cell_length / 5.0;
    let mut doc = base_with_mirrors(style, &layout);

    let mut xs = Vec::with_capacity(2 * layout.unitcells);
    for i in 0..layout.unitcells {
        let x = layout.tick_x(i) + feature_offset;
        doc = doc.add(right_triangle(&layout, x));
        xs.push(x);

        let mirrored = layout.tick_x(i) + 2.0 * layout.mirror_offset - feature_offset;
        doc = doc.add(left_triangle(&layout, mirrored));
        xs.push(mirrored);
    }
    let origin_idx = xs.len() / 2;
    let origin = xs[origin_idx];

    let mut entries = Vec::new();

    // integer translations
    for i in -2i32..=2 {
        if i == 0 {
            continue;
        }
        let variant = style.variant(i.unsigned_abs() as usize - 1);
        let target = (origin_idx as i32 + 2 * i) as usize;
        if i > 0 {
            entries.push((variant.clone(), pair_count(&group, &layout, origin, xs[target])));
        }
        doc = doc.add(connection(
            style,
            &layout,
            origin,
            xs[target],
            f64::from((3 * i).abs()),
            false,
            &variant,
        ));
    }

    // reflections
    for (i, offset) in [3.0, 1.0, 2.0, 4.0].into_iter().enumerate() {
        let variant = style.variant(NUM_COLORS + i);
        let x = xs[origin_idx + 2 * i - 3];
        entries.push((variant.clone(), pair_count(&group, &layout, origin, x)));
        doc = doc.add(connection(style, &layout, origin, x, offset * 2.0, true, &variant));
    }

    let identity = style.annotated().then(|| {
        let count = pair_count(&group, &layout, origin, origin);
        (style.variant(MIRROR_IDENTITY_VARIANT), count)
    });
    let doc = finish(style, &layout, doc, origin, identity, entries);

    Ok(vec![SvgFile::new("p1m_g.svg", doc)])
}

/// `p1m` with the motif in special position: a symmetric diamond sits on
/// every mirror, so only translations remain.
pub fn p1m_special(style: &Style) -> Result<Vec<SvgFile>> {
    let group = BuiltinGroup::P1m.group()?;
    let layout = FriezeLayout::for_style(style);
    let mut doc = base_with_mirrors(style, &layout);

    let xs: Vec<f64> = (0..layout.unitcells)
        .map(|i| layout.tick_x(i) + layout.mirror_offset)
        .collect();
    for &x in &xs {
        doc = doc.add(diamond(&layout, x));
    }

    let origin = xs[xs.len() / 2];
    let mut entries = Vec::new();
    for i in 1..=2usize {
        let variant = style.variant(i - 1);
        let shift = i as f64 * layout.cell_length;
        entries.push((variant.clone(), pair_count(&group, &layout, origin, origin + shift)));
        let y_offset = 3.0 * i as f64;
        let under = i % 2 == 1;
        doc = doc
            .add(connection(style, &layout, origin, origin + shift, y_offset, under, &variant))
            .add(connection(style, &layout, origin, origin - shift, y_offset, under, &variant));
    }

    let identity = style.annotated().then(|| {
        let count = pair_count(&group, &layout, origin, origin);
        (style.variant(MIRROR_IDENTITY_VARIANT), count)
    });
    let doc = finish(style, &layout, doc, origin, identity, entries);

    Ok(vec![SvgFile::new("p1m_s.svg", doc)])
}
