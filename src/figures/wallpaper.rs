//! Two-dimensional wallpaper diagrams for the plane group `p2mg`.

use std::f64::consts::PI;

use glam::DVec2;
use svg::Document;

use super::SvgFile;
use crate::draw::{self, LegendEntry};
use crate::error::Result;
use crate::style::{ArrowVariant, Style, MOTIF_COLOR};
use crate::symmetry::{BuiltinGroup, PairExpansion};
use crate::util::layout_config::WallpaperLayout;

/// Bow of the operation arcs.
const BOW: f64 = 1.0 / 5.0;

/// Fractional position of the chosen motif. It lies on a mirror.
const MOTIF: DVec2 = DVec2::new(0.2, 0.25);

/// Pair vector of each legend row in cell fractions: identity, translation
/// along a, twofold rotation, glide reflection, translation along b.
const CLASS_VECTORS: [DVec2; 5] = [
    DVec2::ZERO,
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0 - 2.0 * MOTIF.x, 1.0 - 2.0 * MOTIF.y),
    DVec2::new(-2.0 * MOTIF.x, -2.0 * MOTIF.y),
    DVec2::new(0.0, 1.0),
];

/// Canvas of the separate legend file.
const LEGEND_CANVAS: (f64, f64) = (100.0, 200.0);

/// Rotation of the pentagons in the Wyckoff diagram.
const PENTAGON_TILT: f64 = 0.8;

/// Lattice, glide lines, mirror lines and twofold rotation centres.
fn base(style: &Style, layout: &WallpaperLayout) -> Document {
    let a = layout.a_len();
    let b = layout.b_len();
    let (left, top) = (layout.x_margin, layout.y_margin);
    let (right, bottom) = (layout.right(), layout.bottom());
    let n = layout.unitcells;
    let mut doc = draw::canvas(layout.width, layout.height);

    // vertical lattice lines
    for i in 0..=n {
        let x = left + i as f64 * a;
        doc = doc.add(draw::line(
            DVec2::new(x, top),
            DVec2::new(x, bottom),
            &style.main_color,
            style.thin_stroke(),
        ));
    }
    // horizontal lattice lines
    for i in 0..=n {
        let y = top + i as f64 * b;
        doc = doc.add(draw::line(
            DVec2::new(left, y),
            DVec2::new(right, y),
            &style.main_color,
            style.thin_stroke(),
        ));
    }
    // glide lines
    for i in 0..=2 * n {
        let x = left + i as f64 * a / 2.0;
        doc = doc.add(draw::dashed_line(
            DVec2::new(x, top),
            DVec2::new(x, bottom),
            &style.desaturated[0],
            style.main_stroke_width,
            style.mirror_dashes,
        ));
    }
    // mirror lines
    for i in 0..2 * n {
        let y = top + i as f64 * b / 2.0 + b / 4.0;
        doc = doc.add(draw::line(
            DVec2::new(left, y),
            DVec2::new(right, y),
            &style.desaturated[1],
            style.main_stroke_width,
        ));
    }
    // rotation centres
    let marker = a / 15.0;
    for i in 0..=2 * n {
        for j in 0..=2 * n {
            doc = doc.add(draw::ellipse(
                DVec2::new(left + i as f64 * a / 2.0, top + j as f64 * b / 2.0),
                marker / 2.0,
                marker,
                &style.desaturated[2],
            ));
        }
    }

    doc
}

/// Lattice filled with motif pairs and the arrows from one chosen motif to
/// a representative image under each operation class.
fn p2mg_scene(
    style: &Style,
    layout: &WallpaperLayout,
    width: f64,
    identity: &ArrowVariant,
) -> Document {
    let a = layout.a_len();
    let b = layout.b_len();
    let x_offset = a * MOTIF.x;
    let y_offset = b * MOTIF.y;
    let mut doc = base(style, layout);

    for i in 0..layout.unitcells {
        for j in 0..layout.unitcells {
            let cell = DVec2::new(layout.x_margin + i as f64 * a, layout.y_margin + j as f64 * b);
            doc = doc
                .add(draw::regular_polygon(
                    cell + DVec2::new(x_offset, y_offset),
                    3,
                    layout.obj_radius,
                    0.0,
                    MOTIF_COLOR,
                ))
                .add(draw::regular_polygon(
                    cell + DVec2::new(a - x_offset, b - y_offset),
                    3,
                    layout.obj_radius,
                    PI,
                    MOTIF_COLOR,
                ));
        }
    }

    let origin = DVec2::new(layout.x_margin + a + x_offset, layout.y_margin + b + y_offset);
    let arc = |doc: Document, to: DVec2, flip: bool, k: usize| {
        doc.add(draw::arc_arrow(style, origin, origin + to, flip, BOW, &style.variant(k), width))
    };

    // translations along a
    let doc = arc(doc, DVec2::new(a, 0.0), false, 1);
    let doc = arc(doc, DVec2::new(-a, 0.0), true, 1);
    // twofold rotations
    let doc = arc(doc, DVec2::new(a - 2.0 * x_offset, b - 2.0 * y_offset), true, 2);
    let doc = arc(doc, DVec2::new(a - 2.0 * x_offset, -b + 2.0 * y_offset), false, 2);
    // glide reflections
    let doc = arc(doc, DVec2::new(-2.0 * x_offset, -2.0 * y_offset), true, 3);
    let doc = arc(doc, DVec2::new(-2.0 * x_offset, 2.0 * y_offset), false, 3);
    // translations along b
    let doc = doc
        .add(draw::arrow(style, origin, origin + DVec2::new(0.0, b), &style.variant(4), width))
        .add(draw::arrow(style, origin, origin + DVec2::new(0.0, -b), &style.variant(4), width));

    doc.add(draw::ouroboros(style, origin, 0.0, identity, width))
}

/// Legend rows: identity first, then the four operation classes.
///
/// `count` picks the number shown for each pair class.
fn p2mg_legend(style: &Style, count: fn(&PairExpansion) -> usize) -> Result<Vec<LegendEntry>> {
    let group = BuiltinGroup::P2mg.group()?;
    let rows = CLASS_VECTORS.iter().enumerate().map(|(k, vector)| {
        let pair = PairExpansion::new(&group, MOTIF, *vector);
        (style.variant(k), count(&pair))
    });
    Ok(rows.collect())
}

/// `p2mg` with arrows for every operation class.
///
/// On slides the lattice fills the canvas and `legend.svg` lists how many
/// pairs per cell each class stands for. In print the legend sits to the
/// right of the lattice and counts the pairs starting at the chosen motif.
pub fn p2mg(style: &Style) -> Result<Vec<SvgFile>> {
    if style.annotated() {
        let layout = WallpaperLayout::fixed_margins(style);
        let doc = p2mg_scene(style, &layout, style.main_stroke_width, &style.variant(0));
        let (width, height) = LEGEND_CANVAS;
        let rows = p2mg_legend(style, PairExpansion::multiplicity)?;
        let legend = draw::legend(style, height / 2.0, 0.0, &rows);
        let legend = draw::canvas(width, height).add(legend);
        return Ok(vec![
            SvgFile::new("p2mg.svg", doc),
            SvgFile::new("legend.svg", legend),
        ]);
    }

    let layout = WallpaperLayout::with_legend(style);
    let rows = p2mg_legend(style, PairExpansion::neighbours)?;
    let left = layout.width - layout.x_margin - style.legend_width;
    let doc = p2mg_scene(style, &layout, style.thin_stroke(), &style.variant(0))
        .add(draw::legend(style, layout.height / 2.0, left, &rows));
    Ok(vec![SvgFile::new("p2mg.svg", doc)])
}

/// Title graphic: the `p2mg` scene with a plain identity loop.
pub fn title(style: &Style) -> Result<Vec<SvgFile>> {
    let layout = WallpaperLayout::for_style(style);
    let doc = p2mg_scene(style, &layout, style.thin_stroke(), &style.plain_arrow());
    Ok(vec![SvgFile::new("title.svg", doc)])
}

/// One cell showing general positions: triangles related by the twofold
/// rotation and pentagons related by the mirror.
pub fn wyckoff(style: &Style) -> Result<Vec<SvgFile>> {
    let layout = WallpaperLayout::single_cell(style);
    let a = layout.a_len();
    let b = layout.b_len();
    let (left, top) = (layout.x_margin, layout.y_margin);
    let radius = layout.obj_radius * 1.5;
    let mut doc = base(style, &layout);

    let x_offset = a / 5.0;
    let y_offset = b / 4.0;
    let triangles = [
        (DVec2::new(left + a - x_offset, top + y_offset), 0.0),
        (DVec2::new(left + x_offset, top + b - y_offset), PI),
    ];

    let x_offset = a / 3.0;
    let y_offset = a / 10.0;
    let pentagons = [
        (DVec2::new(left + x_offset, top + y_offset), PENTAGON_TILT),
        (DVec2::new(left + x_offset, top + b / 2.0 - y_offset), -PENTAGON_TILT),
        (DVec2::new(left + a - x_offset, top + b - y_offset), PENTAGON_TILT + PI),
        (DVec2::new(left + a - x_offset, top + b / 2.0 + y_offset), -(PENTAGON_TILT + PI)),
    ];

    for (center, theta) in triangles {
        doc = doc.add(draw::regular_polygon(center, 3, radius, theta, MOTIF_COLOR));
    }
    for (center, theta) in pentagons {
        doc = doc.add(draw::regular_polygon(center, 5, radius, theta, MOTIF_COLOR));
    }

    Ok(vec![SvgFile::new("wyckoff.svg", doc)])
}
