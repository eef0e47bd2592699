//! Small explanatory sketches.

use std::f64::consts::PI;

use glam::DVec2;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

use super::SvgFile;
use crate::draw;
use crate::error::Result;
use crate::geometry::to_cartesian;
use crate::style::{Style, MOTIF_COLOR};

const BOW: f64 = 1.0 / 5.0;

/// Size of the square generator canvases.
const SKETCH_SIZE: f64 = 150.0;
/// Circumradius of the generator triangle.
const TRIANGLE_RADIUS: f64 = 60.0;
/// Radius at which the orbit arrows start and end.
const ORBIT_RADIUS: f64 = 63.0;
/// Step between the single diagonal arrows.
const ARROW_STEP: f64 = 40.0;

fn orbit_arc(style: &Style, from: DVec2, to: DVec2) -> Group {
    draw::arc_arrow(style, from, to, true, BOW, &style.plain_arrow(), style.thin_stroke())
}

/// A triangle and the threefold rotation that generates its orbit.
///
/// `generator.svg` shows a single rotation step and `generator2.svg` the
/// full cycle. `arrow0.svg` to `arrow2.svg` build up a staircase of
/// plain arrows, one more per file.
pub fn generator(style: &Style) -> Result<Vec<SvgFile>> {
    let corners = [
        to_cartesian(ORBIT_RADIUS, 0.0),
        to_cartesian(ORBIT_RADIUS, -2.0 * PI / 3.0),
        to_cartesian(ORBIT_RADIUS, 2.0 * PI / 3.0),
    ];
    let triangle = || draw::regular_polygon(DVec2::ZERO, 3, TRIANGLE_RADIUS, 0.0, MOTIF_COLOR);

    let single = draw::centered_canvas(SKETCH_SIZE, SKETCH_SIZE)
        .add(triangle())
        .add(orbit_arc(style, corners[0], corners[1]));

    let mut cycle = draw::centered_canvas(SKETCH_SIZE, SKETCH_SIZE).add(triangle());
    for i in 0..corners.len() {
        cycle = cycle.add(orbit_arc(style, corners[i], corners[(i + 1) % corners.len()]));
    }

    let mut files = vec![
        SvgFile::new("generator.svg", single),
        SvgFile::new("generator2.svg", cycle),
    ];

    for count in 1..=3 {
        let mut doc = draw::canvas(SKETCH_SIZE, SKETCH_SIZE);
        for i in 0..count {
            let step = i as f64 * ARROW_STEP;
            let start = DVec2::new(15.0 + step, 135.0 - step);
            let end = start + DVec2::new(ARROW_STEP, -ARROW_STEP);
            let variant = style.plain_arrow();
            doc = doc.add(draw::arrow(style, start, end, &variant, style.thin_stroke()));
        }
        files.push(SvgFile::new(format!("arrow{}.svg", count - 1), doc));
    }

    Ok(files)
}

/// Every arrow variant on its own row, plus a thick sample arc.
pub fn variants(style: &Style) -> Result<Vec<SvgFile>> {
    let mut doc = draw::canvas(400.0, 500.0);
    for (i, variant) in style.arrow_variants().iter().enumerate() {
        let y = i as f64 * 10.0 + 20.0;
        doc = doc.add(draw::arrow(
            style,
            DVec2::new(20.0, y),
            DVec2::new(480.0, y),
            variant,
            style.thin_stroke(),
        ));
    }

    // half circle of radius 80 around (100, 100), over the top
    let (cx, cy, r) = (100.0, 100.0, 80.0);
    let arc = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 10)
        .set(
            "d",
            Data::new()
                .move_to((cx + r, cy))
                .elliptical_arc_to((r, r, 0.0, 0.0, 0.0, cx - r, cy)),
        );

    Ok(vec![SvgFile::new("variants.svg", doc.add(arc))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Target;
    use approx::assert_relative_eq;

    #[test]
    fn generator_writes_cumulative_arrows() {
        let files = generator(&Style::for_target(Target::Presentation)).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["generator.svg", "generator2.svg", "arrow0.svg", "arrow1.svg", "arrow2.svg"]
        );
        for (k, file) in files[2..].iter().enumerate() {
            assert_eq!(file.document.to_string().matches("<g").count(), k + 1);
        }
    }

    #[test]
    fn full_cycle_has_three_arcs() {
        let files = generator(&Style::for_target(Target::Presentation)).unwrap();
        assert_eq!(files[0].document.to_string().matches("<g").count(), 1);
        assert_eq!(files[1].document.to_string().matches("<g").count(), 3);
    }

    #[test]
    fn orbit_corners_sit_on_circle() {
        for theta in [0.0, -2.0 * PI / 3.0, 2.0 * PI / 3.0] {
            let p = to_cartesian(ORBIT_RADIUS, theta);
            assert_relative_eq!(p.length(), ORBIT_RADIUS, epsilon = 1e-9);
        }
    }

    #[test]
    fn variant_sheet_shows_all_fifteen() {
        let files = variants(&Style::for_target(Target::Report)).unwrap();
        let text = files[0].document.to_string();
        assert_eq!(text.matches("<g").count(), 15);
        assert!(text.contains("stroke-width=\"10\""));
    }
}
