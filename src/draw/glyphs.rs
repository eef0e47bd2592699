//! Arrows, loops and polygons.

use std::f64::consts::PI;

use glam::DVec2;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

use crate::geometry::{bow_control_point, direction, regular_polygon_vertices, to_cartesian};
use crate::style::{ArrowVariant, OuroborosShape, Style};

/// The shaft is cut back this many head radii from the tip so the line
/// never pokes through the triangle.
const SHAFT_CUTBACK: f64 = 1.5;

/// Half-angle of the gap left in the circular ouroboros.
const OUROBOROS_GAP: f64 = PI / 8.0;

/// Length of the curl's control arms in head radii.
const CURL_ARM: f64 = 6.0;

/// Where an arrow head goes for a shaft arriving at `tip` at `angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Last point of the visible shaft.
    pub shaft_end: DVec2,
    /// Centre of the head triangle.
    pub center: DVec2,
    /// Rotation of the head (one vertex points along this angle).
    pub angle: f64,
    /// Circumradius of the head triangle.
    pub radius: f64,
}

impl ArrowHead {
    /// Head for a shaft ending at `tip`, travelling in direction `angle`.
    pub fn at(tip: DVec2, angle: f64, radius: f64) -> Self {
        let offset = to_cartesian(radius, angle);
        Self {
            shaft_end: tip - offset * SHAFT_CUTBACK,
            center: tip - offset,
            angle,
            radius,
        }
    }

    fn triangle(&self, fill: &str) -> Path {
        regular_polygon(self.center, 3, self.radius, self.angle, fill)
    }
}

/// Geometry of a curved arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcArrow {
    /// Tail of the arrow.
    pub start: DVec2,
    /// Quadratic control point.
    pub control: DVec2,
    /// Head placement.
    pub head: ArrowHead,
}

impl ArcArrow {
    /// Lay out a curved arrow from `start` to `end`.
    pub fn new(start: DVec2, end: DVec2, flip: bool, bow: f64, head_radius: f64) -> Self {
        let control = bow_control_point(start, end, bow, flip);
        Self {
            start,
            control,
            head: ArrowHead::at(end, direction(control, end), head_radius),
        }
    }
}

/// Stroke of an identity loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopPath {
    /// The large arc of a circle between two points near the motif.
    Arc {
        /// First point of the arc.
        start: DVec2,
        /// Last point of the arc.
        end: DVec2,
        /// Radius of the circle.
        radius: f64,
    },
    /// A single cubic leaving the motif and coming back.
    Curl {
        /// First point of the curve.
        start: DVec2,
        /// First control point, relative to `start`.
        c1: DVec2,
        /// Second control point, relative to `start`.
        c2: DVec2,
        /// Last point, relative to `start`.
        to: DVec2,
    },
}

/// Geometry of the loop drawn for the identity operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ouroboros {
    /// The stroke.
    pub path: LoopPath,
    /// Placement of the head triangle. `shaft_end` is where the stroke stops.
    pub head: ArrowHead,
}

impl Ouroboros {
    /// Lay out a loop around `center` with head radius `head`.
    pub fn new(shape: OuroborosShape, center: DVec2, angle: f64, head: f64) -> Self {
        match shape {
            OuroborosShape::Arc => {
                let entry = angle - PI / 2.0 + OUROBOROS_GAP;
                let reach = head * SHAFT_CUTBACK;
                let head = ArrowHead::at(center, entry, head);
                Self {
                    path: LoopPath::Arc {
                        start: center - to_cartesian(reach, angle + PI / 2.0 - OUROBOROS_GAP),
                        end: head.shaft_end,
                        radius: reach / OUROBOROS_GAP.tan(),
                    },
                    head,
                }
            }
            OuroborosShape::Curl => {
                let start_offset = to_cartesian(head, angle + PI / 4.0);
                let end_offset = to_cartesian(head * SHAFT_CUTBACK, angle - PI / 4.0);
                let start = center - start_offset;
                let to = (start_offset - end_offset) * SHAFT_CUTBACK;
                Self {
                    path: LoopPath::Curl {
                        start,
                        c1: -to_cartesian(head * CURL_ARM, angle + PI / 4.0),
                        c2: -to_cartesian(head * CURL_ARM, angle - PI / 4.0),
                        to,
                    },
                    head: ArrowHead {
                        shaft_end: start + to,
                        center: center - end_offset,
                        angle,
                        radius: head,
                    },
                }
            }
        }
    }

    fn data(&self) -> Data {
        match self.path {
            LoopPath::Arc { start, end, radius } => Data::new()
                .move_to((start.x, start.y))
                .elliptical_arc_to((radius, radius, 0.0, 1.0, 0.0, end.x, end.y)),
            LoopPath::Curl { start, c1, c2, to } => Data::new()
                .move_to((start.x, start.y))
                .cubic_curve_by((c1.x, c1.y, c2.x, c2.y, to.x, to.y)),
        }
    }
}

fn stroked(data: Data, variant: &ArrowVariant, width: f64) -> Path {
    Path::new()
        .set("fill", "none")
        .set("stroke", variant.color.clone())
        .set("stroke-width", width)
        .set("stroke-dasharray", variant.dashes)
        .set("d", data)
}

/// Filled regular polygon with its first vertex at angle `theta_0`.
pub fn regular_polygon(center: DVec2, n: usize, radius: f64, theta_0: f64, fill: &str) -> Path {
    let mut vertices = regular_polygon_vertices(center, n, radius, theta_0).into_iter();
    let mut data = Data::new();
    if let Some(first) = vertices.next() {
        data = data.move_to((first.x, first.y));
    }
    for v in vertices {
        data = data.line_to((v.x, v.y));
    }
    Path::new().set("fill", fill).set("d", data.close())
}

/// Straight arrow from `start` to `end`.
pub fn arrow(style: &Style, start: DVec2, end: DVec2, variant: &ArrowVariant, width: f64) -> Group {
    let head = ArrowHead::at(end, direction(start, end), width * style.arrow_head_factor);
    let shaft = Data::new()
        .move_to((start.x, start.y))
        .line_to((head.shaft_end.x, head.shaft_end.y));

    Group::new()
        .add(stroked(shaft, variant, width))
        .add(head.triangle(&variant.color))
}

/// Arrow bent into a quadratic curve.
///
/// `bow` is the control point offset as a fraction of the chord length;
/// `flip` bends to the other side of the chord.
pub fn arc_arrow(
    style: &Style,
    start: DVec2,
    end: DVec2,
    flip: bool,
    bow: f64,
    variant: &ArrowVariant,
    width: f64,
) -> Group {
    let layout = ArcArrow::new(start, end, flip, bow, width * style.arrow_head_factor);
    let (control, tip) = (layout.control, layout.head.shaft_end);
    let shaft = Data::new()
        .move_to((start.x, start.y))
        .quadratic_curve_to((control.x, control.y, tip.x, tip.y));

    Group::new()
        .add(stroked(shaft, variant, width))
        .add(layout.head.triangle(&variant.color))
}

/// Loop that leaves a motif and comes back to it, drawn for the identity.
pub fn ouroboros(
    style: &Style,
    center: DVec2,
    angle: f64,
    variant: &ArrowVariant,
    width: f64,
) -> Group {
    let layout = Ouroboros::new(
        style.ouroboros,
        center,
        angle,
        width * style.arrow_head_factor,
    );
    Group::new()
        .add(stroked(layout.data(), variant, width))
        .add(layout.head.triangle(&variant.color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Target;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shaft_stops_short_of_tip() {
        let head = ArrowHead::at(DVec2::new(100.0, 0.0), 0.0, 4.0);
        assert_abs_diff_eq!(head.shaft_end.x, 94.0, epsilon = 1e-9);
        assert_abs_diff_eq!(head.center.x, 96.0, epsilon = 1e-9);
        assert_abs_diff_eq!(head.shaft_end.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn head_vertex_reaches_tip() {
        let tip = DVec2::new(3.0, 7.0);
        let head = ArrowHead::at(tip, 0.7, 5.0);
        let vertices = regular_polygon_vertices(head.center, 3, head.radius, head.angle);
        assert_abs_diff_eq!(vertices[0].distance(tip), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn arc_head_follows_control_tangent() {
        let end = DVec2::new(10.0, 0.0);
        let layout = ArcArrow::new(DVec2::ZERO, end, false, 0.2, 2.0);
        assert_abs_diff_eq!(layout.head.angle, direction(layout.control, end), epsilon = 1e-9);
        // the bow pulls the control point above the chord
        assert!(layout.control.y < 0.0);
    }

    #[test]
    fn circular_loop_geometry() {
        let center = DVec2::new(40.0, 25.0);
        let h = 6.0;
        let layout = Ouroboros::new(OuroborosShape::Arc, center, 0.3, h);
        let LoopPath::Arc { start, end, radius } = layout.path else {
            panic!("expected an arc, got {:?}", layout.path);
        };
        assert_abs_diff_eq!(radius, 1.5 * h / (PI / 8.0).tan(), epsilon = 1e-9);
        assert_abs_diff_eq!(start.distance(center), 1.5 * h, epsilon = 1e-9);
        assert_abs_diff_eq!(end.distance(center), 1.5 * h, epsilon = 1e-9);
        // the head sits in the gap, pointing back at the motif
        assert_abs_diff_eq!(layout.head.center.distance(center), h, epsilon = 1e-9);
        assert_abs_diff_eq!(layout.head.shaft_end.distance(end), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn circular_loop_gap_is_symmetric_about_angle() {
        let center = DVec2::ZERO;
        let layout = Ouroboros::new(OuroborosShape::Arc, center, 0.0, 4.0);
        let LoopPath::Arc { start, end, .. } = layout.path else {
            panic!("expected an arc");
        };
        // mirror image across the x axis
        assert_abs_diff_eq!(start.x, end.x, epsilon = 1e-9);
        assert_abs_diff_eq!(start.y, -end.y, epsilon = 1e-9);
    }

    #[test]
    fn curl_geometry() {
        let center = DVec2::new(-5.0, 8.0);
        let h = 4.0;
        let layout = Ouroboros::new(OuroborosShape::Curl, center, 0.0, h);
        let LoopPath::Curl { start, c1, c2, to } = layout.path else {
            panic!("expected a curl, got {:?}", layout.path);
        };
        assert_abs_diff_eq!(c1.length(), 6.0 * h, epsilon = 1e-9);
        assert_abs_diff_eq!(c2.length(), 6.0 * h, epsilon = 1e-9);
        assert_abs_diff_eq!(direction(DVec2::ZERO, -c1), PI / 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(direction(DVec2::ZERO, -c2), -PI / 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(start.distance(center), h, epsilon = 1e-9);
        assert_abs_diff_eq!(layout.head.center.distance(center), 1.5 * h, epsilon = 1e-9);
        assert_abs_diff_eq!((start + to).distance(layout.head.shaft_end), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn arrow_renders_shaft_and_head() {
        let style = Style::for_target(Target::Report);
        let variant = style.variant(6);
        let group = arrow(&style, DVec2::ZERO, DVec2::new(50.0, 0.0), &variant, 1.0);
        let text = group.to_string();
        assert_eq!(text.matches("<path").count(), 2);
        assert!(text.contains("stroke-dasharray=\"5 1\""));
        assert!(text.contains(&variant.color));
    }

    #[test]
    fn ouroboros_shape_follows_style() {
        let slides = Style::for_target(Target::Presentation);
        let paper = Style::for_target(Target::Report);
        let variant = slides.plain_arrow();
        let arc = ouroboros(&slides, DVec2::ZERO, 0.0, &variant, 1.5).to_string();
        let curl = ouroboros(&paper, DVec2::ZERO, 0.0, &variant, 1.0).to_string();
        assert!(arc.contains(" A"), "{arc}");
        assert!(!arc.contains(" c"), "{arc}");
        assert!(curl.contains(" c"), "{curl}");
    }

    #[test]
    fn polygon_path_is_closed() {
        let text = regular_polygon(DVec2::ZERO, 4, 10.0, 0.0, "red").to_string();
        assert!(text.contains("fill=\"red\""));
        assert!(text.contains('z') || text.contains('Z'));
    }
}
