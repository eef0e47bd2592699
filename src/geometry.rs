//! Plane geometry helpers shared by every diagram.
//!
//! All coordinates are SVG user units with the y axis pointing down.

use std::f64::consts::PI;

use glam::DVec2;

/// Convert polar coordinates to a cartesian offset.
pub fn to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::from_angle(theta) * r
}

/// Angle of the direction from `from` to `to`.
pub fn direction(from: DVec2, to: DVec2) -> f64 {
    (to - from).to_angle()
}

/// Vertices of a regular `n`-gon around `center`.
///
/// The first vertex sits at angle `theta_0`; the rest follow at equal
/// angular steps of `2π / n`.
pub fn regular_polygon_vertices(center: DVec2, n: usize, radius: f64, theta_0: f64) -> Vec<DVec2> {
    (0..n)
        .map(|i| center + to_cartesian(radius, theta_0 + 2.0 * PI * (i as f64 / n as f64)))
        .collect()
}

/// Control point for a quadratic arc from `start` to `end`.
///
/// The chord midpoint is pushed along the chord normal `(Δy, -Δx)` by
/// `bow` chord lengths. `flip` bends the arc to the other side.
pub fn bow_control_point(start: DVec2, end: DVec2, bow: f64, flip: bool) -> DVec2 {
    let sign = if flip { -1.0 } else { 1.0 };
    start.lerp(end, 0.5) - (end - start).perp() * (bow * sign)
}
