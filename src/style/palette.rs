//! Colour palettes for the diagrams.

use std::f64::consts::PI;

/// Number of colours in each palette.
pub const NUM_COLORS: usize = 5;

/// Hue shift applied to the desaturated palette so it never lines up with
/// the saturated arrow colours.
const DESATURATED_HUE_SHIFT: f64 = 0.327429;

/// Convert HSV (each in `[0, 1]`, hue periodic) to RGB in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Format an RGB triple in `[0, 1]` as `#rrggbb`.
pub fn hex_color((r, g, b): (f64, f64, f64)) -> String {
    let channel = |x: f64| ((256.0 * x) as i64).clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Hue of palette entry `i`.
///
/// Steps are `2π / NUM_COLORS` in hue units, so consecutive entries land
/// far apart on the colour wheel once the hue wraps.
fn hue(i: usize) -> f64 {
    2.0 * i as f64 / NUM_COLORS as f64 * PI
}

/// Strong colours used for arrows and legends.
pub fn saturated_colors() -> Vec<String> {
    (0..NUM_COLORS)
        .map(|i| hex_color(hsv_to_rgb(hue(i), 0.80, 0.80)))
        .collect()
}

/// Muted colours for symmetry elements, at brightness `value`.
pub fn desaturated_colors(value: f64) -> Vec<String> {
    (0..NUM_COLORS)
        .map(|i| hex_color(hsv_to_rgb(hue(i) + DESATURATED_HUE_SHIFT, 0.40, value)))
        .collect()
}
