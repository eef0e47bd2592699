//! Layout configuration for the frieze and wallpaper diagrams.

use crate::style::Style;
use crate::symmetry::FRIEZE_MIRROR;

/// Layout of a one-dimensional frieze diagram.
#[derive(Debug, Clone)]
pub struct FriezeLayout {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Number of unit cells along the axis.
    pub unitcells: usize,
    /// Length of one unit cell.
    pub cell_length: f64,
    /// Distance from the canvas edge to the first tick.
    pub margin: f64,
    /// Height of the lattice ticks.
    pub tick_height: f64,
    /// Circumradius of motifs.
    pub obj_radius: f64,
    /// Distance from a lattice tick to the first mirror tick.
    pub mirror_offset: f64,
}

impl FriezeLayout {
    /// Lay out a frieze for a style, leaving room for a legend if it has one.
    pub fn for_style(style: &Style) -> Self {
        let unitcells = 7;
        let cell_length = (style.width - style.legend_reserve()) / (unitcells as f64 + 1.0);
        Self {
            width: style.width,
            height: style.width / 4.0,
            unitcells,
            cell_length,
            margin: cell_length / 2.0,
            tick_height: 40.0,
            obj_radius: 10.0,
            mirror_offset: FRIEZE_MIRROR * cell_length,
        }
    }

    /// Vertical position of the axis.
    pub fn axis_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Horizontal position of lattice tick `i`.
    pub fn tick_x(&self, i: usize) -> f64 {
        self.margin + i as f64 * self.cell_length
    }

    /// Right end of the axis.
    pub fn axis_end(&self) -> f64 {
        self.tick_x(self.unitcells)
    }

    /// Position `x` in cell lengths from the first tick.
    pub fn fraction(&self, x: f64) -> f64 {
        (x - self.margin) / self.cell_length
    }
}

/// Layout of a two-dimensional wallpaper diagram.
#[derive(Debug, Clone)]
pub struct WallpaperLayout {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Left and right margin.
    pub x_margin: f64,
    /// Top and bottom margin.
    pub y_margin: f64,
    /// Number of unit cells in each direction.
    pub unitcells: usize,
    /// Circumradius of motifs.
    pub obj_radius: f64,
    /// Horizontal space kept free on the right for a legend.
    pub legend_reserve: f64,
}

impl WallpaperLayout {
    /// Three-by-three cells with margins of 1/16 of the canvas.
    pub fn for_style(style: &Style) -> Self {
        let height = style.width * 4.0 / 5.0;
        Self {
            width: style.width,
            height,
            x_margin: style.width / 16.0,
            y_margin: height / 16.0,
            unitcells: 3,
            obj_radius: 12.0,
            legend_reserve: 0.0,
        }
    }

    /// Like [`WallpaperLayout::for_style`] with room for a legend on the right.
    pub fn with_legend(style: &Style) -> Self {
        Self {
            legend_reserve: style.legend_width + style.legend_margin,
            ..Self::for_style(style)
        }
    }

    /// Fixed 30 unit margins and larger motifs.
    pub fn fixed_margins(style: &Style) -> Self {
        Self {
            x_margin: 30.0,
            y_margin: 30.0,
            obj_radius: 20.0,
            ..Self::for_style(style)
        }
    }

    /// A single cell with wide margins.
    pub fn single_cell(style: &Style) -> Self {
        let base = Self::for_style(style);
        Self {
            x_margin: base.width / 10.0,
            y_margin: base.height / 10.0,
            unitcells: 1,
            obj_radius: 20.0,
            ..base
        }
    }

    /// Cell edge along x.
    pub fn a_len(&self) -> f64 {
        (self.width - 2.0 * self.x_margin - self.legend_reserve) / self.unitcells as f64
    }

    /// Cell edge along y.
    pub fn b_len(&self) -> f64 {
        (self.height - 2.0 * self.y_margin) / self.unitcells as f64
    }

    /// Right edge of the lattice.
    pub fn right(&self) -> f64 {
        self.width - self.x_margin - self.legend_reserve
    }

    /// Bottom edge of the lattice.
    pub fn bottom(&self) -> f64 {
        self.height - self.y_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Target;
    use approx::assert_relative_eq;

    #[test]
    fn frieze_fills_canvas_without_legend() {
        let layout = FriezeLayout::for_style(&Style::for_target(Target::Report));
        assert_relative_eq!(layout.axis_end(), layout.width - layout.margin);
        assert_eq!(layout.height, 125.0);
    }

    #[test]
    fn frieze_leaves_room_for_legend() {
        let style = Style::for_target(Target::Presentation);
        let layout = FriezeLayout::for_style(&style);
        assert_relative_eq!(layout.cell_length, (800.0 - 180.0) / 8.0);
        assert!(layout.axis_end() < style.width - style.legend_width);
    }

    #[test]
    fn frieze_fraction_counts_cells_from_first_tick() {
        let layout = FriezeLayout::for_style(&Style::for_target(Target::Presentation));
        assert_relative_eq!(layout.fraction(layout.tick_x(3)), 3.0);
        let mirror = layout.tick_x(1) + layout.mirror_offset;
        assert_relative_eq!(layout.fraction(mirror), 1.0 + FRIEZE_MIRROR);
    }

    #[test]
    fn wallpaper_cells_span_lattice() {
        for layout in [
            WallpaperLayout::for_style(&Style::for_target(Target::Presentation)),
            WallpaperLayout::with_legend(&Style::for_target(Target::Report)),
        ] {
            let span = layout.x_margin + layout.unitcells as f64 * layout.a_len();
            assert_relative_eq!(span, layout.right());
            let span = layout.y_margin + layout.unitcells as f64 * layout.b_len();
            assert_relative_eq!(span, layout.bottom());
        }
    }

    #[test]
    fn legend_reserve_is_opt_in() {
        let style = Style::for_target(Target::Report);
        assert_eq!(WallpaperLayout::for_style(&style).legend_reserve, 0.0);
        let layout = WallpaperLayout::with_legend(&style);
        assert_eq!(layout.legend_reserve, 180.0);
        assert_relative_eq!(layout.a_len(), (500.0 - 2.0 * 500.0 / 16.0 - 180.0) / 3.0);
    }

    #[test]
    fn fixed_margin_layout() {
        let layout = WallpaperLayout::fixed_margins(&Style::for_target(Target::Presentation));
        assert_eq!(layout.x_margin, 30.0);
        assert_eq!(layout.obj_radius, 20.0);
        assert_relative_eq!(layout.a_len(), (800.0 - 60.0) / 3.0);
    }
}
