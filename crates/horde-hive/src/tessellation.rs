//! Hex grid geometry.
//!
//! Tiles sit in an offset grid of flat-topped hexagons: columns are spaced
//! three quarters of a hex width apart, rows one hex height apart, and odd
//! rows shift right by three eighths of a width. The grid is centred
//! horizontally and starts half a row from the top.

use horde_types::{Vec2, Viewport};

/// Grid dimensions derived from a viewport and a tile radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Hex width, `2r`.
    pub hex_width: f64,
    /// Hex height, `r * sqrt(3)`.
    pub hex_height: f64,
    /// Center of the tile at row 0, column 0.
    pub origin: Vec2,
}

impl GridLayout {
    /// Fit as many tiles of radius `radius` into `viewport` as possible.
    pub fn fit(viewport: Viewport, radius: f64) -> Self {
        let hex_width = radius * 2.0;
        let hex_height = radius * 3.0_f64.sqrt();
        let col_step = hex_width * 0.75;
        let cols = floor_count(viewport.width / col_step);
        let rows = floor_count(viewport.height / hex_height).saturating_sub(1);
        let origin = Vec2::new(
            (cols as f64).mul_add(-col_step, viewport.width) / 2.0,
            hex_height / 2.0,
        );
        Self { cols, rows, hex_width, hex_height, origin }
    }

    /// Total number of tiles.
    pub const fn len(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// Whether the grid has no tiles.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Center of the tile at `row`, `col`.
    pub fn center(&self, row: usize, col: usize) -> Vec2 {
        let shift = (row % 2) as f64 * self.hex_width * 0.375;
        Vec2::new(
            (col as f64).mul_add(self.hex_width * 0.75, self.origin.x) + shift,
            (row as f64).mul_add(self.hex_height, self.origin.y),
        )
    }

    /// Every `(row, col, center)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Vec2)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col, self.center(row, col))))
    }
}

/// Whole number of cells fitting in `extent`; zero for negative or
/// non-finite input.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn floor_count(extent: f64) -> usize {
    if extent.is_finite() && extent > 0.0 {
        extent.floor() as usize
    } else {
        0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fits_classic_canvas() {
        // 600 / 37.5 = 16 columns; 300 / 43.30 = 6.9 -> 6 - 1 = 5 rows.
        let layout = GridLayout::fit(Viewport::new(600.0, 300.0), 25.0);
        assert_eq!(layout.cols, 16);
        assert_eq!(layout.rows, 5);
        assert_eq!(layout.len(), 80);
        assert!(approx(layout.origin.x, 0.0));
        assert!(approx(layout.origin.y, 25.0 * 3.0_f64.sqrt() / 2.0));
    }

    #[test]
    fn grid_is_centred_horizontally() {
        let layout = GridLayout::fit(Viewport::new(620.0, 300.0), 25.0);
        assert_eq!(layout.cols, 16);
        assert!(approx(layout.origin.x, 10.0));
    }

    #[test]
    fn odd_rows_shift_right() {
        let layout = GridLayout::fit(Viewport::new(600.0, 300.0), 25.0);
        let even = layout.center(0, 2);
        let odd = layout.center(1, 2);
        assert!(approx(odd.x - even.x, 18.75));
        assert!(approx(odd.y - even.y, layout.hex_height));
    }

    #[test]
    fn tiny_viewport_has_no_rows() {
        let layout = GridLayout::fit(Viewport::new(600.0, 50.0), 25.0);
        assert_eq!(layout.rows, 0);
        assert!(layout.is_empty());
        assert_eq!(layout.cells().count(), 0);
    }

    #[test]
    fn cells_are_row_major() {
        let layout = GridLayout::fit(Viewport::new(150.0, 200.0), 25.0);
        let order: Vec<(usize, usize)> = layout.cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order.first(), Some(&(0, 0)));
        assert_eq!(order.get(1), Some(&(0, 1)));
        assert_eq!(order.len(), layout.len());
    }
}
