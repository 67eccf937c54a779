// render.rs - Projection of a generation into drawable points
//
// Renderers consume these; nothing here touches engine state.

use crate::cell::Cell;
use crate::grid::Generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub state: Cell,
}

/// Every cell of the generation as a point, row-major.
pub fn points(grid: &Generation) -> impl Iterator<Item = Point> + '_ {
    grid.rows_iter().enumerate().flat_map(|(x, row)| {
        row.iter()
            .enumerate()
            .map(move |(y, &state)| Point { x, y, state })
    })
}

/// Circle layout: one circle of `radius` per cell, `border` apart,
/// offset by `left` / `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub left: f32,
    pub top: f32,
    pub radius: f32,
    pub border: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self { left: 20.0, top: 20.0, radius: 4.0, border: 1.0 }
    }
}

impl Layout {
    /// Distance between neighboring circle centres.
    pub fn pitch(&self) -> f32 {
        self.radius * 2.0 + self.border
    }

    /// Centre of a point as (horizontal, vertical): columns run across, rows down.
    pub fn centre(&self, point: &Point) -> (f32, f32) {
        (
            point.y as f32 * self.pitch() + self.left,
            point.x as f32 * self.pitch() + self.top,
        )
    }

    pub fn width(&self, cols: usize) -> f32 {
        self.pitch() * cols as f32 + self.left
    }

    pub fn height(&self, rows: usize) -> f32 {
        self.pitch() * rows as f32 + self.top
    }
}

/// Colours per state, as RGB and as 256-colour ANSI background codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub ready: [u8; 3],
    pub firing: [u8; 3],
    pub refractory: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ready:      [208, 208, 208],  // white
            firing:     [0, 135, 0],      // green
            refractory: [255, 215, 0],    // yellow
        }
    }
}

impl Palette {
    pub fn rgb(&self, state: Cell) -> [u8; 3] {
        match state {
            Cell::Ready      => self.ready,
            Cell::Firing     => self.firing,
            Cell::Refractory => self.refractory,
        }
    }

    pub fn ansi(state: Cell) -> u8 {
        match state {
            Cell::Ready      => 252,
            Cell::Firing     => 28,
            Cell::Refractory => 220,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell::{Firing as F, Ready as R, Refractory as X};

    #[test]
    fn test_points_row_major() {
        let grid = Generation::from_rows(vec![vec![R, F], vec![X, R]]).unwrap();
        let points: Vec<Point> = points(&grid).collect();
        assert_eq!(points, vec![
            Point { x: 0, y: 0, state: R },
            Point { x: 0, y: 1, state: F },
            Point { x: 1, y: 0, state: X },
            Point { x: 1, y: 1, state: R },
        ]);
    }

    #[test]
    fn test_layout_positions() {
        let layout = Layout::default();
        assert_eq!(layout.pitch(), 9.0);
        assert_eq!(layout.centre(&Point { x: 0, y: 0, state: R }), (20.0, 20.0));
        assert_eq!(layout.centre(&Point { x: 2, y: 3, state: R }), (47.0, 38.0));
        assert_eq!(layout.height(10), 110.0);
        assert_eq!(layout.width(10), 110.0);
    }

    #[test]
    fn test_palette_distinct() {
        let palette = Palette::default();
        assert_ne!(palette.rgb(R), palette.rgb(F));
        assert_ne!(palette.rgb(F), palette.rgb(X));
        assert_eq!(Palette::ansi(F), 28);
    }
}
