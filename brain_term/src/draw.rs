// draw.rs - ANSI frame for one generation: two coloured spaces per cell

use brians_brain::render::Palette;
use brians_brain::{Cell, Generation};

pub const CLEAR_SCREEN: &str = "\u{1b}[2J";

fn cell_block(cell: Cell) -> String {
    format!("\u{1b}[48;5;{}m  \u{1b}[0m", Palette::ansi(cell))
}

/// Draws over the previous frame: moves the cursor back to the top left
/// of the grid, then prints every row.
pub struct Frame {
    blocks: [String; 3],   // indexed by Cell::as_raw
    buf: String,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            blocks: Cell::ALL.map(cell_block),
            buf: String::new(),
        }
    }
}

impl Frame {
    pub fn render(&mut self, grid: &Generation) -> &str {
        self.buf.clear();
        self.buf.push_str(&format!("\u{1b}[{}D", grid.rows() * (grid.cols() + 1)));
        self.buf.push_str(&format!("\u{1b}[{}A", grid.rows()));
        for row in grid.rows_iter() {
            for cell in row {
                self.buf.push_str(&self.blocks[cell.as_raw() as usize]);
            }
            self.buf.push('\n');
        }
        &self.buf
    }
}
