// grid.rs - Generation: an immutable rows x cols snapshot of cell states

use std::ops::Index;

use rand::Rng;

use crate::cell::Cell;
use crate::error::EngineError;

/// Moore neighborhood offsets, (row, col), centre excluded.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// One generation of the grid. Row `x` in `0..rows`, column `y` in `0..cols`,
/// stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generation {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Count of cells in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    pub ready: usize,
    pub firing: usize,
    pub refractory: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.ready + self.firing + self.refractory
    }
}

fn checked_size(rows: usize, cols: usize) -> Result<usize, EngineError> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::InvalidDimensions { rows, cols });
    }
    // A Vec cannot hold more than isize::MAX bytes
    rows.checked_mul(cols)
        .filter(|&size| size <= isize::MAX as usize)
        .ok_or(EngineError::InvalidDimensions { rows, cols })
}

impl Generation {
    /// A grid with every cell `Ready`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let size = checked_size(rows, cols)?;
        Ok(Self { rows, cols, cells: vec![Cell::Ready; size] })
    }

    /// A grid where each cell is drawn independently and uniformly from the three states.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, EngineError> {
        let size = checked_size(rows, cols)?;
        let cells = (0..size).map(|_| rng.random::<Cell>()).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Build from nested rows. Rows must be non-empty and all the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        checked_size(row_count, cols)?;

        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(EngineError::InvalidDimensions { rows: row_count, cols: row.len() });
            }
            cells.extend(row);
        }
        Ok(Self { rows: row_count, cols, cells })
    }

    /// Build from the raw 0/1/2 encoding, rejecting any other value with its coordinates.
    pub fn from_raw<R: AsRef<[u8]>>(raw: &[R]) -> Result<Self, EngineError> {
        let rows = raw
            .iter()
            .enumerate()
            .map(|(x, row)| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(y, &value)| {
                        Cell::from_raw(value).ok_or(EngineError::InvalidCellState { x, y, value })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `[x][y]`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.rows && y < self.cols {
            Some(self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows_iter().map(<[Cell]>::to_vec).collect()
    }

    pub fn to_raw(&self) -> Vec<Vec<u8>> {
        self.rows_iter()
            .map(|row| row.iter().map(|cell| cell.as_raw()).collect())
            .collect()
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell {
                Cell::Ready      => census.ready += 1,
                Cell::Firing     => census.firing += 1,
                Cell::Refractory => census.refractory += 1,
            }
        }
        census
    }

    /// Number of firing cells in the Moore neighborhood of `[x][y]`.
    /// Coordinates outside the grid are absent: no wrapping, no padding.
    pub fn firing_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBORS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.get(nx, ny) == Some(Cell::Firing) {
                count += 1;
            }
        }
        count
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        x * self.cols + y
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index_of(x, y);
        self.cells[idx] = cell;
    }

    pub(crate) fn same_shape(&self, other: &Generation) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}

impl Index<usize> for Generation {
    type Output = [Cell];

    /// Row `x`, so that `generation[x][y]` addresses a cell.
    fn index(&self, x: usize) -> &[Cell] {
        let start = x * self.cols;
        &self.cells[start..start + self.cols]
    }
}

impl Index<(usize, usize)> for Generation {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(y < self.cols, "column {} out of range for {} columns", y, self.cols);
        &self.cells[self.index_of(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell::{Firing as F, Ready as R, Refractory as X};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_is_all_ready() {
        let grid = Generation::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.census(), Census { ready: 12, firing: 0, refractory: 0 });
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Generation::new(0, 5),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Generation::new(5, 0),
            Err(EngineError::InvalidDimensions { rows: 5, cols: 0 })
        );
        assert!(Generation::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(
            Generation::new(rows, 1),
            Err(EngineError::InvalidDimensions { rows, cols: 1 })
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Generation::random(rows, 1, &mut rng),
            Err(EngineError::InvalidDimensions { rows, cols: 1 })
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert!(Generation::from_rows(vec![]).is_err());
        assert!(Generation::from_rows(vec![vec![]]).is_err());
        assert_eq!(
            Generation::from_rows(vec![vec![R, R], vec![R]]),
            Err(EngineError::InvalidDimensions { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn test_from_raw_reports_bad_coordinates() {
        let raw = vec![vec![0u8, 1, 2], vec![2, 7, 0]];
        assert_eq!(
            Generation::from_raw(&raw[..]),
            Err(EngineError::InvalidCellState { x: 1, y: 1, value: 7 })
        );

        let ok = Generation::from_raw(&[vec![0u8, 1, 2]][..]).unwrap();
        assert_eq!(ok.to_rows(), vec![vec![R, F, X]]);
        assert_eq!(ok.to_raw(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_indexing() {
        let grid = Generation::from_rows(vec![vec![R, F], vec![X, R], vec![F, F]]).unwrap();
        assert_eq!(grid[0][1], F);
        assert_eq!(grid[1][0], X);
        assert_eq!(grid[(2, 1)], F);
        assert_eq!(grid.get(2, 0), Some(F));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.rows_iter().count(), 3);
    }

    #[test]
    fn test_firing_neighbors_interior() {
        // Plus of firing cells around the centre
        let grid = Generation::from_rows(vec![
            vec![R, F, R],
            vec![F, R, F],
            vec![R, F, R],
        ]).unwrap();

        assert_eq!(grid.firing_neighbors(1, 1), 4);
        assert_eq!(grid.firing_neighbors(0, 0), 2);
        assert_eq!(grid.firing_neighbors(0, 2), 2);
        assert_eq!(grid.firing_neighbors(2, 0), 2);
        assert_eq!(grid.firing_neighbors(2, 2), 2);
        // Edge cell: the two diagonal firing cells below it
        assert_eq!(grid.firing_neighbors(0, 1), 2);
    }

    #[test]
    fn test_firing_neighbors_no_wrap() {
        let mut grid = Generation::new(5, 5).unwrap();
        // Opposite edges of [0][0]; a toroidal grid would count these
        grid.set(4, 4, F);
        grid.set(0, 4, F);
        grid.set(4, 0, F);
        assert_eq!(grid.firing_neighbors(0, 0), 0);

        grid.set(0, 1, F);
        grid.set(1, 0, F);
        grid.set(1, 1, F);
        assert_eq!(grid.firing_neighbors(0, 0), 3);
    }

    #[test]
    fn test_refractory_not_counted() {
        let grid = Generation::from_rows(vec![
            vec![X, X, X],
            vec![X, R, X],
            vec![X, X, X],
        ]).unwrap();
        assert_eq!(grid.firing_neighbors(1, 1), 0);
    }
}
