// patterns.rs - Named seed patterns, placed around the grid centre

use crate::cell::Cell::{self, Firing as F, Refractory as X};
use crate::error::EngineError;
use crate::grid::Generation;

pub struct Pattern {
    pub name: &'static str,
    /// (row offset, column offset, state) relative to the grid centre
    pub cells: &'static [(isize, isize, Cell)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Plus",
        cells: &[(-1, 0, F), (0, -1, F), (0, 1, F), (1, 0, F)],
    },
    Pattern {
        // Firing pair with its refractory wake, travels up one row per tick
        name: "Spaceship",
        cells: &[(0, 0, F), (0, 1, F), (1, 0, X), (1, 1, X)],
    },
    Pattern {
        name: "Spaceship (east)",
        cells: &[(0, 0, F), (1, 0, F), (0, -1, X), (1, -1, X)],
    },
    Pattern {
        // Two ships flying apart vertically
        name: "Spaceship pair",
        cells: &[
            (-2, -3, F), (-2, -2, F), (-1, -3, X), (-1, -2, X),
            ( 2,  2, F), ( 2,  3, F), ( 1,  2, X), ( 1,  3, X),
        ],
    },
    Pattern {
        name: "Square",
        cells: &[(0, 0, F), (0, 1, F), (1, 0, F), (1, 1, F)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// A `rows x cols` generation, all ready except the pattern's cells.
/// Cells that land outside the grid are dropped.
pub fn apply_pattern(rows: usize, cols: usize, pattern: &Pattern) -> Result<Generation, EngineError> {
    let mut grid = Generation::new(rows, cols)?;
    let (centre_x, centre_y) = (rows / 2, cols / 2);

    for &(dx, dy, cell) in pattern.cells {
        let target = centre_x
            .checked_add_signed(dx)
            .zip(centre_y.checked_add_signed(dy))
            .filter(|&(x, y)| x < rows && y < cols);

        match target {
            Some((x, y)) => grid.set(x, y, cell),
            None => log::debug!(
                "pattern '{}': offset ({}, {}) falls outside {}x{} grid",
                pattern.name, dx, dy, rows, cols
            ),
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BrainEngine;
    use crate::grid::Census;
    use crate::render;

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("plus").map(|p| p.name), Some("Plus"));
        assert!(find("glider gun").is_none());
    }

    #[test]
    fn test_plus_is_centred() {
        let grid = apply_pattern(5, 5, find("Plus").unwrap()).unwrap();
        assert_eq!(grid[1][2], F);
        assert_eq!(grid[2][1], F);
        assert_eq!(grid[2][3], F);
        assert_eq!(grid[3][2], F);
        assert_eq!(grid.census(), Census { ready: 21, firing: 4, refractory: 0 });
    }

    #[test]
    fn test_clipped_on_small_grid() {
        let grid = apply_pattern(1, 1, find("Square").unwrap()).unwrap();
        assert_eq!(grid[0][0], F);
        assert_eq!(grid.census().total(), 1);
    }

    #[test]
    fn test_spaceship_travels_up() {
        let mut engine = BrainEngine::default();
        engine.load(apply_pattern(12, 12, find("Spaceship").unwrap()).unwrap());

        for tick in 1..=3 {
            let grid = engine.advance().unwrap();
            let row = 6 - tick;
            assert_eq!(grid[row][6], F, "tick {}", tick);
            assert_eq!(grid[row][7], F, "tick {}", tick);
            assert_eq!(grid[row + 1][6], X, "tick {}", tick);
            assert_eq!(grid[row + 1][7], X, "tick {}", tick);
            assert_eq!(grid.census().firing, 2);
            assert_eq!(grid.census().refractory, 2);
        }
    }

    fn firing_after(pattern: &str, ticks: usize) -> Vec<(usize, usize)> {
        let mut engine = BrainEngine::default();
        engine.load(apply_pattern(20, 20, find(pattern).unwrap()).unwrap());
        for _ in 0..ticks {
            engine.advance().unwrap();
        }
        render::points(engine.current_generation().unwrap())
            .filter(|point| point.state == F)
            .map(|point| (point.x, point.y))
            .collect()
    }

    #[test]
    fn test_spaceship_travels_east() {
        assert_eq!(firing_after("Spaceship (east)", 0), vec![(10, 10), (11, 10)]);
        assert_eq!(firing_after("Spaceship (east)", 1), vec![(10, 11), (11, 11)]);
        assert_eq!(firing_after("Spaceship (east)", 3), vec![(10, 13), (11, 13)]);
    }

    #[test]
    fn test_spaceship_pair_flies_apart() {
        assert_eq!(
            firing_after("Spaceship pair", 0),
            vec![(8, 7), (8, 8), (12, 12), (12, 13)]
        );
        assert_eq!(
            firing_after("Spaceship pair", 3),
            vec![(5, 7), (5, 8), (15, 12), (15, 13)]
        );
    }

    #[test]
    fn test_every_pattern_fits_default_grid() {
        for pattern in PATTERNS {
            let grid = apply_pattern(30, 60, pattern).unwrap();
            let census = grid.census();
            assert_eq!(census.firing + census.refractory, pattern.cells.len(), "{}", pattern.name);
        }
    }
}
