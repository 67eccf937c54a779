// cell.rs - The three cell states of Brian's Brain

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Ready,
    Firing,
    Refractory,
}

impl Cell {
    pub const ALL: [Cell; 3] = [Cell::Ready, Cell::Firing, Cell::Refractory];

    /// Next state of this cell given how many of its neighbors are firing.
    pub fn next(self, firing_neighbors: u8) -> Cell {
        match self {
            Cell::Ready if firing_neighbors == 2 => Cell::Firing,
            Cell::Ready      => Cell::Ready,
            Cell::Firing     => Cell::Refractory,
            Cell::Refractory => Cell::Ready,
        }
    }

    /// Raw encoding used by flat exports: 0 ready, 1 firing, 2 refractory.
    pub fn as_raw(self) -> u8 {
        match self {
            Cell::Ready      => 0,
            Cell::Firing     => 1,
            Cell::Refractory => 2,
        }
    }

    pub fn from_raw(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Ready),
            1 => Some(Cell::Firing),
            2 => Some(Cell::Refractory),
            _ => None,
        }
    }
}

// Uniform over all three states, so `rng.random::<Cell>()` seeds a grid.
impl Distribution<Cell> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::ALL[rng.random_range(0..Cell::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ready_fires_only_on_exactly_two() {
        for count in 0..=8 {
            let expected = if count == 2 { Cell::Firing } else { Cell::Ready };
            assert_eq!(Cell::Ready.next(count), expected, "count {}", count);
        }
    }

    #[test]
    fn test_firing_and_refractory_ignore_neighbors() {
        for count in 0..=8 {
            assert_eq!(Cell::Firing.next(count), Cell::Refractory);
            assert_eq!(Cell::Refractory.next(count), Cell::Ready);
        }
    }

    #[test]
    fn test_raw_encoding() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_raw(cell.as_raw()), Some(cell));
        }
        assert_eq!(Cell::from_raw(3), None);
        assert_eq!(Cell::from_raw(255), None);
    }

    #[test]
    fn test_random_cells_cover_all_states() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let cell: Cell = rng.random();
            seen[cell.as_raw() as usize] += 1;
        }
        // Roughly a third each
        for count in seen {
            assert!(count > 800 && count < 1200, "skewed distribution: {:?}", seen);
        }
    }
}
