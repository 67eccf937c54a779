// engine.rs - Double-buffered Brian's Brain engine

use rand::Rng;

use crate::error::EngineError;
use crate::grid::Generation;

#[derive(Debug, Clone)]
struct Buffers {
    current: Generation,
    next: Generation,    // same shape as current, overwritten every advance
}

/// Owns the current generation and computes successors.
///
/// `BrainEngine::default()` is uninitialized: every operation except
/// [`initialize`](Self::initialize) and [`load`](Self::load) reports
/// [`EngineError::NotInitialized`] until one of them runs.
#[derive(Debug, Clone, Default)]
pub struct BrainEngine {
    buffers: Option<Buffers>,
    generation: u64,
    frozen: bool,
}

/// Write the successor of `current` into `next`.
/// Returns whether any cell changed state. `next` must have the same shape
/// as `current`; otherwise it is left untouched and `InvalidDimensions`
/// reports its shape.
pub fn step(current: &Generation, next: &mut Generation) -> Result<bool, EngineError> {
    if !current.same_shape(next) {
        return Err(EngineError::InvalidDimensions { rows: next.rows(), cols: next.cols() });
    }

    let mut changed = false;
    for x in 0..current.rows() {
        for y in 0..current.cols() {
            let cell = current[x][y];
            let successor = cell.next(current.firing_neighbors(x, y));
            changed |= successor != cell;
            next.set(x, y, successor);
        }
    }
    Ok(changed)
}

impl BrainEngine {
    /// Initialized engine with a uniformly random `rows x cols` grid.
    pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, EngineError> {
        let mut engine = Self::default();
        engine.initialize(rows, cols, rng)?;
        Ok(engine)
    }

    /// Replace any existing state with a fresh random grid.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rows: usize, cols: usize, rng: &mut R) -> Result<(), EngineError> {
        let grid = Generation::random(rows, cols, rng)?;
        self.load(grid);
        Ok(())
    }

    /// Replace any existing state with the given generation.
    pub fn load(&mut self, grid: Generation) {
        let next = grid.clone();
        self.buffers = Some(Buffers { current: grid, next });
        self.generation = 0;
        self.frozen = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.buffers.is_some()
    }

    /// `(rows, cols)` of the grid.
    pub fn dimensions(&self) -> Result<(usize, usize), EngineError> {
        let current = self.current_generation()?;
        Ok((current.rows(), current.cols()))
    }

    /// Read-only view of the current generation.
    pub fn current_generation(&self) -> Result<&Generation, EngineError> {
        self.buffers
            .as_ref()
            .map(|buffers| &buffers.current)
            .ok_or(EngineError::NotInitialized)
    }

    /// Owned copy of the current generation.
    pub fn snapshot(&self) -> Result<Generation, EngineError> {
        self.current_generation().cloned()
    }

    /// Advance one generation and return the new current generation.
    ///
    /// The successor is built in the spare buffer from the untouched current
    /// grid, then the buffers are swapped.
    pub fn advance(&mut self) -> Result<&Generation, EngineError> {
        let buffers = self.buffers.as_mut().ok_or(EngineError::NotInitialized)?;

        let changed = step(&buffers.current, &mut buffers.next)?;
        std::mem::swap(&mut buffers.current, &mut buffers.next);

        self.generation += 1;
        self.frozen = !changed;
        Ok(&buffers.current)
    }

    /// Advances since the last initialize or load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when the last advance left every cell unchanged.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}
