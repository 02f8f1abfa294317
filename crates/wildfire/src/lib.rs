//! Wind-driven forest fire cellular automaton.
//!
//! The grid is square and toroidal. Each step reads the whole previous
//! generation and builds a fresh one: empty cells regrow, trees catch fire
//! from burning neighbours with a wind- and humidity-adjusted chance, and
//! burning cells burn out.

pub mod api;
pub mod cell;
pub mod error;
pub mod params;
pub mod rules;
pub mod universe;
pub mod wind;

use api::Neighborhood;
use cell::CellState;
use error::GridError;
use rand::Rng;
use rules::StepContext;

pub use params::{SimParams, SpreadModel, DEFAULT_GRID_SIZE, INITIAL_TREE_PROBABILITY};
pub use universe::Universe;

/// Per-state cell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Census {
    pub empty: usize,
    pub tree: usize,
    pub burning: usize,
}

/// Square `size x size` grid of cell states, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<CellState>,
    /// Steps applied since the grid was created.
    pub generation: u64,
}

impl Grid {
    /// All-empty grid.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        let area = cell_count(size).ok_or(GridError::InvalidState { size, actual: 0 })?;
        Ok(Self {
            size,
            cells: vec![CellState::Empty; area],
            generation: 0,
        })
    }

    /// # Errors
    ///
    /// `InvalidState` if `cells.len() != size * size`.
    pub fn from_cells(size: usize, cells: Vec<CellState>) -> Result<Self, GridError> {
        let grid = Self {
            size,
            cells,
            generation: 0,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Build a grid from the byte encoding produced by [`Grid::to_bytes`].
    ///
    /// # Errors
    ///
    /// `InvalidState` on a length mismatch, `UnknownCellValue` on any byte
    /// that is not a cell state.
    pub fn from_bytes(size: usize, bytes: &[u8]) -> Result<Self, GridError> {
        let cells = bytes
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                CellState::try_from(value).map_err(|_| GridError::UnknownCellValue { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(size, cells)
    }

    /// # Errors
    ///
    /// `InvalidState` if the cell buffer does not hold `size * size` cells.
    pub fn validate(&self) -> Result<(), GridError> {
        if cell_count(self.size) == Some(self.cells.len()) {
            Ok(())
        } else {
            Err(GridError::InvalidState {
                size: self.size,
                actual: self.cells.len(),
            })
        }
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.index(row, col).and_then(|i| self.cells.get(i)).copied()
    }

    /// Out-of-bounds writes are no-ops.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(cell) = self.index(row, col).and_then(|i| self.cells.get_mut(i)) {
            *cell = state;
        }
    }

    /// Set one cell on fire whatever it held. Out-of-bounds is a no-op.
    pub fn ignite(&mut self, row: usize, col: usize) {
        if self.in_bounds(row, col) {
            tracing::trace!(row, col, "ignite");
        }
        self.set(row, col, CellState::Burning);
    }

    #[must_use]
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell {
                CellState::Empty => census.empty += 1,
                CellState::Tree => census.tree += 1,
                CellState::Burning => census.burning += 1,
            }
        }
        census
    }

    /// Cells as their `u8` discriminants, row-major.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| u8::from(c)).collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        row.checked_mul(self.size)?.checked_add(col)
    }
}

/// `size * size`, or `None` when it does not fit in `usize`.
fn cell_count(size: usize) -> Option<usize> {
    size.checked_mul(size)
}

/// Random grid with each cell a tree with probability `tree_probability`.
/// One draw per cell, row-major. Nothing burns at the start.
///
/// # Errors
///
/// `InvalidState` if `size * size` overflows `usize`.
pub fn create_initial_grid<R: Rng + ?Sized>(
    size: usize,
    tree_probability: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let area = cell_count(size).ok_or(GridError::InvalidState { size, actual: 0 })?;
    let cells = (0..area)
        .map(|_| {
            if rng.gen::<f64>() < tree_probability {
                CellState::Tree
            } else {
                CellState::Empty
            }
        })
        .collect();
    Ok(Grid {
        size,
        cells,
        generation: 0,
    })
}

/// Advance the forest by one step.
///
/// Reads only `grid` and returns a new grid of the same size. Random draws
/// are taken in row-major cell order, so a seeded `rng` makes the result
/// reproducible.
///
/// # Errors
///
/// `InvalidState` if the grid's cell buffer does not match its size.
pub fn step<R: Rng + ?Sized>(
    grid: &Grid,
    params: &SimParams,
    rng: &mut R,
) -> Result<Grid, GridError> {
    grid.validate()?;
    let ctx = StepContext::new(params);

    let mut cells = Vec::with_capacity(grid.cells.len());
    for row in 0..grid.size {
        for col in 0..grid.size {
            let view = Neighborhood::new(grid, row, col);
            cells.push(rules::next_state(&view, &ctx, rng));
        }
    }

    let next = Grid {
        size: grid.size,
        cells,
        generation: grid.generation.wrapping_add(1),
    };
    tracing::debug!(generation = next.generation, census = ?next.census(), "step");
    Ok(next)
}

/// Rows are split across the rayon pool. Each row draws from its own
/// `ChaCha8Rng` stream keyed by one `u64` taken from `rng`, so the result is
/// reproducible for a seed and independent of thread count. It does not
/// reproduce the draws of [`step`].
///
/// # Errors
///
/// `InvalidState` if the grid's cell buffer does not match its size.
#[cfg(feature = "parallel")]
pub fn step_parallel<R: Rng + ?Sized>(
    grid: &Grid,
    params: &SimParams,
    rng: &mut R,
) -> Result<Grid, GridError> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rayon::prelude::*;

    grid.validate()?;
    let ctx = StepContext::new(params);
    let key: u64 = rng.gen();

    let mut cells = vec![CellState::Empty; grid.cells.len()];
    if grid.size > 0 {
        cells
            .par_chunks_mut(grid.size)
            .enumerate()
            .for_each(|(row, out)| {
                let mut row_rng = ChaCha8Rng::seed_from_u64(key);
                row_rng.set_stream(row as u64);
                for (col, cell) in out.iter_mut().enumerate() {
                    let view = Neighborhood::new(grid, row, col);
                    *cell = rules::next_state(&view, &ctx, &mut row_rng);
                }
            });
    }

    let next = Grid {
        size: grid.size,
        cells,
        generation: grid.generation.wrapping_add(1),
    };
    tracing::debug!(generation = next.generation, census = ?next.census(), "parallel step");
    Ok(next)
}

/// Copy of `grid` with one cell set on fire. Out-of-bounds is a no-op.
#[must_use]
pub fn ignite(grid: &Grid, row: usize, col: usize) -> Grid {
    let mut next = grid.clone();
    next.ignite(row, col);
    next
}
