//! `wasm-bindgen` boundary for a browser front end.
//!
//! The front end owns the timer and the canvas. It calls `tick` on its own
//! cadence, maps clicks to `ignite`, and reads the byte buffer behind
//! `cells_ptr` to paint the three-colour raster.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

use crate::cell::CellState;
use crate::error::GridError;
use crate::params::{SimParams, SpreadModel, INITIAL_TREE_PROBABILITY};
use crate::{create_initial_grid, step, Grid};

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    params: SimParams,
    rng: ChaCha8Rng,
    /// Byte mirror of `grid.cells`, refreshed after every mutation.
    buffer: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// Seeded forest of `size x size` cells, 30% trees, default parameters.
    ///
    /// # Errors
    ///
    /// Rejects a `size` whose square does not fit in linear memory indices.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize, seed: u64) -> Result<Universe, JsValue> {
        Self::try_new(size, seed).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the forest with a fresh random one. Parameters are kept.
    pub fn reseed(&mut self, tree_probability: f64) {
        match create_initial_grid(self.grid.size, tree_probability, &mut self.rng) {
            Ok(grid) => {
                self.grid = grid;
                self.sync_buffer();
            }
            Err(err) => tracing::error!(%err, "reseed rejected, grid left unchanged"),
        }
    }

    pub fn tick(&mut self) {
        match step(&self.grid, &self.params, &mut self.rng) {
            Ok(next) => {
                self.grid = next;
                self.sync_buffer();
            }
            Err(err) => tracing::error!(%err, "step rejected, grid left unchanged"),
        }
    }

    /// Out-of-bounds clicks are ignored.
    pub fn ignite(&mut self, row: usize, col: usize) {
        self.grid.ignite(row, col);
        self.sync_buffer();
    }

    /// Ignite then advance one step, the way a click behaves in the desktop UI.
    pub fn ignite_and_tick(&mut self, row: usize, col: usize) {
        self.grid.ignite(row, col);
        self.tick();
    }

    /// Write a raw state byte. Unknown bytes are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, state: u8) {
        match CellState::try_from(state) {
            Ok(state) => {
                self.grid.set(row, col, state);
                self.sync_buffer();
            }
            Err(err) => tracing::warn!(row, col, %err, "set_cell ignored"),
        }
    }

    pub fn set_growth_probability(&mut self, value: f64) {
        self.params.growth_probability = value;
    }

    pub fn set_wind_direction(&mut self, degrees: f64) {
        self.params.wind_direction = degrees;
    }

    pub fn set_wind_strength(&mut self, value: f64) {
        self.params.wind_strength = value;
    }

    pub fn set_humidity(&mut self, percent: f64) {
        self.params.humidity = percent;
    }

    pub fn set_union_spread(&mut self, enabled: bool) {
        self.params.spread_model = if enabled {
            SpreadModel::Union
        } else {
            SpreadModel::FirstMatch
        };
    }

    #[must_use]
    pub fn growth_probability(&self) -> f64 {
        self.params.growth_probability
    }

    #[must_use]
    pub fn wind_direction(&self) -> f64 {
        self.params.wind_direction
    }

    #[must_use]
    pub fn wind_strength(&self) -> f64 {
        self.params.wind_strength
    }

    #[must_use]
    pub fn humidity(&self) -> f64 {
        self.params.humidity
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.grid.generation
    }

    /// Copy of the state bytes, row-major.
    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Pointer into linear memory for a zero-copy `Uint8Array` view.
    /// Valid until the next mutating call.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.census().empty
    }

    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.grid.census().tree
    }

    #[must_use]
    pub fn burning_count(&self) -> usize {
        self.grid.census().burning
    }
}

impl Universe {
    /// # Errors
    ///
    /// `InvalidState` if `size * size` overflows `usize`.
    pub fn try_new(size: usize, seed: u64) -> Result<Universe, GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = create_initial_grid(size, INITIAL_TREE_PROBABILITY, &mut rng)?;
        let mut universe = Universe {
            grid,
            params: SimParams::default(),
            rng,
            buffer: Vec::new(),
        };
        universe.sync_buffer();
        Ok(universe)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    fn sync_buffer(&mut self) {
        self.buffer.clear();
        self.buffer.extend(self.grid.cells.iter().map(|&c| u8::from(c)));
    }
}
