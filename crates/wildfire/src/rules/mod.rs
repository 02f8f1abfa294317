//! Per-state transition rules dispatched from the step loop.

mod burning;
mod empty;
mod spread_stats_test;
mod tree;

use rand::Rng;

use crate::api::Neighborhood;
use crate::cell::CellState;
use crate::params::SimParams;
use crate::wind::WindOffset;

/// Values derived once per step and shared by every cell.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub params: &'a SimParams,
    pub wind: WindOffset,
}

impl<'a> StepContext<'a> {
    #[must_use]
    pub fn new(params: &'a SimParams) -> Self {
        Self {
            params,
            wind: WindOffset::from_degrees(params.wind_direction),
        }
    }
}

/// Next state of the cell at the centre of `view`.
///
/// `view` must be over the previous generation.
pub fn next_state<R: Rng + ?Sized>(
    view: &Neighborhood,
    ctx: &StepContext,
    rng: &mut R,
) -> CellState {
    match view.get(0, 0) {
        CellState::Empty => empty::update_empty(ctx, rng),
        CellState::Tree => tree::update_tree(view, ctx, rng),
        CellState::Burning => burning::update_burning(),
    }
}
