//! Empty cell: regrows a tree with `growth_probability`.

use rand::Rng;

use super::StepContext;
use crate::cell::CellState;

/// Always consumes exactly one draw.
pub fn update_empty<R: Rng + ?Sized>(ctx: &StepContext, rng: &mut R) -> CellState {
    if rng.gen::<f64>() < ctx.params.growth_probability {
        CellState::Tree
    } else {
        CellState::Empty
    }
}
