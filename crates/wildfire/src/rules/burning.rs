//! Burning cell: burns out in exactly one step.

use crate::cell::CellState;

pub fn update_burning() -> CellState {
    CellState::Empty
}
