//! Cell state type for the forest grid.

use std::fmt;

use crate::error::UnknownCellState;

/// Discriminant values are the bytes handed to the presentation layer
/// (`Universe::cells_ptr`), do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    #[default]
    Empty = 0,
    Tree = 1,
    Burning = 2,
}

impl CellState {
    /// All valid states, in discriminant order.
    pub const ALL: [CellState; 3] = [CellState::Empty, CellState::Tree, CellState::Burning];

    #[must_use]
    pub fn is_burning(self) -> bool {
        self == Self::Burning
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Tree => write!(f, "Tree"),
            Self::Burning => write!(f, "Burning"),
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = UnknownCellState;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Tree),
            2 => Ok(Self::Burning),
            _ => Err(UnknownCellState(value)),
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state as u8
    }
}
