//! Errors raised when a grid does not hold a valid forest state.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Cell buffer length does not match `size * size`, or `size * size`
    /// does not fit in `usize`.
    InvalidState { size: usize, actual: usize },
    /// A raw byte outside the `CellState` discriminants, at `index` in the
    /// row-major buffer.
    UnknownCellValue { index: usize, value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidState { size, actual } => write!(
                f,
                "invalid grid state: {actual} cells do not fill a {size}x{size} grid"
            ),
            GridError::UnknownCellValue { index, value } => {
                write!(f, "unknown cell value {value} at index {index}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A byte that is not a `CellState` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCellState(pub u8);

impl fmt::Display for UnknownCellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cell value {}", self.0)
    }
}

impl std::error::Error for UnknownCellState {}
