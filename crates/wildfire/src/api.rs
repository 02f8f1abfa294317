//! Relative-offset read API for the per-cell transition rules.

use crate::cell::CellState;
use crate::Grid;

/// The eight neighbour offsets `(di, dj)`, row-major, skipping `(0, 0)`.
/// Scan order matters for first-match ignition.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Read-only view of the previous generation centred on one cell.
/// Offsets wrap toroidally, so every read is in bounds.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    pub grid: &'a Grid,
    pub row: usize,
    pub col: usize,
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a Grid, row: usize, col: usize) -> Self {
        Self { grid, row, col }
    }

    #[must_use]
    pub fn get(&self, di: i32, dj: i32) -> CellState {
        let (row, col) = self.wrap(di, dj);
        self.grid.cells[row * self.grid.size + col]
    }

    /// Offsets of burning neighbours, in scan order.
    pub fn burning(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter(|&(di, dj)| self.get(di, dj).is_burning())
    }

    fn wrap(&self, di: i32, dj: i32) -> (usize, usize) {
        let n = self.grid.size as i64;
        let row = (self.row as i64 + i64::from(di)).rem_euclid(n);
        let col = (self.col as i64 + i64::from(dj)).rem_euclid(n);
        (row as usize, col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offsets_are_row_major_without_centre() {
        let mut expected = Vec::new();
        for di in -1..=1 {
            for dj in -1..=1 {
                if (di, dj) != (0, 0) {
                    expected.push((di, dj));
                }
            }
        }
        assert_eq!(NEIGHBOR_OFFSETS.to_vec(), expected);
    }

    #[test]
    fn corner_reads_wrap_to_opposite_corner() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(3, 3, CellState::Burning);
        let view = Neighborhood::new(&grid, 0, 0);
        assert_eq!(view.get(-1, -1), CellState::Burning);
        assert_eq!(view.burning().collect::<Vec<_>>(), vec![(-1, -1)]);
    }

    #[test]
    fn burning_yields_in_scan_order() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(2, 2, CellState::Burning);
        grid.set(0, 1, CellState::Burning);
        grid.set(1, 0, CellState::Burning);
        let view = Neighborhood::new(&grid, 1, 1);
        assert_eq!(
            view.burning().collect::<Vec<_>>(),
            vec![(-1, 0), (0, -1), (1, 1)]
        );
    }

    proptest! {
        #[test]
        fn prop_wrapped_read_matches_modular_index(
            size in 1usize..12,
            row in 0usize..12,
            col in 0usize..12,
            idx in 0usize..8,
        ) {
            prop_assume!(row < size && col < size);
            let (di, dj) = NEIGHBOR_OFFSETS[idx];
            let mut grid = Grid::new(size).unwrap();
            let target_row = (row as i32 + di).rem_euclid(size as i32) as usize;
            let target_col = (col as i32 + dj).rem_euclid(size as i32) as usize;
            grid.set(target_row, target_col, CellState::Tree);

            let view = Neighborhood::new(&grid, row, col);
            prop_assert_eq!(view.get(di, dj), CellState::Tree);
        }
    }
}
