// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation

use serde::{Deserialize, Serialize};

use crate::{CellState, Coord};

/// Square grid of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Number of rows and columns
    size: u8,
    /// Cell contents, indexed by row * size + col
    cells: Vec<CellState>,
}

impl Board {
    /// Create a new board of the given size with every cell empty
    pub fn new(size: u8) -> Self {
        let count = (size as usize) * (size as usize);
        Self {
            size,
            cells: vec![CellState::Empty; count],
        }
    }

    /// Get the state of the cell at the given coordinate
    ///
    /// Returns `None` for coordinates off the board.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        if !coord.is_valid(self.size) {
            return None;
        }

        Some(self.cells[self.coord_to_index(coord)])
    }

    /// Set the state of the cell at the given coordinate
    ///
    /// Returns false (and changes nothing) for coordinates off the board.
    pub fn set(&mut self, coord: Coord, state: CellState) -> bool {
        if !coord.is_valid(self.size) {
            return false;
        }

        let idx = self.coord_to_index(coord);
        self.cells[idx] = state;
        true
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Count cells currently holding the given state
    pub fn count_of(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }

    /// Iterate over every coordinate on the board in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> usize {
        (coord.row as usize) * (self.size as usize) + (coord.col as usize)
    }
}
