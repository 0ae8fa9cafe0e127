use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{generic::boards::has_line, Cell, Coordinates, Symbol};

/// The 3x3 grid of cells. Cells are addressed from the outside by an index
/// in `0..Board::CELL_COUNT`, counted row by row from the top left corner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Board {
    data: Array2<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    pub const CELL_COUNT: usize = Self::SIZE.0 * Self::SIZE.1;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Cell::Empty),
        }
    }

    /// Returns a copy of all cells in row-major order. Changing the returned
    /// array never touches the board.
    pub fn get_board(&self) -> [Cell; Board::CELL_COUNT] {
        let mut cells = [Cell::Empty; Self::CELL_COUNT];
        for (slot, cell) in cells.iter_mut().zip(self.data.iter()) {
            *slot = *cell;
        }
        cells
    }

    /// Writes `symbol` into the cell at `index`.
    ///
    /// Returns false without touching the board if the cell is already
    /// occupied or `index` is outside of the board.
    pub fn set_symbol(&mut self, index: usize, symbol: Symbol) -> bool {
        let Some(coordinates) = Self::get_coordinates(index) else {
            debug!("rejecting {} at index {}: out of bounds", symbol, index);
            return false;
        };
        let cell = &mut self.data[coordinates];
        if !cell.is_empty() {
            debug!("rejecting {} at index {}: cell is occupied", symbol, index);
            return false;
        }
        *cell = Cell::Occupied { symbol };
        true
    }

    pub fn reset(&mut self) {
        self.data.fill(Cell::Empty);
    }

    /// true if `symbol` fills at least one row, column or diagonal
    pub fn has_line(&self, symbol: Symbol) -> bool {
        has_line(&self.data, symbol)
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|cell| !cell.is_empty())
    }

    /// Translates a row-major index into (row, column)
    /// Example: 5 -> (1, 2)
    pub fn get_coordinates(index: usize) -> Option<Coordinates> {
        if index >= Self::CELL_COUNT {
            return None;
        }
        Some((index / Self::SIZE.1, index % Self::SIZE.1))
    }
}
