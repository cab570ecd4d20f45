//! Board module - manages the game grid
//!
//! The board is an 18x10 grid where each cell is empty or holds locked
//! content tagged with a piece kind. Uses a flat array for cache locality
//! and zero allocation.
//! Coordinates: (row, col) where row ranges 0..17 (top to bottom) and
//! col ranges 0..9 (left to right). The active piece is never stored
//! here; the board holds locked content only.

use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// The game board - 18 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * BOARD_COLS + (col as usize))
    }

    /// Check whether (row, col) lies on the board
    pub fn in_bounds(row: i8, col: i8) -> bool {
        Self::index(row, col).is_some()
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds (a caller bug; callers bounds-check first)
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => {
                debug_assert!(false, "board write out of bounds: ({row}, {col})");
                false
            }
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and occupied
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Shift every row above `from_row` down by one, overwriting `from_row`.
    /// Row 0 becomes empty. Used by line clearing.
    pub fn shift_rows_down(&mut self, from_row: usize) {
        if from_row >= BOARD_ROWS {
            debug_assert!(false, "shift_rows_down out of bounds: {from_row}");
            return;
        }

        for row in (1..=from_row).rev() {
            let src = (row - 1) * BOARD_COLS;
            let dst = row * BOARD_COLS;
            self.cells.copy_within(src..src + BOARD_COLS, dst);
        }

        for cell in &mut self.cells[0..BOARD_COLS] {
            *cell = None;
        }
    }

    /// Clear the entire board
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Copy the board into a 2D grid, row 0 first
    pub fn rows(&self) -> [[Cell; BOARD_COLS]; BOARD_ROWS] {
        let mut out = [[None; BOARD_COLS]; BOARD_ROWS];
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * BOARD_COLS;
            out_row.copy_from_slice(&self.cells[start..start + BOARD_COLS]);
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(17, 9), Some(179));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(18, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(10, 5, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * BOARD_COLS + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_shift_rows_down_from_bottom() {
        let mut board = Board::new();
        board.set(16, 3, Some(PieceKind::S));
        board.set(17, 7, Some(PieceKind::Z));

        board.shift_rows_down(17);

        // Row 17 took row 16's content; the old row 17 content is gone.
        assert_eq!(board.get(17, 3), Some(Some(PieceKind::S)));
        assert_eq!(board.get(17, 7), Some(None));
        assert_eq!(board.get(16, 3), Some(None));
        // Top row is empty.
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(0, col), Some(None));
        }
    }

    #[test]
    fn test_shift_rows_down_leaves_rows_below_untouched() {
        let mut board = Board::new();
        board.set(17, 0, Some(PieceKind::L));
        board.set(15, 4, Some(PieceKind::J));

        board.shift_rows_down(16);

        assert_eq!(board.get(17, 0), Some(Some(PieceKind::L)));
        assert_eq!(board.get(16, 4), Some(Some(PieceKind::J)));
        assert_eq!(board.get(15, 4), Some(None));
    }
}
