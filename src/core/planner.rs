//! Collision/movement planner
//!
//! Resolves one tick of pending movement intent (horizontal delta plus
//! gravity or soft-drop) against the board. Pure: returns the plan, the
//! engine commits it. Horizontal movement is all-or-nothing for the
//! whole piece; a vetoed sideways move degrades to a vertical-only step
//! before the piece counts as blocked.

use crate::core::board::Board;
use crate::core::catalog::CellSet;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Outcome of planning one tick of movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// The piece moves to `cells` this tick
    Step {
        cells: CellSet,
        /// Horizontal delta actually applied (after any veto)
        h_applied: i8,
        /// Rows descended (1, or more under soft drop)
        distance: i8,
    },
    /// The piece cannot descend; it has landed
    Blocked,
}

/// A target cell collides when it is below the floor, or occupied by
/// locked content outside the piece's own footprint. Negative rows
/// (above the top edge) are free; columns are bounds-checked upstream.
fn collides(board: &Board, own: &CellSet, row: i8, col: i8) -> bool {
    if row >= BOARD_ROWS as i8 {
        return true;
    }
    if row < 0 {
        return false;
    }
    board.is_occupied(row, col) && !own.contains(&(row, col))
}

/// Whether the whole piece can rest at vertical offset `distance` with
/// horizontal delta `h` applied.
fn descent_free(board: &Board, cells: &CellSet, h: i8, distance: i8) -> bool {
    cells
        .iter()
        .all(|&(row, col)| !collides(board, cells, row + distance, col + h))
}

/// Plan one tick of movement for the piece at `cells`.
///
/// `h_intent` is the pending horizontal delta (-1, 0 or +1). With
/// `soft_drop` the descent extends to the maximal free distance and is
/// committed in one step.
pub fn plan_move(board: &Board, cells: &CellSet, h_intent: i8, soft_drop: bool) -> Plan {
    let mut h = h_intent;

    // Veto the sideways move for the whole piece if any cell would
    // leave the board columns.
    if h != 0
        && cells.iter().any(|&(_, col)| {
            let target = col + h;
            target < 0 || target >= BOARD_COLS as i8
        })
    {
        h = 0;
    }

    // A blocked diagonal step also vetoes the sideways move; the piece
    // then tries to descend straight down.
    if h != 0 && !descent_free(board, cells, h, 1) {
        h = 0;
    }

    if !descent_free(board, cells, h, 1) {
        return Plan::Blocked;
    }

    let mut distance: i8 = 1;
    if soft_drop {
        while descent_free(board, cells, h, distance + 1) {
            distance += 1;
        }
    }

    let mut dest = *cells;
    for cell in &mut dest {
        cell.0 += distance;
        cell.1 += h;
    }

    Plan::Step {
        cells: dest,
        h_applied: h,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn o_cells_at(row: i8, col: i8) -> CellSet {
        [(row, col), (row, col + 1), (row - 1, col), (row - 1, col + 1)]
    }

    #[test]
    fn test_single_step_descends_one_row() {
        let board = Board::new();
        let cells = o_cells_at(0, 4);
        match plan_move(&board, &cells, 0, false) {
            Plan::Step {
                cells: dest,
                h_applied,
                distance,
            } => {
                assert_eq!(distance, 1);
                assert_eq!(h_applied, 0);
                assert_eq!(dest, o_cells_at(1, 4));
            }
            Plan::Blocked => panic!("open board should not block"),
        }
    }

    #[test]
    fn test_horizontal_veto_at_wall() {
        let board = Board::new();
        let cells = o_cells_at(5, 8); // columns 8 and 9
        match plan_move(&board, &cells, 1, false) {
            Plan::Step { h_applied, .. } => assert_eq!(h_applied, 0),
            Plan::Blocked => panic!("should still descend"),
        }
    }

    #[test]
    fn test_diagonal_obstruction_degrades_to_vertical() {
        let mut board = Board::new();
        // Obstacle diagonally down-left of the piece.
        board.set(6, 3, Some(PieceKind::T));
        let cells = o_cells_at(5, 4);
        match plan_move(&board, &cells, -1, false) {
            Plan::Step {
                cells: dest,
                h_applied,
                ..
            } => {
                assert_eq!(h_applied, 0);
                assert_eq!(dest, o_cells_at(6, 4));
            }
            Plan::Blocked => panic!("vertical path is clear"),
        }
    }

    #[test]
    fn test_blocked_at_floor() {
        let board = Board::new();
        let cells = o_cells_at(17, 4);
        assert_eq!(plan_move(&board, &cells, 0, false), Plan::Blocked);
    }

    #[test]
    fn test_blocked_on_locked_content() {
        let mut board = Board::new();
        board.set(10, 4, Some(PieceKind::J));
        let cells = o_cells_at(9, 4);
        assert_eq!(plan_move(&board, &cells, 0, false), Plan::Blocked);
    }

    #[test]
    fn test_descent_ignores_own_footprint() {
        let board = Board::new();
        // A vertical I occupies rows 3..=6; moving down overlaps itself,
        // which must not count as a collision.
        let cells: CellSet = [(3, 4), (4, 4), (5, 4), (6, 4)];
        match plan_move(&board, &cells, 0, false) {
            Plan::Step { distance, .. } => assert_eq!(distance, 1),
            Plan::Blocked => panic!("self-overlap is exempt"),
        }
    }

    #[test]
    fn test_soft_drop_reaches_floor_in_one_plan() {
        let board = Board::new();
        let cells = o_cells_at(1, 4); // bottom edge at row 1
        match plan_move(&board, &cells, 0, true) {
            Plan::Step {
                cells: dest,
                distance,
                ..
            } => {
                // Maximal descent: 17 - max(row) = 16.
                assert_eq!(distance, 16);
                assert_eq!(dest, o_cells_at(17, 4));
            }
            Plan::Blocked => panic!("open column should not block"),
        }
    }

    #[test]
    fn test_soft_drop_stops_on_stack() {
        let mut board = Board::new();
        for col in 0..10 {
            board.set(17, col, Some(PieceKind::I));
        }
        let cells = o_cells_at(1, 4);
        match plan_move(&board, &cells, 0, true) {
            Plan::Step { distance, .. } => assert_eq!(distance, 15),
            Plan::Blocked => panic!("rows above the stack are free"),
        }
    }

    #[test]
    fn test_negative_rows_are_free() {
        let board = Board::new();
        // Fresh spawn overhanging the top edge.
        let cells: CellSet = [(0, 3), (0, 4), (0, 5), (-1, 4)];
        match plan_move(&board, &cells, 0, false) {
            Plan::Step { distance, .. } => assert_eq!(distance, 1),
            Plan::Blocked => panic!("spawn overhang must descend"),
        }
    }
}
