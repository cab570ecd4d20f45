//! Rotation engine and wall-kick resolver
//!
//! Rotation is computed about a pivot cell chosen by the shape's pivot
//! table, followed by a shape-specific adjustment, producing a candidate
//! cell set. The resolver then tries the kick offsets in order and
//! accepts the first translation that is fully legal. Everything here is
//! pure: the caller commits (or discards) the returned cell set.

use crate::core::board::Board;
use crate::core::catalog::{kick_table, CellSet, ShapeDef};

/// Result of a rotation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOutcome {
    /// Accepted cells, or the original cells when every kick failed
    pub cells: CellSet,
    /// Whether a kick offset was accepted
    pub accepted: bool,
}

/// Compute the 90-degree clockwise rotation of `cells` about the pivot
/// cell, plus the shape's post-rotation adjustment.
///
/// `new_state` is the orientation counter after the request was applied
/// (the counter advances on every request); the pivot is selected by it
/// and the adjustment by the state the piece is rotating out of.
pub fn rotate_candidate(def: &ShapeDef, cells: CellSet, new_state: u8) -> CellSet {
    let prev_state = (new_state as usize + 3) % 4;
    let (pivot_row, pivot_col) = cells[def.pivots[new_state as usize]];
    let (adj_row, adj_col) = def.adjustments[prev_state];

    let mut out = [(0i8, 0i8); 4];
    for (i, &(row, col)) in cells.iter().enumerate() {
        let new_row = (col - pivot_col) + pivot_row + adj_row;
        let new_col = -(row - pivot_row) + pivot_col + adj_col;
        out[i] = (new_row, new_col);
    }
    out
}

/// Check one kicked placement: every cell must be fully on-board and
/// either empty or part of the piece's own pre-rotation footprint.
fn placement_fits(board: &Board, candidate: &CellSet, original: &CellSet, kick: (i8, i8)) -> bool {
    candidate.iter().all(|&(row, col)| {
        let (row, col) = (row + kick.0, col + kick.1);
        if !Board::in_bounds(row, col) {
            return false;
        }
        board.is_free(row, col) || original.contains(&(row, col))
    })
}

/// Try the ordered kick offsets against a candidate rotation.
///
/// Returns the first translated candidate that fits, or the original
/// (unrotated) cells when none does. The orientation counter is not
/// rolled back on rejection; that asymmetry is deliberate.
pub fn resolve_kicks(
    board: &Board,
    def: &ShapeDef,
    candidate: CellSet,
    original: CellSet,
    prev_state: u8,
) -> RotationOutcome {
    let kicks = &kick_table(def.kind)[prev_state as usize];

    for &kick in kicks.iter() {
        if placement_fits(board, &candidate, &original, kick) {
            let mut cells = candidate;
            for cell in &mut cells {
                cell.0 += kick.0;
                cell.1 += kick.1;
            }
            return RotationOutcome {
                cells,
                accepted: true,
            };
        }
    }

    RotationOutcome {
        cells: original,
        accepted: false,
    }
}

/// Full clockwise rotation attempt: candidate plus kick resolution.
///
/// O is exempt from rotation; callers skip it before reaching here.
pub fn try_rotate(board: &Board, def: &ShapeDef, cells: CellSet, new_state: u8) -> RotationOutcome {
    let prev_state = (new_state + 3) % 4;
    let candidate = rotate_candidate(def, cells, new_state);
    resolve_kicks(board, def, candidate, cells, prev_state)
}
