//! Shape catalog - static tetromino definitions
//!
//! Each of the seven shapes is defined by its four spawn cells (absolute
//! (row, col) positions; negative rows overhang the top edge), a pivot
//! index per orientation state, and a post-rotation adjustment per
//! previous orientation state. The adjustments correct for shape
//! geometries that are not symmetric about an integer pivot.

use crate::types::PieceKind;

/// A single cell position, (row, col)
pub type CellPos = (i8, i8);

/// The four cells of a piece
pub type CellSet = [CellPos; 4];

/// Static definition of one tetromino shape
#[derive(Debug, Clone, Copy)]
pub struct ShapeDef {
    pub kind: PieceKind,
    /// Spawn cell positions
    pub spawn_cells: CellSet,
    /// Which of the 4 cells is the rotation center, per orientation state
    pub pivots: [usize; 4],
    /// (d_row, d_col) applied after the pivot rotation, per previous
    /// orientation state
    pub adjustments: [(i8, i8); 4],
}

/// Look up the catalog entry for a kind
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    &CATALOG[kind as usize]
}

/// Catalog indexed by `PieceKind as usize` (I, J, L, O, S, T, Z)
static CATALOG: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        spawn_cells: [(0, 3), (0, 4), (0, 5), (0, 6)],
        pivots: [1, 1, 1, 1],
        adjustments: [(0, 1), (-1, -1), (0, 0), (-1, 0)],
    },
    ShapeDef {
        kind: PieceKind::J,
        spawn_cells: [(0, 3), (0, 4), (0, 5), (-1, 3)],
        pivots: [1, 1, 2, 2],
        adjustments: [(0, 0), (0, 1), (0, 0), (0, -1)],
    },
    ShapeDef {
        kind: PieceKind::L,
        spawn_cells: [(0, 3), (0, 4), (0, 5), (-1, 5)],
        pivots: [1, 2, 2, 1],
        adjustments: [(0, -1), (0, 0), (-1, 1), (0, 0)],
    },
    ShapeDef {
        kind: PieceKind::O,
        spawn_cells: [(0, 4), (0, 5), (-1, 4), (-1, 5)],
        pivots: [1, 1, 1, 1],
        adjustments: [(0, 0), (0, 0), (0, 0), (0, 0)],
    },
    ShapeDef {
        kind: PieceKind::S,
        spawn_cells: [(0, 3), (0, 4), (-1, 4), (-1, 5)],
        pivots: [2, 2, 2, 2],
        adjustments: [(0, 0), (0, 0), (0, 0), (0, 0)],
    },
    ShapeDef {
        kind: PieceKind::T,
        spawn_cells: [(0, 3), (0, 4), (0, 5), (-1, 4)],
        pivots: [1, 1, 3, 0],
        adjustments: [(0, 0), (1, 1), (0, -1), (0, 1)],
    },
    ShapeDef {
        kind: PieceKind::Z,
        spawn_cells: [(0, 4), (0, 5), (-1, 3), (-1, 4)],
        pivots: [0, 1, 0, 2],
        adjustments: [(1, -1), (-1, -1), (0, 2), (-1, -1)],
    },
];

/// One kick entry: 5 (d_row, d_col) translations tried in order.
/// The first is always (0, 0).
pub type KickRow = [(i8, i8); 5];

/// Kick table: one row per orientation state before the rotation
pub type KickTable = [KickRow; 4];

/// Kick table shared by J, L, T, S and Z
pub static MAIN_KICKS: KickTable = [
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
];

/// Kick table for the I geometry
pub static I_KICKS: KickTable = [
    [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)],
    [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)],
    [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)],
    [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)],
];

/// Get the kick table for a piece kind.
/// O never reaches the resolver (it does not rotate).
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &MAIN_KICKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_KINDS;

    #[test]
    fn test_catalog_order_matches_kind_discriminants() {
        for kind in ALL_KINDS {
            assert_eq!(shape_def(kind).kind, kind);
        }
    }

    #[test]
    fn test_spawn_cells_are_distinct_and_in_column_range() {
        for kind in ALL_KINDS {
            let cells = shape_def(kind).spawn_cells;
            for (i, &(row, col)) in cells.iter().enumerate() {
                assert!((0..10).contains(&col), "{kind:?} col {col}");
                assert!(row >= -1 && row <= 0, "{kind:?} row {row}");
                for &other in &cells[i + 1..] {
                    assert_ne!((row, col), other, "{kind:?} has duplicate cells");
                }
            }
        }
    }

    #[test]
    fn test_pivot_indices_in_range() {
        for kind in ALL_KINDS {
            for &pivot in &shape_def(kind).pivots {
                assert!(pivot < 4);
            }
        }
    }

    #[test]
    fn test_first_kick_is_identity() {
        for table in [&MAIN_KICKS, &I_KICKS] {
            for row in table.iter() {
                assert_eq!(row[0], (0, 0));
            }
        }
    }
}
