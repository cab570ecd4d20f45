//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_ROWS: usize = 18;
pub const BOARD_COLS: usize = 10;

/// Gravity interval for the terminal driver (milliseconds)
pub const GRAVITY_MS: u64 = 700;

/// Points awarded per number of lines cleared in one evaluation
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All seven kinds, in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

/// Cell on the board (None = empty, Some = locked content of that kind)
///
/// The kind is a display tag only; collision checks never compare it.
pub type Cell = Option<PieceKind>;

/// Player inputs consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    SoftDropOn,
    RotateClockwise,
    Restart,
    Stop,
}
