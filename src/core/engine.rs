//! Game engine - owns all mutable game state and drives one tick at a time
//!
//! Inputs set pending intents; `tick` consumes them: rotation first, then
//! movement. A piece that cannot descend locks, lines clear and score,
//! and the next shape spawns. All state lives in one `Engine` value; a
//! second concurrent game is simply a second `Engine`.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::catalog::{shape_def, CellSet};
use crate::core::planner::{plan_move, Plan};
use crate::core::rng::{ShapePicker, ShapeSource};
use crate::core::rotation::try_rotate;
use crate::core::scoring::clear_reward;
use crate::types::{Cell, Input, PieceKind, BOARD_COLS, BOARD_ROWS};

/// The currently falling piece: four absolute cell positions plus its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub cells: CellSet,
}

/// Snapshot returned by [`Engine::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    /// Rows cleared by this tick's lock (0 when the piece kept falling)
    pub rows_cleared: u32,
}

/// Complete game state plus pending input intents
pub struct Engine {
    board: Board,
    active: ActivePiece,
    source: Box<dyn ShapeSource>,
    score: u32,
    lines: u32,
    /// Orientation state 0-3; advances on every rotation request,
    /// accepted or not
    orientation: u8,
    /// Pending horizontal delta, reset every tick
    h_pending: i8,
    /// Sticky until the piece locks
    soft_drop: bool,
    rotate_pending: bool,
    /// Set on spawn, cleared by the first successful placement commit
    is_new_shape: bool,
    /// Once set, spawns start one row higher; persists until restart
    spawn_raised: bool,
    game_over: bool,
}

impl Engine {
    /// Create a new game with a seeded uniform shape picker
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(ShapePicker::new(seed)))
    }

    /// Create a new game with a caller-supplied shape source
    /// (deterministic replay, scripted tests)
    pub fn with_source(mut source: Box<dyn ShapeSource>) -> Self {
        let first = Self::spawn_from(source.as_mut(), false);
        Self {
            board: Board::new(),
            active: first,
            source,
            score: 0,
            lines: 0,
            orientation: 0,
            h_pending: 0,
            soft_drop: false,
            rotate_pending: false,
            is_new_shape: true,
            spawn_raised: false,
            game_over: false,
        }
    }

    fn spawn_from(source: &mut dyn ShapeSource, raised: bool) -> ActivePiece {
        let kind = source.next_kind();
        let mut cells = shape_def(kind).spawn_cells;
        if raised {
            for cell in &mut cells {
                cell.0 -= 1;
            }
        }
        ActivePiece { kind, cells }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    pub fn spawn_raised(&self) -> bool {
        self.spawn_raised
    }

    /// True until the active piece first commits a placement. A fresh
    /// spawn may overlap the stack; the next tick resolves it as a
    /// raised spawn or game over instead of a lock.
    pub fn is_fresh_spawn(&self) -> bool {
        self.is_new_shape
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Record a pending input intent; consumed by the next tick.
    /// Restart and Stop take effect immediately.
    pub fn apply_input(&mut self, input: Input) {
        match input {
            Input::Restart => {
                self.restart();
                return;
            }
            Input::Stop => {
                self.game_over = true;
                return;
            }
            _ => {}
        }

        if self.game_over {
            return;
        }

        match input {
            Input::MoveLeft => self.h_pending = -1,
            Input::MoveRight => self.h_pending = 1,
            Input::SoftDropOn => self.soft_drop = true,
            Input::RotateClockwise => {
                self.rotate_pending = true;
                // The counter advances whether or not the rotation will
                // be geometrically accepted.
                self.orientation = (self.orientation + 1) % 4;
            }
            Input::Restart | Input::Stop => unreachable!(),
        }
    }

    /// Reset everything; the shape source keeps its stream
    fn restart(&mut self) {
        self.board.clear_all();
        self.score = 0;
        self.lines = 0;
        self.orientation = 0;
        self.h_pending = 0;
        self.soft_drop = false;
        self.rotate_pending = false;
        self.spawn_raised = false;
        self.game_over = false;
        self.active = Self::spawn_from(self.source.as_mut(), false);
        self.is_new_shape = true;
    }

    /// Advance one frame: apply any requested rotation, plan and commit
    /// movement, or lock the piece and evaluate lines and game over.
    pub fn tick(&mut self) -> TickResult {
        if self.game_over {
            return self.result(0);
        }

        if self.rotate_pending {
            self.rotate_pending = false;
            if self.active.kind != PieceKind::O {
                let def = shape_def(self.active.kind);
                let outcome = try_rotate(&self.board, def, self.active.cells, self.orientation);
                self.active.cells = outcome.cells;
            }
        }

        let plan = plan_move(&self.board, &self.active.cells, self.h_pending, self.soft_drop);
        self.h_pending = 0;

        let mut rows_cleared = 0;
        match plan {
            Plan::Step { cells, .. } => {
                self.active.cells = cells;
                self.is_new_shape = false;
            }
            Plan::Blocked => {
                if self.is_new_shape {
                    // Top-out leniency: one raised retry, then terminal.
                    if self.spawn_raised {
                        self.game_over = true;
                    } else {
                        self.spawn_raised = true;
                    }
                } else {
                    self.lock_active();
                }

                rows_cleared = self.clear_lines();
                self.soft_drop = false;

                if !self.game_over {
                    self.active = Self::spawn_from(self.source.as_mut(), self.spawn_raised);
                    self.orientation = 0;
                    self.is_new_shape = true;
                }
            }
        }

        self.result(rows_cleared)
    }

    /// Stamp the active piece's on-board cells as locked content.
    /// Cells still above the top edge are dropped.
    fn lock_active(&mut self) {
        for &(row, col) in &self.active.cells {
            if row >= 0 {
                self.board.set(row, col, Some(self.active.kind));
            }
        }
    }

    /// Scan top to bottom; every full row shifts the rows above it down
    /// immediately. Returns the count and applies the reward table.
    fn clear_lines(&mut self) -> u32 {
        let mut cleared: ArrayVec<usize, 4> = ArrayVec::new();
        for row in 0..BOARD_ROWS {
            if self.board.is_row_full(row) {
                self.board.shift_rows_down(row);
                cleared.push(row);
            }
        }

        let reward = clear_reward(cleared.len());
        self.score += reward.score;
        self.lines += reward.lines;
        reward.lines
    }

    /// Board snapshot with the on-board portion of the active piece
    /// overlaid. Once terminal, only locked content is shown.
    pub fn render(&self) -> [[Cell; BOARD_COLS]; BOARD_ROWS] {
        let mut grid = self.board.rows();
        if !self.game_over {
            for &(row, col) in &self.active.cells {
                if row >= 0 {
                    grid[row as usize][col as usize] = Some(self.active.kind);
                }
            }
        }
        grid
    }

    fn result(&self, rows_cleared: u32) -> TickResult {
        TickResult {
            board: self.render(),
            score: self.score,
            lines: self.lines,
            game_over: self.game_over,
            rows_cleared,
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("active", &self.active)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("orientation", &self.orientation)
            .field("spawn_raised", &self.spawn_raised)
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}
