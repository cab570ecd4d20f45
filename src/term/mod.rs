//! Terminal renderer for the frontend binary.
//!
//! Full-frame redraws through a queued crossterm pipeline: score header,
//! the 18x10 well as double-width colored cells, and a game-over banner.
//! The engine stays unaware of any of this.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::core::Engine;
use crate::types::{PieceKind, BOARD_COLS};

/// Display color for a locked or falling cell
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole frame from the engine's current snapshot
    pub fn draw(&mut self, engine: &Engine) -> Result<()> {
        let grid = engine.render();

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(format!(
            " score {:>6}   lines {:>4}",
            engine.score(),
            engine.lines()
        )))?;

        for (row, cells) in grid.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16 + 1))?;
            self.stdout.queue(Print("|"))?;
            for cell in cells {
                match cell {
                    Some(kind) => {
                        self.stdout.queue(SetBackgroundColor(kind_color(*kind)))?;
                        self.stdout.queue(Print("  "))?;
                        self.stdout.queue(ResetColor)?;
                    }
                    None => {
                        self.stdout.queue(Print("  "))?;
                    }
                }
            }
            self.stdout.queue(Print("|"))?;
        }

        let floor_row = grid.len() as u16 + 1;
        self.stdout.queue(cursor::MoveTo(0, floor_row))?;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat(BOARD_COLS * 2))))?;

        if engine.game_over() {
            self.stdout.queue(cursor::MoveTo(0, floor_row + 1))?;
            self.stdout
                .queue(Print(" GAME OVER - press r to restart, q to quit"))?;
        } else {
            self.stdout.queue(cursor::MoveTo(0, floor_row + 1))?;
            self.stdout
                .queue(Print(" arrows move/rotate, down drops, q quits"))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
