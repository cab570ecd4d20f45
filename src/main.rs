//! Terminal blockfall runner (default binary).
//!
//! The engine never sleeps or blocks; this loop owns all timing. It
//! ticks on a fixed gravity interval and additionally once per input
//! event, so moves and rotations take effect without waiting for
//! gravity.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Engine;
use blockfall::input::{map_key, should_quit};
use blockfall::term::TerminalRenderer;
use blockfall::types::GRAVITY_MS;

fn main() -> Result<()> {
    let seed = std::process::id();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut engine = Engine::new(seed);
    let gravity = Duration::from_millis(GRAVITY_MS);
    let mut last_tick = Instant::now();

    loop {
        term.draw(&engine)?;

        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = map_key(key) {
                        engine.apply_input(input);
                        // User events advance the game immediately.
                        engine.tick();
                        last_tick = Instant::now();
                    }
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
