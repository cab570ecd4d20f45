//! Blockfall: a falling-block puzzle engine with a terminal frontend.
//!
//! The `core` module is the whole game: board, shape catalog, rotation
//! with wall kicks, movement planning, line clearing and scoring, all
//! driven one tick at a time through [`core::Engine`]. The `input` and
//! `term` modules are the thin terminal frontend used by the binary.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
