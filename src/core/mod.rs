//! Core module - pure game logic with no external I/O
//!
//! Everything here is synchronous and deterministic: the engine advances
//! exactly one tick per call, and all randomness flows through the
//! pluggable shape source.

pub mod board;
pub mod catalog;
pub mod engine;
pub mod planner;
pub mod rng;
pub mod rotation;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use catalog::{shape_def, CellSet, ShapeDef};
pub use engine::{ActivePiece, Engine, TickResult};
pub use planner::{plan_move, Plan};
pub use rng::{ScriptedShapes, ShapePicker, ShapeSource, SimpleRng};
pub use rotation::{try_rotate, RotationOutcome};
pub use scoring::{clear_reward, ClearReward};
