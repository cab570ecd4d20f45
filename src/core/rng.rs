//! RNG module - seeded shape selection
//!
//! Spawning picks uniformly among the seven shapes (no bag). The engine
//! owns a seeded LCG so that replays are deterministic; tests can drive
//! the engine with a known seed or a scripted picker.

use crate::types::{PieceKind, ALL_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of spawned shapes. Implemented by the seeded picker and by
/// scripted sequences in tests.
pub trait ShapeSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random shape picker backed by a [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ShapeSource for ShapePicker {
    fn next_kind(&mut self) -> PieceKind {
        ALL_KINDS[self.rng.next_range(7) as usize]
    }
}

/// Fixed shape sequence for deterministic tests; repeats when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl ScriptedShapes {
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "scripted sequence must not be empty");
        Self { sequence, index: 0 }
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.sequence[self.index % self.sequence.len()];
        self.index += 1;
        kind
    }
}
