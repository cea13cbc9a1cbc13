//! RNG module - uniform piece and rotation selection
//!
//! Every spawn picks one of the seven kinds uniformly and an independent
//! uniform starting rotation. A small seeded LCG keeps games reproducible
//! for tests and headless runs.

use crate::types::{PieceKind, Rotation};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current state (restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// Source of spawned pieces
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a kind and a starting rotation
    pub fn draw(&mut self) -> (PieceKind, Rotation) {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let rotation = Rotation::from_index(self.rng.next_range(4) as u8);
        (kind, rotation)
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}
