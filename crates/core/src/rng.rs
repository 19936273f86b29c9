//! RNG module - door placement randomness
//!
//! A small LCG is all door placement needs: one draw per wall, uniform
//! enough over spans of a handful of cells, and reproducible from a seed so
//! tests and bug reports can pin a map down.

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
        // Low bits of a power-of-two LCG cycle with short periods; small
        // modulo ranges must draw from the high half.
        self.state >> 16
    }

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a cell in `start..start + len`.
    ///
    /// Returns `None` for an empty or negative span instead of dividing by
    /// zero; no value is drawn in that case.
    pub fn pick_in_span(&mut self, start: i32, len: i32) -> Option<i32> {
        if len <= 0 {
            return None;
        }
        Some(start.saturating_add(self.next_range(len as u32) as i32))
    }

    /// Current state, usable as a seed to replay from this point.
    pub fn state(&self) -> u32 {
        self.state
    }
}
