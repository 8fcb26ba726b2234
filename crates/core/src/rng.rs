//! RNG module - seedable random source for tile spawning
//!
//! A simple LCG (Linear Congruential Generator) keeps the engine fully
//! deterministic: the same seed produces the same spawn placements and the
//! same 2-vs-4 choices, which makes whole games reproducible in tests.

/// Simple LCG RNG
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
    /// Maps via the high bits of the LCG output; the low bits of a
    /// power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
