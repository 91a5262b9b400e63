// crates/swarm_game/src/rng.rs
use serde::{Deserialize, Serialize};

/// Linear congruential generator with 32-bit state.
///
/// Each draw yields 15 bits taken from the upper half of the state, so a run
/// is fully reproducible from its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const A: u32 = 1_103_515_245; // Multiplier
    const C: u32 = 12_345; // Increment
    // Modulus is 2^32 via wrapping arithmetic.

    pub const DEFAULT_SEED: u32 = 1_234_567;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns a value in `0..=0x7FFF`.
    pub fn next_u15(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::A).wrapping_add(Self::C);
        (self.state >> 16) & 0x7FFF
    }

    /// `next_u15() % bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "Lcg::below called with a zero bound");
        self.next_u15() % bound
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_sequence() {
        let mut rng = Lcg::default();
        let first: Vec<u32> = (0..6).map(|_| rng.next_u15()).collect();
        assert_eq!(first, vec![30924, 16401, 18891, 14652, 13924, 23645]);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u15(), b.next_u15());
        }
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Lcg::new(100);
        let mut b = Lcg::new(200);
        let seq_a: Vec<u32> = (0..10).map(|_| a.next_u15()).collect();
        let seq_b: Vec<u32> = (0..10).map(|_| b.next_u15()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Lcg::new(98765);
        for _ in 0..1000 {
            assert!(rng.below(3) < 3);
            assert!(rng.next_u15() <= 0x7FFF);
        }
    }
}
