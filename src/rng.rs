//! Input-keyed deterministic generator.
//!
//! A 32-bit FNV-1a hash of the canonical request encoding seeds a small
//! 32-bit-state generator (mulberry32 mixing) that yields uniform floats in
//! [0, 1). Identical inputs therefore reproduce identical "AI-like" variation
//! in plans and projections.
//!
//! Non-cryptographic and reproducible by design. Never use this for anything
//! security-sensitive.

/// FNV-1a over the UTF-8 bytes of `input`, 32-bit wraparound.
pub fn fnv1a_32(input: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in input.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// Deterministic uniform generator with 32-bit state.
///
/// Each request constructs its own instance; state is never shared across
/// requests, which is what keeps per-input determinism intact under
/// concurrent use.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Start from an explicit 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from the canonical encoding of a request.
    pub fn from_input(canonical: &str) -> Self {
        Self::new(fnv1a_32(canonical))
    }

    /// Next uniform draw in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(t | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        f64::from(x ^ (x >> 14)) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_values() {
        // Standard FNV-1a 32-bit vectors
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
        assert_eq!(fnv1a_32("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_draws_in_unit_interval() {
        let mut rng = SeededRng::new(12345);
        for _ in 0..1000 {
            let r = rng.next_f64();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(0xdead_beef);
        let mut b = SeededRng::new(0xdead_beef);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let a_draws: Vec<u64> = (0..8).map(|_| a.next_f64().to_bits()).collect();
        let b_draws: Vec<u64> = (0..8).map(|_| b.next_f64().to_bits()).collect();
        assert_ne!(a_draws, b_draws);
    }

    #[test]
    fn test_input_keyed_seeding() {
        assert_eq!(
            SeededRng::from_input("potato|6.4").next_f64().to_bits(),
            SeededRng::from_input("potato|6.4").next_f64().to_bits()
        );
        assert_ne!(fnv1a_32("potato|6.4"), fnv1a_32("potato|6.5"));
    }
}
