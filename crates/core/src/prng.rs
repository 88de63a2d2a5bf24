//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! The default [`RandomSource`] for randcolor. Same seed always produces the
//! same sequence of colors across all platforms, which is what makes a
//! [`Recipe`](crate::Recipe) reproducible.

use crate::random::{bits_to_closed, bits_to_half_open, bits_to_open, RandomSource};
use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced with
/// a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    fn unit_closed(&mut self) -> f64 {
        bits_to_closed(self.next_u64())
    }

    fn unit_half_open(&mut self) -> f64 {
        bits_to_half_open(self.next_u64())
    }

    fn unit_open(&mut self) -> f64 {
        bits_to_open(self.next_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Golden value --

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every saved recipe replays differently.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0, "seed=0 guard failed");
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_draws() {
        let mut rng_a = Xorshift64::new(42);
        let mut rng_b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(
                rng_a.unit_closed().to_bits(),
                rng_b.unit_closed().to_bits(),
                "sequences diverged at index {i}"
            );
        }
    }

    // -- Interval shapes --

    #[test]
    fn unit_half_open_always_below_one() {
        let mut rng = Xorshift64::new(12345);
        for i in 0..10_000 {
            let v = rng.unit_half_open();
            assert!(
                (0.0..1.0).contains(&v),
                "unit_half_open() = {v} out of [0, 1) at iteration {i}"
            );
        }
    }

    #[test]
    fn unit_open_excludes_both_ends() {
        let mut rng = Xorshift64::new(777);
        for _ in 0..10_000 {
            let v = rng.unit_open();
            assert!(v > 0.0 && v < 1.0, "unit_open() = {v}");
        }
    }

    #[test]
    fn unit_half_closed_excludes_zero() {
        let mut rng = Xorshift64::new(31337);
        for _ in 0..10_000 {
            let v = rng.unit_half_closed();
            assert!(v > 0.0 && v <= 1.0, "unit_half_closed() = {v}");
        }
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(
                rng.next_u64(),
                restored.next_u64(),
                "sequences diverged after deserialization at index {i}"
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn range_closed_in_bounds_for_any_seed_and_range(
                seed: u64,
                lo in -1e6_f64..1e6,
                width in 0.0_f64..1e6,
            ) {
                let hi = lo + width;
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.range_closed(lo, hi);
                    prop_assert!(
                        v >= lo && v <= hi,
                        "range_closed({lo}, {hi}) = {v} for seed {seed}"
                    );
                }
            }

            #[test]
            fn unit_closed_approximate_uniformity(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let v = rng.unit_closed();
                    let idx = (v * 10.0).min(9.0) as usize;
                    buckets[idx] += 1;
                }
                // Loose bound: expected ~1000 per bucket.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(
                        count >= 500,
                        "bucket {i} has only {count} values for seed {seed}"
                    );
                }
            }
        }
    }
}
