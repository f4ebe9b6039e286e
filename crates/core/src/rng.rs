//! RNG module - injectable random source for tile spawning
//!
//! Spawning is the only nondeterministic step in the game. The engine draws
//! from a [`RandomSource`] so callers can plug in a seeded generator for
//! reproducible games or a scripted one in tests.
//!
//! Also provides a simple LCG for deterministic play.

/// Source of randomness consumed by the engine.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of `next_u32` (multiply-shift), which are the well
    /// mixed bits of an LCG. Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// True with probability `percent / 100`
    fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

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

    /// Current generator state (feeding it back to `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..40 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_hits_every_bucket() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 16];
        for _ in 0..1000 {
            seen[rng.next_range(16) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_chance_percent_is_roughly_calibrated() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..10_000).filter(|_| rng.chance_percent(10)).count();
        // 10% of 10k draws, with generous slack.
        assert!((700..1300).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_chance_percent_extremes() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..100 {
            assert!(!rng.chance_percent(0));
            assert!(rng.chance_percent(100));
        }
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
