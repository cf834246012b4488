//! Deterministic run-level and per-bird RNG wrappers.
//!
//! # Determinism strategy
//!
//! The run owns a single `SimRng` (seeded from the configured master seed)
//! that draws the per-tick shuffle, and every bird owns a `BirdRng` seeded
//! by:
//!
//!   seed = master_seed XOR (bird_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive bird ids uniformly across the seed space.
//! Because every stochastic strategy draw comes from the deciding bird's own
//! stream, fight resolution can run pairs in any order — or in parallel —
//! without perturbing the run: a fixed seed always reproduces the same
//! population history.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::BirdId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── BirdRng ───────────────────────────────────────────────────────────────────

/// Per-bird deterministic RNG.
///
/// Created when the bird enters the population (seeding or birth) and culled
/// with it.  Stored index-aligned with the bird list — see the population
/// engine for why the two live in separate `Vec`s.
pub struct BirdRng(SmallRng);

impl BirdRng {
    /// Seed deterministically from the run's master seed and a bird id.
    pub fn new(master_seed: u64, bird: BirdId) -> Self {
        let seed = master_seed ^ (bird.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BirdRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for whole-population operations — in practice, the per-tick
/// pairing shuffle.
///
/// Used only from the sequential sections of the tick loop; per-bird draws go
/// through [`BirdRng`] instead so they stay independent of execution order.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}
