//! Noisy strength evaluation
//!
//! A leaf's utility is the difference between the transformed strengths of
//! the maximizing and minimizing sides, perturbed by a small random amount:
//!
//! ```text
//! strength(x) = log2(x + 1) + x / 10
//! utility     = strength(max) - strength(min) ± U[0.1, 0.2)
//! ```
//!
//! Randomness comes through [`NoiseSource`] so tests can pin the draws, and
//! the search talks to leaves through [`LeafEvaluator`] so tests can replace
//! the whole evaluation with a fixed table.

use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

use crate::error::{Result, SearchError};

/// Lower bound (inclusive) of the noise magnitude.
pub const NOISE_MIN: f64 = 0.1;

/// Upper bound (exclusive) of the noise magnitude.
pub const NOISE_MAX: f64 = 0.2;

/// Maps a raw rating onto the strength scale used by the evaluation.
///
/// Fails with [`SearchError::Domain`] when `x + 1 <= 0`, where the logarithm
/// is undefined, and for non-finite `x`, which would turn utilities into NaN.
pub fn transformed_strength(x: f64) -> Result<f64> {
    let shifted = x + 1.0;
    if !x.is_finite() || shifted <= 0.0 {
        return Err(SearchError::Domain { value: x });
    }
    Ok(shifted.log2() + x / 10.0)
}

/// Noise-free difference between the two sides' strengths.
pub fn base_signal(strength_max: f64, strength_min: f64) -> Result<f64> {
    Ok(transformed_strength(strength_max)? - transformed_strength(strength_min)?)
}

/// Source of the two random draws consumed by every utility evaluation.
pub trait NoiseSource {
    /// Fair coin. `true` subtracts the magnitude, `false` adds it.
    fn next_coin(&mut self) -> bool;

    /// Magnitude in `[NOISE_MIN, NOISE_MAX)`.
    fn next_magnitude(&mut self) -> f64;
}

/// Noise drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<ThreadRng> {
    /// Process-wide generator, no reproducibility.
    pub fn thread() -> Self {
        Self::new(thread_rng())
    }
}

impl RngNoise<StdRng> {
    /// Reproducible generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn next_coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn next_magnitude(&mut self) -> f64 {
        self.rng.gen_range(NOISE_MIN..NOISE_MAX)
    }
}

/// Noise source that returns the same draws every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise {
    pub coin: bool,
    pub magnitude: f64,
}

impl FixedNoise {
    pub fn new(coin: bool, magnitude: f64) -> Self {
        Self { coin, magnitude }
    }
}

impl NoiseSource for FixedNoise {
    fn next_coin(&mut self) -> bool {
        self.coin
    }

    fn next_magnitude(&mut self) -> f64 {
        self.magnitude
    }
}

/// Noisy utility of a position where `strength_max` is to maximize and
/// `strength_min` to minimize.
///
/// Consumes exactly one coin and one magnitude from `noise`, in that order.
pub fn utility<N: NoiseSource + ?Sized>(
    strength_max: f64,
    strength_min: f64,
    noise: &mut N,
) -> Result<f64> {
    let base = base_signal(strength_max, strength_min)?;
    let negative = noise.next_coin();
    let magnitude = noise.next_magnitude();
    let signed = if negative { -magnitude } else { magnitude };
    Ok(base + signed)
}

/// Produces the value of a leaf of the search tree.
///
/// `leaf` is the left-to-right ordinal of the leaf in the full tree
/// (`0..branching^max_depth`), so two searches over the same tree shape can be
/// compared leaf by leaf even when pruning skips some of them.
pub trait LeafEvaluator {
    fn evaluate(&mut self, leaf: usize, max_rating: f64, min_rating: f64) -> Result<f64>;
}

/// The production evaluator: [`utility`] with the wrapped noise source.
#[derive(Debug, Clone)]
pub struct NoisyEvaluator<N: NoiseSource> {
    noise: N,
}

impl<N: NoiseSource> NoisyEvaluator<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }
}

impl NoisyEvaluator<RngNoise<ThreadRng>> {
    pub fn thread() -> Self {
        Self::new(RngNoise::thread())
    }
}

impl NoisyEvaluator<RngNoise<StdRng>> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngNoise::seeded(seed))
    }
}

impl<N: NoiseSource> LeafEvaluator for NoisyEvaluator<N> {
    fn evaluate(&mut self, _leaf: usize, max_rating: f64, min_rating: f64) -> Result<f64> {
        utility(max_rating, min_rating, &mut self.noise)
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod evaluator_tests;
