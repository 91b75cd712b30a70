//! Weighted die.

use crate::distribution::Distribution;
use rand::Rng;

/// A die with an arbitrary probability per side.
///
/// Sides are numbered from 1. The die itself is immutable; every roll draws
/// from the random stream handed in by the caller, so one die can be shared
/// by any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    probabilities: Vec<f64>,
}

impl Die {
    pub fn from_distribution(distribution: &Distribution) -> Self {
        let sum = distribution.weight_sum() as f64;
        let probabilities = distribution
            .weights()
            .iter()
            .map(|&w| w as f64 / sum)
            .collect();
        Self { probabilities }
    }

    pub fn side_count(&self) -> usize {
        self.probabilities.len()
    }

    /// Probability of each side; index 0 is side 1.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Roll the die, returning a side in `1..=side_count()`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let u: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (i, p) in self.probabilities.iter().enumerate() {
            cumulative += p;
            if u < cumulative {
                return i + 1;
            }
        }
        // rounding left the cumulative sum just below u
        self.side_count()
    }

    /// Roll `rolls` times and count how often each side came up.
    pub fn histogram<R: Rng + ?Sized>(&self, rolls: u64, rng: &mut R) -> Vec<u64> {
        let mut counts = vec![0u64; self.side_count()];
        for _ in 0..rolls {
            counts[self.roll(rng) - 1] += 1;
        }
        counts
    }
}
