//! Simulation configuration.

use crate::config::{DEFAULT_DICE_LIMIT, DEFAULT_SIMULATIONS};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of games to simulate, one worker thread each
    pub num_runs: usize,

    /// Maximum rolls per game before it is aborted
    pub dice_limit: usize,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_SIMULATIONS,
            dice_limit: DEFAULT_DICE_LIMIT,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Small reproducible run, handy for quick checks.
    pub fn seeded(num_runs: usize, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
