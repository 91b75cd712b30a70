//! Game configuration.
//!
//! A [`GameConfig`] describes the board, the die and the simulation run. It can
//! be loaded from a JSON file where every field is optional:
//!
//! ```json
//! {
//!   "width": 10,
//!   "height": 10,
//!   "die_sides": 12,
//!   "distribution": "twodice",
//!   "exact_ending": true,
//!   "shortcuts": ["4-25", "40-3"],
//!   "simulations": 5000
//! }
//! ```

use crate::board::{Shortcut, MIN_DIMENSION};
use crate::distribution::DistributionSpec;
use crate::error::{BoardError, ConfigError};
use crate::simulator::SimConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_DIE_SIDES: usize = 6;
pub const DEFAULT_SIMULATIONS: usize = 1000;
/// Rolls a single game may use before it is given up.
pub const DEFAULT_DICE_LIMIT: usize = 10_000;

/// Full description of a game and how often to simulate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub die_sides: usize,
    /// The last cell must be hit exactly; overshooting rolls are wasted.
    pub exact_ending: bool,
    pub distribution: DistributionSpec,
    pub shortcuts: Vec<Shortcut>,
    pub simulations: usize,
    pub dice_limit: usize,
    /// Random seed for reproducibility (None = seeded from the clock)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            die_sides: DEFAULT_DIE_SIDES,
            exact_ending: false,
            distribution: DistributionSpec::default(),
            shortcuts: Vec::new(),
            simulations: DEFAULT_SIMULATIONS,
            dice_limit: DEFAULT_DICE_LIMIT,
            seed: None,
        }
    }
}

/// Values that replace the ones of a loaded config, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub die_sides: Option<usize>,
    pub exact_ending: bool,
    pub distribution: Option<DistributionSpec>,
    pub shortcuts: Vec<Shortcut>,
    pub simulations: Option<usize>,
    pub dice_limit: Option<usize>,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Apply `overrides` on top of this config.
    ///
    /// Scalars are replaced when set; shortcuts are appended.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(sides) = overrides.die_sides {
            self.die_sides = sides;
        }
        self.exact_ending |= overrides.exact_ending;
        if let Some(distribution) = overrides.distribution {
            self.distribution = distribution;
        }
        self.shortcuts.extend(overrides.shortcuts);
        if let Some(simulations) = overrides.simulations {
            self.simulations = simulations;
        }
        if let Some(limit) = overrides.dice_limit {
            self.dice_limit = limit;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Check the run parameters and board dimensions.
    ///
    /// Shortcuts and the distribution are validated when the game is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.simulations == 0 {
            return Err(ConfigError::InvalidSimulationCount);
        }
        if self.dice_limit == 0 {
            return Err(ConfigError::InvalidDiceLimit);
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            num_runs: self.simulations,
            dice_limit: self.dice_limit,
            seed: self.seed,
        }
    }
}
