//! Die side weightings.
//!
//! A distribution assigns a non-negative integer weight to every side of a die.
//! The probability of a side is its weight divided by the sum of all weights.
//! Distributions are either built from a named [`Preset`] or from an explicit
//! weight list.

use crate::error::DistributionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named weightings that can be generated for any die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Every side has weight 1. e.g. `1,1,1,1,1,1`
    Uniform,
    /// Sum of two equal uniform dice with `sides / 2` sides each.
    /// e.g. `0,1,2,3,4,5,6,5,4,3,2,1` for 12 sides
    TwoDice,
    /// Weight rises by one per side. e.g. `1,2,3,4,5,6`
    Upstairs,
    /// Weight falls by one per side. e.g. `6,5,4,3,2,1`
    Downstairs,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Uniform,
        Preset::TwoDice,
        Preset::Upstairs,
        Preset::Downstairs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::TwoDice => "twodice",
            Self::Upstairs => "upstairs",
            Self::Downstairs => "downstairs",
        }
    }

    /// Generate the weights of this preset for a die with `sides` sides.
    fn weights(&self, sides: usize) -> Result<Vec<u64>, DistributionError> {
        let n = sides as u64;
        let weights = match self {
            Self::Uniform => vec![1; sides],
            Self::TwoDice => {
                if sides % 2 != 0 {
                    return Err(DistributionError::OddSideCountForTwoDice(sides));
                }
                let half = n / 2;
                (0..half).chain((1..=half).rev()).collect()
            }
            Self::Upstairs => (1..=n).collect(),
            Self::Downstairs => (1..=n).rev().collect(),
        };
        Ok(weights)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a distribution should be built: a preset or explicit weights.
///
/// Parses from and serializes to the same textual form: a preset name
/// (`uniform`, `twodice`, `upstairs`, `downstairs`) or a comma separated
/// weight list such as `1,2,3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DistributionSpec {
    Preset(Preset),
    Weights(Vec<u64>),
}

impl Default for DistributionSpec {
    fn default() -> Self {
        Self::Preset(Preset::Uniform)
    }
}

impl FromStr for DistributionSpec {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DistributionError::Empty);
        }
        if let Some(preset) = Preset::ALL.iter().find(|p| p.name() == s) {
            return Ok(Self::Preset(*preset));
        }
        let weights = s
            .split(',')
            .map(|w| {
                w.trim()
                    .parse::<u64>()
                    .map_err(|_| DistributionError::InvalidWeight(w.trim().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Weights(weights))
    }
}

impl TryFrom<String> for DistributionSpec {
    type Error = DistributionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DistributionSpec> for String {
    fn from(spec: DistributionSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "{preset}"),
            Self::Weights(weights) => {
                let joined: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

/// A validated weighting with exactly one weight per die side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    preset: Option<Preset>,
    weights: Vec<u64>,
    weight_sum: u64,
}

impl Distribution {
    /// Build the distribution described by `spec` for a die with `sides` sides.
    ///
    /// Explicit weight lists shorter than `sides` are padded with zeros.
    pub fn build(spec: &DistributionSpec, sides: usize) -> Result<Self, DistributionError> {
        if sides == 0 {
            return Err(DistributionError::InvalidSideCount);
        }
        let (preset, weights) = match spec {
            DistributionSpec::Preset(preset) => (Some(*preset), preset.weights(sides)?),
            DistributionSpec::Weights(given) => {
                if given.len() > sides {
                    return Err(DistributionError::TooManyWeights {
                        given: given.len(),
                        sides,
                    });
                }
                let mut weights = given.clone();
                weights.resize(sides, 0);
                (None, weights)
            }
        };
        let weight_sum = weights
            .iter()
            .try_fold(0u64, |sum, &w| sum.checked_add(w))
            .ok_or(DistributionError::WeightSumOverflow)?;
        if weight_sum == 0 {
            return Err(DistributionError::ZeroWeightSum);
        }
        Ok(Self {
            preset,
            weights,
            weight_sum,
        })
    }

    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn side_count(&self) -> usize {
        self.weights.len()
    }

    /// Always positive and free of overflow once built.
    pub fn weight_sum(&self) -> u64 {
        self.weight_sum
    }
}
