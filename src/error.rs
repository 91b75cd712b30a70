//! Error types for game setup and result analysis.

use crate::board::Shortcut;
use std::path::PathBuf;

/// Errors raised while building a die distribution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistributionError {
    #[error("die must have at least one side")]
    InvalidSideCount,

    #[error("twodice distribution needs an even number of die sides, got {0}")]
    OddSideCountForTwoDice(usize),

    #[error("{given} weights given for a {sides}-sided die")]
    TooManyWeights { given: usize, sides: usize },

    #[error("distribution weights sum to 0")]
    ZeroWeightSum,

    #[error("distribution weights sum to more than {}", u64::MAX)]
    WeightSumOverflow,

    #[error("invalid distribution weight '{0}'")]
    InvalidWeight(String),

    #[error("empty distribution")]
    Empty,
}

/// Errors raised while building a board from its shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board {width}x{height} is too small, must be at least 2x2")]
    InvalidDimensions { width: usize, height: usize },

    #[error("shortcut {0} starts and ends in the same cell")]
    SelfLoop(Shortcut),

    #[error("{} {shortcut} leaves the board of {cell_count} cells", .shortcut.kind())]
    OutOfRange { shortcut: Shortcut, cell_count: usize },

    #[error("shortcut {0} touches the last cell")]
    EndsOnLastCell(Shortcut),

    #[error("{} {shortcut} overlaps with {} {other}", .shortcut.kind(), .other.kind())]
    OverlappingShortcut { shortcut: Shortcut, other: Shortcut },

    #[error("invalid shortcut '{0}', expected <src>-<dst> with both cells > 0")]
    InvalidShortcut(String),
}

/// Errors raised while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid distribution: {0}")]
    Distribution(#[from] DistributionError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("simulation count must be at least 1")]
    InvalidSimulationCount,

    #[error("dice limit must be at least 1")]
    InvalidDiceLimit,

    #[error("unable to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reducing simulation results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("no simulations to analyze")]
    NoSimulations,
}
