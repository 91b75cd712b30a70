//! Snakes and ladders simulator library.
//!
//! Models a configurable snakes and ladders game (board size, weighted die,
//! shortcuts, exact ending rule) and simulates it many times concurrently to
//! gather statistics about game length and shortcut usage.

pub mod board;
pub mod config;
pub mod die;
pub mod distribution;
pub mod error;
pub mod game;
pub mod simulator;

pub use board::{Board, Shortcut, ShortcutKind};
pub use config::{ConfigOverrides, GameConfig};
pub use die::Die;
pub use distribution::{Distribution, DistributionSpec, Preset};
pub use error::{AnalysisError, BoardError, ConfigError, DistributionError};
pub use game::Game;
pub use simulator::{run_simulation, SimConfig, SimulationResult, Simulator, Statistics};
