//! Monte Carlo simulation of snakes and ladders games.
//!
//! Plays thousands of independent games concurrently to measure:
//! - How many rolls a game takes
//! - How often games hit the dice limit
//! - How often each snake and ladder is used

mod config;
mod report;
mod runner;
mod simulation;
mod statistics;

pub use config::SimConfig;
pub use report::roll_test_text;
pub use runner::{run_simulation, Simulator};
pub use simulation::{play, Outcome, Simulation, SimulationResult, SimulationState};
pub use statistics::{ShortcutStats, Statistics, ValueStats};
