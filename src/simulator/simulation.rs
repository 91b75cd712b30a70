//! A single playthrough.
//!
//! The player starts before the first cell (position 0) and rolls until it
//! reaches the last cell or runs out of rolls:
//!
//! - landing exactly on the last cell wins
//! - overshooting it wins too, unless the game requires an exact ending, in
//!   which case the player stays put and the roll is wasted
//! - landing on the start of a shortcut moves the player to its end

use crate::game::Game;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    Running,
    Won,
    Aborted,
}

impl SimulationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    /// The dice limit was reached, or the worker failed.
    Aborted,
}

/// Everything a finished game leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub outcome: Outcome,
    /// Every rolled side, in order.
    pub dice_rolled: Vec<usize>,
    /// Uses per shortcut, indexed like [`Board::shortcuts`](crate::board::Board::shortcuts).
    pub shortcut_uses: Vec<u64>,
    /// Set when the worker running this game failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl SimulationResult {
    /// Placeholder for a game whose worker never produced a result.
    pub fn failed(shortcut_count: usize, reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Aborted,
            dice_rolled: Vec::new(),
            shortcut_uses: vec![0; shortcut_count],
            failure: Some(reason.into()),
        }
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn dice_count(&self) -> usize {
        self.dice_rolled.len()
    }
}

/// Mutable state of one game in progress.
#[derive(Debug, Clone)]
pub struct Simulation {
    position: usize,
    dice_rolled: Vec<usize>,
    shortcut_uses: Vec<u64>,
    state: SimulationState,
}

impl Simulation {
    pub fn new(shortcut_count: usize) -> Self {
        Self {
            position: 0,
            dice_rolled: Vec::new(),
            shortcut_uses: vec![0; shortcut_count],
            state: SimulationState::Running,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn dice_rolled(&self) -> &[usize] {
        &self.dice_rolled
    }

    /// Advance by one roll. Does nothing once the game is over.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        game: &Game,
        dice_limit: usize,
        rng: &mut R,
    ) -> SimulationState {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.dice_rolled.len() >= dice_limit {
            self.state = SimulationState::Aborted;
            return self.state;
        }

        let side = game.die.roll(rng);
        self.dice_rolled.push(side);

        let last_cell = game.last_cell();
        let target = self.position + side;
        if target == last_cell || (target > last_cell && !game.exact_ending) {
            self.position = last_cell;
            self.state = SimulationState::Won;
            return self.state;
        }
        if target > last_cell {
            // overshoot with exact ending: stay put
            return self.state;
        }

        self.position = target;
        if let Some((idx, dst)) = game.board.shortcut_at(target) {
            self.position = dst;
            self.shortcut_uses[idx] += 1;
        }
        self.state
    }

    /// Play until the game is won or the dice limit is reached.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        game: &Game,
        dice_limit: usize,
        rng: &mut R,
    ) -> SimulationState {
        while !self.state.is_terminal() {
            self.step(game, dice_limit, rng);
        }
        self.state
    }

    /// Freeze the finished game into a result.
    ///
    /// A game still running is reported as aborted.
    pub fn into_result(self) -> SimulationResult {
        let outcome = match self.state {
            SimulationState::Won => Outcome::Won,
            SimulationState::Running | SimulationState::Aborted => Outcome::Aborted,
        };
        SimulationResult {
            outcome,
            dice_rolled: self.dice_rolled,
            shortcut_uses: self.shortcut_uses,
            failure: None,
        }
    }
}

/// Play one full game from the start.
pub fn play<R: Rng + ?Sized>(game: &Game, dice_limit: usize, rng: &mut R) -> SimulationResult {
    let mut sim = Simulation::new(game.board.shortcut_count());
    sim.run(game, dice_limit, rng);
    sim.into_result()
}
