//! Reduction of simulation results into summary statistics.

use super::simulation::SimulationResult;
use crate::board::{Board, Shortcut, ShortcutKind};
use crate::error::AnalysisError;
use serde::Serialize;

/// Sum, minimum, maximum and mean of a set of counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueStats {
    pub sum: u64,
    pub min: u64,
    pub max: u64,
    pub avg: f64,
}

/// Running fold behind [`ValueStats`].
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    sum: u64,
    min: u64,
    max: u64,
    count: u64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            sum: 0,
            min: u64::MAX,
            max: 0,
            count: 0,
        }
    }

    fn add(&mut self, value: u64) {
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.count += 1;
    }

    fn finish(self) -> ValueStats {
        if self.count == 0 {
            return ValueStats {
                sum: 0,
                min: 0,
                max: 0,
                avg: 0.0,
            };
        }
        ValueStats {
            sum: self.sum,
            min: self.min,
            max: self.max,
            avg: self.sum as f64 / self.count as f64,
        }
    }
}

/// Usage of one shortcut across all simulations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcutStats {
    pub shortcut: Shortcut,
    pub kind: ShortcutKind,
    pub uses: ValueStats,
}

/// Aggregated results of a batch of simulations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub simulations: usize,
    pub wins: usize,
    /// Aborted games, including failed workers.
    pub losses: usize,
    /// Games whose worker failed; already counted in `losses` but left out of
    /// the dice and shortcut summaries.
    pub failures: usize,
    /// Rolls each game was allowed before it was aborted.
    pub dice_limit: usize,
    /// Played games that were aborted at the dice limit.
    pub limit_hits: usize,
    /// Percentage of won games.
    pub win_rate: f64,
    /// Percentage of aborted games.
    pub loss_rate: f64,
    /// Rolls per played game.
    pub dice: ValueStats,
    /// Shortest roll sequence that won a game (first one found on ties).
    pub shortest_win: Option<Vec<usize>>,
    /// Shortcut uses per game, all shortcuts together.
    pub shortcut_uses: ValueStats,
    pub snake_uses: ValueStats,
    pub ladder_uses: ValueStats,
    /// Percentage of all shortcut uses that were snakes.
    pub snake_rate: f64,
    /// Percentage of all shortcut uses that were ladders.
    pub ladder_rate: f64,
    /// One entry per board shortcut, in board order.
    pub shortcuts: Vec<ShortcutStats>,
}

impl Statistics {
    /// Reduce `results`, played on `board` with at most `dice_limit` rolls per
    /// game, into statistics.
    pub fn analyze(
        board: &Board,
        dice_limit: usize,
        results: &[SimulationResult],
    ) -> Result<Self, AnalysisError> {
        if results.is_empty() {
            return Err(AnalysisError::NoSimulations);
        }

        let mut wins = 0;
        let mut failures = 0;
        let mut limit_hits = 0;
        let mut dice = Accumulator::new();
        let mut shortest_win: Option<&[usize]> = None;
        let mut all_uses = Accumulator::new();
        let mut snake_uses = Accumulator::new();
        let mut ladder_uses = Accumulator::new();
        let mut per_shortcut = vec![Accumulator::new(); board.shortcut_count()];

        for result in results {
            if result.is_win() {
                wins += 1;
                if shortest_win.map_or(true, |s| result.dice_rolled.len() < s.len()) {
                    shortest_win = Some(result.dice_rolled.as_slice());
                }
            }
            if result.is_failure() {
                failures += 1;
                continue;
            }
            if !result.is_win() && result.dice_count() >= dice_limit {
                limit_hits += 1;
            }
            dice.add(result.dice_count() as u64);

            let mut game_all = 0;
            let mut game_snakes = 0;
            let mut game_ladders = 0;
            for (idx, (acc, shortcut)) in per_shortcut
                .iter_mut()
                .zip(board.shortcuts())
                .enumerate()
            {
                let uses = result.shortcut_uses.get(idx).copied().unwrap_or(0);
                acc.add(uses);
                game_all += uses;
                match shortcut.kind() {
                    ShortcutKind::Snake => game_snakes += uses,
                    ShortcutKind::Ladder => game_ladders += uses,
                }
            }
            all_uses.add(game_all);
            snake_uses.add(game_snakes);
            ladder_uses.add(game_ladders);
        }

        let simulations = results.len();
        let losses = simulations - wins;
        let percent = |part: u64, whole: u64| {
            if whole == 0 {
                0.0
            } else {
                part as f64 / whole as f64 * 100.0
            }
        };

        let shortcut_uses = all_uses.finish();
        let snake_uses = snake_uses.finish();
        let ladder_uses = ladder_uses.finish();

        Ok(Self {
            simulations,
            wins,
            losses,
            failures,
            dice_limit,
            limit_hits,
            win_rate: percent(wins as u64, simulations as u64),
            loss_rate: percent(losses as u64, simulations as u64),
            dice: dice.finish(),
            shortest_win: shortest_win.map(<[usize]>::to_vec),
            shortcut_uses,
            snake_uses,
            ladder_uses,
            snake_rate: percent(snake_uses.sum, shortcut_uses.sum),
            ladder_rate: percent(ladder_uses.sum, shortcut_uses.sum),
            shortcuts: board
                .shortcuts()
                .iter()
                .zip(per_shortcut)
                .map(|(shortcut, acc)| ShortcutStats {
                    shortcut: *shortcut,
                    kind: shortcut.kind(),
                    uses: acc.finish(),
                })
                .collect(),
        })
    }
}
