//! Runs many games concurrently, one OS thread per game.
//!
//! All workers share the [`Game`] by reference; it is never mutated, so no
//! locking is needed. Each worker owns its own random stream and simulation
//! state. Results come back in worker order no matter which thread finishes
//! first.

use super::config::SimConfig;
use super::simulation::{play, SimulationResult};
use crate::game::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::any::Any;
use std::thread;
use std::time::Instant;

/// Spreads worker indices over the whole u64 range (odd multiplier, so it is a bijection).
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Simulator<'a> {
    game: &'a Game,
    config: SimConfig,
}

impl<'a> Simulator<'a> {
    pub fn new(game: &'a Game, config: SimConfig) -> Self {
        Self { game, config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play every game to completion and collect the results.
    pub fn run(&self) -> Vec<SimulationResult> {
        let game = self.game;
        let dice_limit = self.config.dice_limit;
        self.run_workers(move |rng| play(game, dice_limit, rng))
    }

    /// Spawn one thread per run, each executing `work` with its own seeded stream,
    /// and wait for all of them.
    fn run_workers<F>(&self, work: F) -> Vec<SimulationResult>
    where
        F: Fn(&mut ChaCha8Rng) -> SimulationResult + Sync,
    {
        let num_runs = self.config.num_runs;
        let shortcut_count = self.game.board.shortcut_count();
        let base_seed = self.config.seed.unwrap_or_else(clock_seed);
        let started = Instant::now();
        log::debug!("spawning {num_runs} simulation workers");

        let results: Vec<SimulationResult> = thread::scope(|scope| {
            let work = &work;
            let handles: Vec<_> = (0..num_runs)
                .map(|idx| {
                    let seed = worker_seed(base_seed, self.config.seed.is_some(), idx);
                    thread::Builder::new()
                        .name(format!("simulation-{idx}"))
                        .spawn_scoped(scope, move || {
                            let mut rng = ChaCha8Rng::seed_from_u64(seed);
                            work(&mut rng)
                        })
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(idx, handle)| match handle {
                    Ok(handle) => handle.join().unwrap_or_else(|panic| {
                        let reason = panic_message(panic.as_ref());
                        log::warn!("simulation {idx} failed: {reason}");
                        SimulationResult::failed(shortcut_count, reason)
                    }),
                    Err(err) => {
                        log::warn!("unable to start simulation {idx}: {err}");
                        SimulationResult::failed(shortcut_count, err.to_string())
                    }
                })
                .collect()
        });

        let wins = results.iter().filter(|r| r.is_win()).count();
        log::info!(
            "{} simulations finished in {:.2?} ({} won)",
            results.len(),
            started.elapsed(),
            wins
        );
        results
    }
}

/// Run `config.num_runs` games of `game` and return their results.
pub fn run_simulation(game: &Game, config: &SimConfig) -> Vec<SimulationResult> {
    Simulator::new(game, config.clone()).run()
}

fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}

/// Seed for worker `idx`. Explicit seeds advance by one per worker; clock seeds
/// are mixed with the spread index so workers started together never share a stream.
fn worker_seed(base: u64, explicit: bool, idx: usize) -> u64 {
    if explicit {
        base.wrapping_add(idx as u64)
    } else {
        base ^ (idx as u64).wrapping_add(1).wrapping_mul(SEED_SPREAD)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Shortcut};
    use crate::config::GameConfig;
    use crate::simulator::simulation::Outcome;
    use std::collections::HashSet;

    fn game() -> Game {
        Game::from_config(&GameConfig {
            shortcuts: vec![Shortcut::new(4, 25), Shortcut::new(40, 3)],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_returns_one_result_per_run() {
        let game = game();
        let results = run_simulation(&game, &SimConfig::seeded(25, 42));
        assert_eq!(results.len(), 25);
        for result in &results {
            assert!(result.failure.is_none());
            assert_eq!(result.shortcut_uses.len(), 2);
            assert!(result.dice_count() <= 10_000);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let game = game();
        let a = run_simulation(&game, &SimConfig::seeded(10, 7));
        let b = run_simulation(&game, &SimConfig::seeded(10, 7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_workers_use_distinct_streams() {
        let seeds: HashSet<u64> = (0..1000).map(|i| worker_seed(123, false, i)).collect();
        assert_eq!(seeds.len(), 1000);
        assert_eq!(worker_seed(10, true, 5), 15);
    }

    #[test]
    fn test_failed_worker_is_isolated() {
        let game = Game::new(
            Board::build(10, &[Shortcut::new(2, 7)]).unwrap(),
            game().die,
            false,
        );
        let sim = Simulator::new(&game, SimConfig::seeded(4, 1));
        let counter = std::sync::atomic::AtomicUsize::new(0);
        let results = sim.run_workers(|rng| {
            if counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                panic!("boom");
            }
            play(&game, 100, rng)
        });

        assert_eq!(results.len(), 4);
        let failed: Vec<_> = results.iter().filter(|r| r.is_failure()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].outcome, Outcome::Aborted);
        assert_eq!(failed[0].failure.as_deref(), Some("boom"));
        assert_eq!(failed[0].shortcut_uses, vec![0]);
        assert!(results
            .iter()
            .filter(|r| !r.is_failure())
            .all(|r| r.outcome == Outcome::Won));
    }
}
