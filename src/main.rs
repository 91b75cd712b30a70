//! Snakes and ladders simulator CLI.
//!
//! Usage:
//!   cargo run -- [OPTIONS] [SHORTCUTS]...
//!
//! Examples:
//!   cargo run                                   # 1000 games on a plain 10x10 board
//!   cargo run -- -d twodice -s 12 4-25 40-3     # two six-sided dice, one ladder, one snake
//!   cargo run -- -c board.json -n 5000 --seed 42 --json=report.json
//!   cargo run -- --roll-test 100000 -d upstairs # check the die only

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snakesandladders::simulator::{roll_test_text, run_simulation, Statistics};
use snakesandladders::{ConfigOverrides, DistributionSpec, Game, GameConfig, Shortcut};
use std::path::PathBuf;
use std::process::ExitCode;

/// Simulate snakes and ladders games and report statistics.
#[derive(Debug, Parser)]
#[command(name = "snakesandladders", version)]
struct Cli {
    /// JSON config file; command line options override its values
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Board width
    #[arg(short = 'x', long, value_parser = parse_count(2))]
    width: Option<usize>,

    /// Board height
    #[arg(short = 'y', long, value_parser = parse_count(2))]
    height: Option<usize>,

    /// Number of die sides
    #[arg(short = 's', long = "die-sides", value_parser = parse_count(1))]
    die_sides: Option<usize>,

    /// The last cell must be hit exactly to win
    #[arg(short = 'e', long = "exact-ending")]
    exact_ending: bool,

    /// uniform, twodice, upstairs, downstairs or weights like 1,2,3
    #[arg(short = 'd', long)]
    distribution: Option<DistributionSpec>,

    /// Number of games to simulate
    #[arg(short = 'n', long, value_parser = parse_count(1))]
    simulations: Option<usize>,

    /// Rolls a game may use before it is aborted
    #[arg(short = 'l', long = "dice-limit", value_parser = parse_count(1))]
    dice_limit: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Only roll the die N times and print the side frequencies
    #[arg(long = "roll-test", value_name = "N")]
    roll_test: Option<u64>,

    /// Also write the statistics as JSON, e.g. --json=out.json (default: sim_report_<timestamp>.json)
    #[arg(long, value_name = "FILE", require_equals = true)]
    json: Option<Option<PathBuf>>,

    /// Snakes and ladders as <src>-<dst>, e.g. 4-25 (ladder) or 40-3 (snake)
    shortcuts: Vec<Shortcut>,
}

/// Count of at least `min`, rejected when it does not fit in a `usize`.
fn parse_count(min: u64) -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(min..)
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            die_sides: self.die_sides,
            exact_ending: self.exact_ending,
            distribution: self.distribution.clone(),
            shortcuts: self.shortcuts.clone(),
            simulations: self.simulations,
            dice_limit: self.dice_limit,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let base = match &cli.config_file {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    let config = base.merge(cli.overrides());
    let game = Game::from_config(&config)?;

    if let Some(rolls) = cli.roll_test {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let histogram = game.die.histogram(rolls, &mut rng);
        println!("{}", roll_test_text(&game.die, &histogram));
        return Ok(());
    }

    println!("Configuration:");
    println!(
        "  Board:          {}x{} ({} cells)",
        config.width,
        config.height,
        config.cell_count()
    );
    println!("  Die:            {} sides, {}", config.die_sides, config.distribution);
    println!("  Exact Ending:   {}", config.exact_ending);
    println!("  Shortcuts:      {}", game.board.shortcut_count());
    println!("  Simulations:    {}", config.simulations);
    println!("  Dice Limit:     {}", config.dice_limit);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Simulating...");
    println!();

    let results = run_simulation(&game, &config.sim_config());
    let stats = Statistics::analyze(&game.board, config.dice_limit, &results)?;

    println!("{}", stats.to_text());

    if let Some(path) = &cli.json {
        let path = path.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "sim_report_{}.json",
                chrono::Utc::now().format("%Y%m%d_%H%M%S")
            ))
        });
        std::fs::write(&path, stats.to_json())?;
        println!("JSON report saved to: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_counts_parse_into_overrides() {
        let cli = Cli::try_parse_from([
            "snakesandladders",
            "-x",
            "4",
            "-y",
            "5",
            "-n",
            "300",
            "-l",
            "50",
            "-e",
            "4-12",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.width, Some(4));
        assert_eq!(overrides.height, Some(5));
        assert_eq!(overrides.simulations, Some(300));
        assert_eq!(overrides.dice_limit, Some(50));
        assert!(overrides.exact_ending);
        assert_eq!(overrides.shortcuts, vec![Shortcut::new(4, 12)]);
    }

    #[test]
    fn test_counts_out_of_range_are_rejected() {
        assert!(Cli::try_parse_from(["snakesandladders", "-x", "1"]).is_err());
        assert!(Cli::try_parse_from(["snakesandladders", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["snakesandladders", "-l", "18446744073709551616"]).is_err());
        assert!(Cli::try_parse_from(["snakesandladders", "-s", "-3"]).is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn test_counts_beyond_usize_are_rejected() {
        assert!(Cli::try_parse_from(["snakesandladders", "-n", "4294967296"]).is_err());
    }
}
