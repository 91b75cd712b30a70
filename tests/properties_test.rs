//! Property-based tests for dice, boards and games.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use snakesandladders::simulator::{play, Outcome};
use snakesandladders::{
    Board, BoardError, Die, Distribution, DistributionError, DistributionSpec, Game, Preset,
    Shortcut,
};

fn preset_strategy() -> impl Strategy<Value = Preset> {
    prop::sample::select(Preset::ALL.to_vec())
}

/// Non-empty weight list with at least one positive weight.
fn weights_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0..50u64, 1..30)
        .prop_filter("at least one positive weight", |w| w.iter().any(|&x| x > 0))
}

proptest! {
    // 1. Every preset yields one non-negative weight per side with a positive sum
    #[test]
    fn preset_weights_cover_every_side(preset in preset_strategy(), sides in 1..40usize) {
        match Distribution::build(&DistributionSpec::Preset(preset), sides) {
            Ok(distribution) => {
                prop_assert_eq!(distribution.side_count(), sides);
                prop_assert!(distribution.weight_sum() > 0);
            }
            Err(err) => {
                prop_assert_eq!(preset, Preset::TwoDice);
                prop_assert_eq!(err, DistributionError::OddSideCountForTwoDice(sides));
            }
        }
    }

    // 2. Die probabilities sum to one
    #[test]
    fn die_probabilities_sum_to_one(weights in weights_strategy()) {
        let sides = weights.len();
        let distribution = Distribution::build(&DistributionSpec::Weights(weights), sides).unwrap();
        let die = Die::from_distribution(&distribution);
        let total: f64 = die.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total={total}");
    }

    // 3. Rolls stay in range and never hit a zero-weight side
    #[test]
    fn rolls_respect_weights(weights in weights_strategy(), seed in any::<u64>()) {
        let sides = weights.len();
        let distribution =
            Distribution::build(&DistributionSpec::Weights(weights.clone()), sides).unwrap();
        let die = Die::from_distribution(&distribution);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..200 {
            let side = die.roll(&mut rng);
            prop_assert!((1..=sides).contains(&side));
            prop_assert!(weights[side - 1] > 0, "rolled zero-weight side {side}");
        }
    }

    // 4. Too many weights are always rejected
    #[test]
    fn too_many_weights_rejected(weights in weights_strategy()) {
        let sides = weights.len() - 1;
        prop_assert!(Distribution::build(&DistributionSpec::Weights(weights), sides).is_err());
    }

    // 5. Shortcuts touching the last cell are rejected
    #[test]
    fn last_cell_shortcut_rejected(width in 2..20usize, height in 2..20usize, other in 1..4usize) {
        let last = width * height;
        for shortcut in [Shortcut::new(last, other), Shortcut::new(other, last)] {
            prop_assert_eq!(
                Board::with_dimensions(width, height, &[shortcut]),
                Err(BoardError::EndsOnLastCell(shortcut))
            );
        }
    }

    // 6. Self loops are rejected
    #[test]
    fn self_loop_rejected(cell in 1..99usize) {
        let shortcut = Shortcut::new(cell, cell);
        prop_assert_eq!(
            Board::build(100, &[shortcut]),
            Err(BoardError::SelfLoop(shortcut))
        );
    }

    // 7. Every game ends within the dice limit, won or aborted
    #[test]
    fn games_terminate(
        preset in preset_strategy(),
        half_sides in 1..6usize,
        exact_ending in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let sides = half_sides * 2;
        let distribution = Distribution::build(&DistributionSpec::Preset(preset), sides).unwrap();
        let board = Board::build(
            100,
            &[
                Shortcut::new(27, 5),
                Shortcut::new(40, 3),
                Shortcut::new(99, 41),
                Shortcut::new(4, 25),
                Shortcut::new(42, 63),
            ],
        )
        .unwrap();
        let game = Game::new(board, Die::from_distribution(&distribution), exact_ending);
        let dice_limit = 2_000;
        let result = play(&game, dice_limit, &mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert!(result.dice_rolled.len() <= dice_limit);
        if result.outcome == Outcome::Aborted {
            prop_assert_eq!(result.dice_rolled.len(), dice_limit);
        } else {
            prop_assert!(!result.dice_rolled.is_empty());
        }
        prop_assert!(result.dice_rolled.iter().all(|s| (1..=sides).contains(s)));
        prop_assert_eq!(result.shortcut_uses.len(), 5);
    }
}
