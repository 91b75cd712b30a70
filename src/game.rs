//! A validated, playable game: board, die and ending rule.

use crate::board::Board;
use crate::config::GameConfig;
use crate::die::Die;
use crate::distribution::Distribution;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub board: Board,
    pub die: Die,
    pub exact_ending: bool,
}

impl Game {
    pub fn new(board: Board, die: Die, exact_ending: bool) -> Self {
        Self {
            board,
            die,
            exact_ending,
        }
    }

    /// Validate `config` and build its board and die.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let distribution = Distribution::build(&config.distribution, config.die_sides)?;
        let board = Board::with_dimensions(config.width, config.height, &config.shortcuts)?;
        log::debug!(
            "built {}x{} board with {} shortcuts and a {}-sided {} die",
            config.width,
            config.height,
            board.shortcut_count(),
            distribution.side_count(),
            config.distribution
        );
        Ok(Self::new(
            board,
            Die::from_distribution(&distribution),
            config.exact_ending,
        ))
    }

    pub fn last_cell(&self) -> usize {
        self.board.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Shortcut;
    use crate::distribution::{DistributionSpec, Preset};
    use crate::error::{BoardError, DistributionError};

    #[test]
    fn test_from_default_config() {
        let game = Game::from_config(&GameConfig::default()).unwrap();
        assert_eq!(game.last_cell(), 100);
        assert_eq!(game.die.side_count(), 6);
        assert!(!game.exact_ending);
    }

    #[test]
    fn test_distribution_errors_surface() {
        let config = GameConfig {
            die_sides: 7,
            distribution: DistributionSpec::Preset(Preset::TwoDice),
            ..Default::default()
        };
        assert!(matches!(
            Game::from_config(&config),
            Err(ConfigError::Distribution(
                DistributionError::OddSideCountForTwoDice(7)
            ))
        ));
    }

    #[test]
    fn test_huge_weights_are_rejected_not_summed() {
        let config = GameConfig {
            die_sides: 2,
            distribution: "18446744073709551615,1".parse().unwrap(),
            ..Default::default()
        };
        assert!(matches!(
            Game::from_config(&config),
            Err(ConfigError::Distribution(
                DistributionError::WeightSumOverflow
            ))
        ));
    }

    #[test]
    fn test_board_errors_surface() {
        let config = GameConfig {
            width: 3,
            height: 3,
            shortcuts: vec![Shortcut::new(4, 9)],
            ..Default::default()
        };
        assert!(matches!(
            Game::from_config(&config),
            Err(ConfigError::Board(BoardError::EndsOnLastCell(_)))
        ));
    }
}
