//! Text and JSON renderings of simulation statistics.

use super::statistics::{Statistics, ValueStats};
use crate::die::Die;

fn value_row(label: &str, v: &ValueStats) -> String {
    format!(
        "  {:<10} {:>10} {:>10} {:>10} {:>12.3}\n",
        label, v.sum, v.min, v.max, v.avg
    )
}

fn value_header(label: &str) -> String {
    format!(
        "  {:<10} {:>10} {:>10} {:>10} {:>12}\n",
        label, "SUM", "MIN", "MAX", "AVG"
    )
}

impl Statistics {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 SNAKES AND LADDERS SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Games: {} total, {} won, {} aborted\n",
            self.simulations, self.wins, self.losses
        ));
        report.push_str(&format!(
            "  {} aborted at the dice limit of {} rolls\n",
            self.limit_hits, self.dice_limit
        ));
        if self.failures > 0 {
            report.push_str(&format!(
                "  ⚠️  {} simulations failed; they count as aborted but not in the dice or shortcut figures\n",
                self.failures
            ));
        }
        report.push_str(&format!(
            "  Win Rate:   {:>8.3}%\n  Loss Rate:  {:>8.3}%\n\n",
            self.win_rate, self.loss_rate
        ));

        report.push_str("── DICE ─────────────────────────────────────────────────────────\n");
        report.push_str(&value_header(""));
        report.push_str(&value_row("rolls", &self.dice));
        report.push('\n');
        match &self.shortest_win {
            Some(sequence) => {
                let rolls: Vec<String> = sequence.iter().map(|s| s.to_string()).collect();
                report.push_str(&format!(
                    "  Shortest win took {} rolls: {}\n\n",
                    sequence.len(),
                    rolls.join(", ")
                ));
            }
            None => report.push_str("  No shortest roll sequence, every game was aborted.\n\n"),
        }

        report.push_str("── SHORTCUT USAGE ───────────────────────────────────────────────\n");
        report.push_str(&value_header(""));
        report.push_str(&value_row("all", &self.shortcut_uses));
        report.push_str(&value_row("snakes", &self.snake_uses));
        report.push_str(&value_row("ladders", &self.ladder_uses));
        report.push_str(&format!(
            "\n  Snakes Rate:  {:>8.3}%\n  Ladders Rate: {:>8.3}%\n\n",
            self.snake_rate, self.ladder_rate
        ));

        if !self.shortcuts.is_empty() {
            report.push_str("── PER SHORTCUT ─────────────────────────────────────────────────\n");
            report.push_str(&value_header("shortcut"));
            for s in &self.shortcuts {
                report.push_str(&value_row(&format!("{} {}", s.kind, s.shortcut), &s.uses));
            }
            report.push('\n');
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Expected and observed frequency of each die side.
pub fn roll_test_text(die: &Die, histogram: &[u64]) -> String {
    let total: u64 = histogram.iter().sum();
    let mut report = format!("{}-sided die, {} rolls\n", die.side_count(), total);
    report.push_str("  SIDE   EXPECTED   OBSERVED        COUNT\n");
    for (i, (p, count)) in die.probabilities().iter().zip(histogram).enumerate() {
        let observed = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64
        };
        report.push_str(&format!(
            "  {:>4}  {:>8.3}%  {:>8.3}%  {:>11}\n",
            i + 1,
            p * 100.0,
            observed * 100.0,
            count
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Shortcut};
    use crate::distribution::{Distribution, DistributionSpec};
    use crate::simulator::simulation::{Outcome, SimulationResult};

    fn stats() -> Statistics {
        let board = Board::build(20, &[Shortcut::new(3, 15), Shortcut::new(18, 2)]).unwrap();
        let results = vec![
            SimulationResult {
                outcome: Outcome::Won,
                dice_rolled: vec![3, 4, 1],
                shortcut_uses: vec![1, 0],
                failure: None,
            },
            SimulationResult::failed(2, "boom"),
        ];
        Statistics::analyze(&board, 100, &results).unwrap()
    }

    #[test]
    fn test_text_report_sections() {
        let text = stats().to_text();
        assert!(text.contains("Games: 2 total, 1 won, 1 aborted"));
        assert!(text.contains("0 aborted at the dice limit of 100 rolls"));
        assert!(text.contains("1 simulations failed"));
        assert!(text.contains("Shortest win took 3 rolls: 3, 4, 1"));
        assert!(text.contains("ladder 3-15"));
        assert!(text.contains("snake 18-2"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&stats().to_json()).unwrap();
        assert_eq!(json["wins"], 1);
        assert_eq!(json["failures"], 1);
        assert_eq!(json["dice_limit"], 100);
        assert_eq!(json["limit_hits"], 0);
        assert_eq!(json["shortest_win"], serde_json::json!([3, 4, 1]));
        assert_eq!(json["shortcuts"][0]["shortcut"], "3-15");
        assert_eq!(json["shortcuts"][1]["kind"], "snake");
    }

    #[test]
    fn test_roll_test_text() {
        let distribution = Distribution::build(&DistributionSpec::Weights(vec![1, 3]), 2).unwrap();
        let die = Die::from_distribution(&distribution);
        let text = roll_test_text(&die, &[25, 75]);
        assert!(text.contains("2-sided die, 100 rolls"));
        assert!(text.contains("75.000%"));
    }
}
