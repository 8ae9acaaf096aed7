//! Match results storage and reporting

use checkers_core::{Outcome, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchConfig;

/// Result of a single game from opponent 1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Score a finished game for the opponent that played `side`.
    pub fn for_side(outcome: Outcome, side: Side) -> Self {
        match outcome.winner() {
            Some(winner) if winner == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from opponent 1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One game in a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// Side opponent 1 played
    pub opponent1_side: Side,
    pub outcome: Outcome,
    /// Half-moves played before the game ended
    pub plies: u32,
}

/// Complete match report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub opponent1: String,
    pub opponent2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.opponent1, self.opponent2
        ));
        report.push_str(&format!(
            "Config: {} games, {} moves max\n\n",
            self.config.num_games, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<6} {:<8} {:<18} {:>6}\n",
            "Game", "Side", "Outcome", "Plies"
        ));
        report.push_str(&"-".repeat(42));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} {:<8} {:<18} {:>6}\n",
                i + 1,
                game.opponent1_side.to_string(),
                game.outcome.to_string(),
                game.plies
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.opponent1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
