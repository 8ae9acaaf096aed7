//! Match runner for playing games between opponents

use checkers_core::{Board, Opponent, Outcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::results::{GameRecord, GameResult, MatchReport, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Half-moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Print progress during match
    pub verbose: bool,
    /// Seed for the opponents' random sources, recorded for reproduction
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_sides: true,
            verbose: true,
            seed: None,
        }
    }
}

/// Runs matches between two opponents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two opponents
    ///
    /// Results are scored from opponent1's perspective
    pub fn run_match(
        &self,
        opponent1: &mut dyn Opponent,
        opponent2: &mut dyn Opponent,
    ) -> MatchReport {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate sides if configured
            let opponent1_first = !self.config.alternate_sides || game_num % 2 == 0;
            let opponent1_side = if opponent1_first {
                Side::First
            } else {
                Side::Second
            };

            let (outcome, plies) = if opponent1_first {
                self.play_game(opponent1, opponent2)
            } else {
                self.play_game(opponent2, opponent1)
            };

            let game_result = GameResult::for_side(outcome, opponent1_side);
            result.record(game_result);
            games.push(GameRecord {
                opponent1_side,
                outcome,
                plies,
            });

            if self.config.verbose {
                let side = if opponent1_first { "F" } else { "S" };
                let score = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) in {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    score,
                    side,
                    plies,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        MatchReport {
            opponent1: opponent1.name().to_string(),
            opponent2: opponent2.name().to_string(),
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game, returns the outcome and the number of plies played
    pub fn play_game(
        &self,
        first: &mut dyn Opponent,
        second: &mut dyn Opponent,
    ) -> (Outcome, u32) {
        let mut board = Board::new();
        first.new_game();
        second.new_game();
        let mut side = Side::First;

        for ply in 0..self.config.max_moves {
            let opponent: &mut dyn Opponent = match side {
                Side::First => &mut *first,
                Side::Second => &mut *second,
            };

            let Some((from, to)) = opponent.choose_move(&board, side) else {
                // Side to move is stuck
                debug!(ply, ?side, "no legal move");
                return (Outcome::Draw, ply);
            };

            if !board.is_side_piece(from, side) || !board.try_move(from, to, true) {
                warn!(opponent = opponent.name(), %from, %to, "illegal move, forfeiting");
                return (Outcome::win_for(side.other()), ply);
            }

            if board.count(side.other()) == 0 {
                return (Outcome::win_for(side), ply + 1);
            }
            side = side.other();
        }

        // Ply limit reached
        (Outcome::Draw, self.config.max_moves)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    opponent1: &mut dyn Opponent,
    opponent2: &mut dyn Opponent,
    num_games: u32,
) -> MatchReport {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(opponent1, opponent2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
