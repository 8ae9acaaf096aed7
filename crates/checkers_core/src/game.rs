//! Turn controller
//!
//! Drives one game: routes human intents to the board cursors, asks the
//! automated side for its move, and decides when the game is over.

use crate::board::Board;
use crate::types::*;
use crate::{MovePair, Opponent};
use tracing::{debug, info, warn};

/// What the human is currently choosing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanPhase {
    SelectingPiece,
    SelectingDestination,
}

/// Whose turn it is. Only the human side has a selection phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Human(HumanPhase),
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing(Turn),
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    human: Side,
    illegal_attempt: bool,
}

impl Game {
    /// Fresh game from the standard setup. The first side always moves first.
    pub fn new(human: Side) -> Self {
        let mut board = Board::new();
        if let Some(&first) = board.pieces(human).first() {
            board.set_piece_cursor(first);
        }
        Self::from_board(board, human, Side::First)
    }

    /// Resume from an arbitrary board with `to_move` on turn.
    ///
    /// The end-of-game check runs immediately, so a board where one side has
    /// no pieces left starts out finished.
    pub fn from_board(board: Board, human: Side, to_move: Side) -> Self {
        let mut game = Self {
            board,
            state: GameState::Playing(Turn::Opponent),
            human,
            illegal_attempt: false,
        };
        game.begin_turn(to_move);
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn human_side(&self) -> Side {
        self.human
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::Playing(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Set after a rejected destination; cleared by the next confirm that acts.
    ///
    /// A confirm on a square without a human piece is ignored outright, so the
    /// warning stays up until the player actually picks a piece or a square.
    pub fn illegal_attempt(&self) -> bool {
        self.illegal_attempt
    }

    pub fn active_side(&self) -> Option<Side> {
        match self.state {
            GameState::Playing(Turn::Human(_)) => Some(self.human),
            GameState::Playing(Turn::Opponent) => Some(self.human.other()),
            GameState::Finished(_) => None,
        }
    }

    /// One line describing whose turn it is, or how the game ended.
    pub fn status(&self) -> String {
        match self.state {
            GameState::Finished(outcome) => format!("Game over: {}", outcome),
            GameState::Playing(Turn::Opponent) => "Opponent is thinking...".to_string(),
            GameState::Playing(Turn::Human(HumanPhase::SelectingPiece)) => {
                format!("Your move ({}): select a piece", self.human)
            }
            GameState::Playing(Turn::Human(HumanPhase::SelectingDestination)) => {
                format!("Your move ({}): select a destination", self.human)
            }
        }
    }

    pub fn awaiting_opponent(&self) -> bool {
        self.state == GameState::Playing(Turn::Opponent)
    }

    /// Apply one input. Quit always ends a running game; everything else is
    /// ignored unless the human is on turn.
    pub fn handle_intent(&mut self, intent: Intent) {
        let phase = match self.state {
            GameState::Finished(_) => return,
            GameState::Playing(Turn::Opponent) => None,
            GameState::Playing(Turn::Human(phase)) => Some(phase),
        };

        match (intent, phase) {
            (Intent::Quit, _) => self.finish(Outcome::Quit),
            (_, None) => {}
            (Intent::MoveCursor(dir), Some(HumanPhase::SelectingPiece)) => {
                self.board.move_piece_cursor(dir.delta());
            }
            (Intent::MoveCursor(dir), Some(HumanPhase::SelectingDestination)) => {
                self.board.move_destination_cursor(dir.delta());
            }
            (Intent::Confirm, Some(HumanPhase::SelectingPiece)) => self.select_piece(),
            (Intent::Confirm, Some(HumanPhase::SelectingDestination)) => {
                self.submit_destination()
            }
        }
    }

    fn select_piece(&mut self) {
        let cursor = self.board.piece_cursor().position;
        if !self.board.is_side_piece(cursor, self.human) {
            return;
        }
        self.illegal_attempt = false;
        self.board.set_destination_cursor(cursor);
        self.set_turn(Turn::Human(HumanPhase::SelectingDestination));
    }

    fn submit_destination(&mut self) {
        self.illegal_attempt = false;
        let from = self.board.piece_cursor().position;
        let to = self.board.destination_cursor().position;

        if self.board.try_move(from, to, true) {
            self.board.set_piece_cursor(to);
            self.end_turn(self.human);
        } else {
            debug!(%from, %to, "illegal move attempt");
            self.illegal_attempt = true;
            self.set_turn(Turn::Human(HumanPhase::SelectingPiece));
        }
    }

    /// Let the automated side move. Returns the move played, if any.
    ///
    /// Does nothing unless it is the automated side's turn. An opponent with
    /// no move ends the game as a draw; one that proposes an illegal move
    /// forfeits.
    pub fn play_opponent_turn(&mut self, opponent: &mut dyn Opponent) -> Option<MovePair> {
        if !self.awaiting_opponent() {
            return None;
        }
        let side = self.human.other();

        let Some((from, to)) = opponent.choose_move(&self.board, side) else {
            warn!(opponent = opponent.name(), "opponent found no move");
            self.finish(Outcome::Draw);
            return None;
        };

        if !self.board.is_side_piece(from, side) || !self.board.try_move(from, to, true) {
            warn!(opponent = opponent.name(), %from, %to, "opponent proposed an illegal move");
            self.finish(Outcome::win_for(self.human));
            return None;
        }

        self.end_turn(side);
        Some((from, to))
    }

    fn end_turn(&mut self, mover: Side) {
        self.begin_turn(mover.other());
    }

    fn begin_turn(&mut self, to_move: Side) {
        if let Some(outcome) = self.check_game_end(to_move) {
            self.finish(outcome);
        } else if to_move == self.human {
            self.set_turn(Turn::Human(HumanPhase::SelectingPiece));
        } else {
            self.set_turn(Turn::Opponent);
        }
    }

    /// A side with no pieces loses whoever is on turn; otherwise the side about
    /// to move being stuck is a draw, even when the other side could still move.
    fn check_game_end(&self, to_move: Side) -> Option<Outcome> {
        if self.board.count(Side::Second) == 0 {
            Some(Outcome::FirstSideWins)
        } else if self.board.count(Side::First) == 0 {
            Some(Outcome::SecondSideWins)
        } else if !self.board.has_legal_move(to_move) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "game over");
        self.state = GameState::Finished(outcome);
        self.sync_cursors();
    }

    fn set_turn(&mut self, turn: Turn) {
        self.state = GameState::Playing(turn);
        self.sync_cursors();
    }

    fn sync_cursors(&mut self) {
        let (piece, destination) = match self.state {
            GameState::Playing(Turn::Human(HumanPhase::SelectingPiece)) => (true, false),
            GameState::Playing(Turn::Human(HumanPhase::SelectingDestination)) => (true, true),
            GameState::Playing(Turn::Opponent) | GameState::Finished(_) => (false, false),
        };
        self.board.set_piece_cursor_visible(piece);
        self.board.set_destination_cursor_visible(destination);
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
