//! Random Checkers Opponent
//!
//! Picks one of its pieces uniformly at random and plays the first legal
//! destination it finds for it. Useful for:
//! - The automated side in interactive games
//! - Baseline self-play in the match runner
//! - Stress testing the capture-chain search

use checkers_core::{Board, MovePair, Opponent, Position, Side, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;


/// An opponent that starts from a random piece and takes the first legal
/// destination, moving on to the next piece when one is stuck.
///
/// The random source is injectable so tests can make the choice deterministic.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomOpponent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOpponent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

/// First legal destination for the piece on `from`, scanning rows from the
/// far edge back towards the piece (its own row excluded), columns left to right.
pub fn first_fit_destination(board: &Board, from: Position, side: Side) -> Option<Position> {
    let rows: Vec<i8> = match side {
        Side::First => (from.y + 1..BOARD_SIZE).rev().collect(),
        Side::Second => (0..from.y).collect(),
    };
    rows.into_iter()
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| Position::new(x, y)))
        .find(|&to| board.is_legal(from, to))
}

impl<R: Rng + Send> Opponent for RandomOpponent<R> {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<MovePair> {
        let pieces = board.pieces(side);
        if pieces.is_empty() {
            return None;
        }

        // Each piece is tried at most once, so a side with no legal move
        // gets None instead of spinning forever.
        let start = self.rng.gen_range(0..pieces.len());
        let choice = (0..pieces.len())
            .map(|i| pieces[(start + i) % pieces.len()])
            .find_map(|from| first_fit_destination(board, from, side).map(|to| (from, to)));

        trace!(?side, start, ?choice, "random opponent choice");
        choice
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
