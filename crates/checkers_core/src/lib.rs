pub mod board;
pub mod config;
pub mod game;
pub mod jumps;
pub mod types;

// Re-export the rules and turn controller
pub use board::*;
pub use config::*;
pub use game::*;
pub use jumps::{find_capture_chain, CaptureChain, CaptureStep};
pub use types::*;

// =============================================================================
// Opponent Trait
// =============================================================================

/// A move as a (from, to) pair of squares.
pub type MovePair = (Position, Position);

/// Trait for the automated side.
///
/// The turn controller calls [`Opponent::choose_move`] synchronously and
/// commits whatever it returns; any pacing delay belongs to the caller.
pub trait Opponent: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// Returns `None` when `side` has no legal move.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<MovePair>;

    /// Returns the opponent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
