//! Capture-chain search.
//!
//! The search follows a single frontier: at each cursor square it tries both
//! forward diagonal jumps, records every one that is possible, then moves the
//! cursor to the landing square of the last jump it recorded. It stops as soon as
//! a jump lands on the requested destination. Branches that were recorded but not
//! followed are never explored, so a destination reachable only through such a
//! branch is reported as unreachable.

use crate::board::Board;
use crate::types::Position;

/// One jump inside a capture chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureStep {
    pub from: Position,
    pub to: Position,
    pub captured: Position,
    /// Index of the step in the same chain that landed on `from`.
    pub previous: Option<usize>,
}

/// Arena of the jumps discovered by one search, ending at `last`.
#[derive(Clone, Debug)]
pub struct CaptureChain {
    steps: Vec<CaptureStep>,
    last: usize,
}

impl CaptureChain {
    pub fn origin(&self) -> Position {
        let mut step = &self.steps[self.last];
        while let Some(prev) = step.previous {
            step = &self.steps[prev];
        }
        step.from
    }

    pub fn destination(&self) -> Position {
        self.steps[self.last].to
    }

    /// Every jump discovered during the search, including dead branches.
    pub fn discovered(&self) -> &[CaptureStep] {
        &self.steps
    }

    /// Jumps on the path to the destination, last jump first.
    pub fn path(&self) -> impl Iterator<Item = &CaptureStep> + '_ {
        let mut next = Some(self.last);
        std::iter::from_fn(move || {
            let step = &self.steps[next?];
            next = step.previous;
            Some(step)
        })
    }

    /// Squares emptied by committing this chain.
    pub fn captured(&self) -> Vec<Position> {
        self.path().map(|s| s.captured).collect()
    }
}

/// Search for a capture chain carrying the piece on `from` to `to`.
///
/// Returns `None` when `from` is empty or the frontier runs dry before reaching
/// `to`. Never touches the board.
pub fn find_capture_chain(board: &Board, from: Position, to: Position) -> Option<CaptureChain> {
    let side = board.piece_at(from).side()?;
    let forward = side.forward();
    let mut steps: Vec<CaptureStep> = Vec::new();
    let mut cursor = from;

    loop {
        let mut accepted = false;
        for dx in [-1, 1] {
            let captured = cursor + Position::new(dx, forward);
            let landing = cursor + Position::new(2 * dx, 2 * forward);
            if !landing.in_bounds()
                || !board.piece_at(landing).is_empty()
                || !board.is_side_piece(captured, side.other())
            {
                continue;
            }

            let previous = steps.iter().position(|s| s.to == cursor);
            steps.push(CaptureStep {
                from: cursor,
                to: landing,
                captured,
                previous,
            });
            accepted = true;

            if landing == to {
                let last = steps.len() - 1;
                return Some(CaptureChain { steps, last });
            }
        }

        if !accepted {
            return None;
        }
        // Rows strictly advance each round, so this terminates within the board height.
        cursor = steps[steps.len() - 1].to;
    }
}
