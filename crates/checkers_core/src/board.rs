use crate::jumps::{find_capture_chain, CaptureChain};
use crate::types::*;
use thiserror::Error;
use tracing::{debug, trace};

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {width} squares, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("unknown glyph {0:?}")]
    UnknownGlyph(char),
    #[error("square {0} is off the board")]
    OutOfBounds(Position),
    #[error("square {0} is a light square and cannot hold a piece")]
    LightSquare(Position),
}

/// A selection cursor and whether the presentation layer should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub position: Position,
    pub visible: bool,
}

/// A validated move, ready to be applied.
#[derive(Clone, Debug)]
pub enum MovePlan {
    Step { from: Position, to: Position },
    Capture(CaptureChain),
}

impl MovePlan {
    pub fn from(&self) -> Position {
        match self {
            MovePlan::Step { from, .. } => *from,
            MovePlan::Capture(chain) => chain.origin(),
        }
    }

    pub fn to(&self) -> Position {
        match self {
            MovePlan::Step { to, .. } => *to,
            MovePlan::Capture(chain) => chain.destination(),
        }
    }

    pub fn captured(&self) -> Vec<Position> {
        match self {
            MovePlan::Step { .. } => Vec::new(),
            MovePlan::Capture(chain) => chain.captured(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [PieceKind; SQUARES],
    counts: [u8; 2],
    piece_cursor: Cursor,
    destination_cursor: Cursor,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard setup: three rows of pieces per side on the dark squares.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for pos in Position::all().filter(|p| p.is_playable()) {
            let kind = if pos.y < SETUP_ROWS {
                PieceKind::FirstSide
            } else if pos.y >= BOARD_SIZE - SETUP_ROWS {
                PieceKind::SecondSide
            } else {
                continue;
            };
            board.put(pos, kind);
        }
        debug_assert_eq!(board.counts, [PIECES_PER_SIDE, PIECES_PER_SIDE]);
        board
    }

    pub fn empty() -> Self {
        Self {
            grid: [PieceKind::Empty; SQUARES],
            counts: [0, 0],
            piece_cursor: Cursor {
                position: Position::new(0, 0),
                visible: true,
            },
            destination_cursor: Cursor {
                position: Position::new(0, 0),
                visible: false,
            },
        }
    }

    /// Parse a diagram of eight rows, top row first (y = 7), using the glyphs
    /// `x` (first side), `o` (second side) and `.` (empty).
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let glyphs: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE as usize {
                return Err(BoardError::RowWidth {
                    row: row_idx,
                    width: glyphs.len(),
                });
            }
            let y = BOARD_SIZE - 1 - row_idx as i8;
            for (x, &c) in glyphs.iter().enumerate() {
                let kind = PieceKind::from_glyph(c).ok_or(BoardError::UnknownGlyph(c))?;
                board.set_piece(Position::new(x as i8, y), kind)?;
            }
        }
        Ok(board)
    }

    /// Piece on `pos`. Squares off the board read as empty.
    pub fn piece_at(&self, pos: Position) -> PieceKind {
        if pos.in_bounds() {
            self.grid[pos.idx()]
        } else {
            PieceKind::Empty
        }
    }

    pub fn is_side_piece(&self, pos: Position, side: Side) -> bool {
        self.piece_at(pos).side() == Some(side)
    }

    /// Place or clear a piece, keeping the piece counts in step with the grid.
    pub fn set_piece(&mut self, pos: Position, kind: PieceKind) -> Result<(), BoardError> {
        if !pos.in_bounds() {
            return Err(BoardError::OutOfBounds(pos));
        }
        if !kind.is_empty() && !pos.is_playable() {
            return Err(BoardError::LightSquare(pos));
        }
        self.remove(pos);
        self.put(pos, kind);
        Ok(())
    }

    pub fn count(&self, side: Side) -> u8 {
        self.counts[side.idx()]
    }

    /// Squares holding `side`'s pieces, row by row from y = 0.
    pub fn pieces(&self, side: Side) -> Vec<Position> {
        Position::all()
            .filter(|&p| self.is_side_piece(p, side))
            .collect()
    }

    // Cursors

    pub fn piece_cursor(&self) -> Cursor {
        self.piece_cursor
    }

    pub fn destination_cursor(&self) -> Cursor {
        self.destination_cursor
    }

    pub fn set_piece_cursor(&mut self, pos: Position) {
        self.piece_cursor.position = pos.clamped();
    }

    pub fn set_destination_cursor(&mut self, pos: Position) {
        self.destination_cursor.position = pos.clamped();
    }

    pub fn move_piece_cursor(&mut self, delta: Position) {
        self.set_piece_cursor(self.piece_cursor.position + delta);
    }

    pub fn move_destination_cursor(&mut self, delta: Position) {
        self.set_destination_cursor(self.destination_cursor.position + delta);
    }

    pub fn set_piece_cursor_visible(&mut self, visible: bool) {
        self.piece_cursor.visible = visible;
    }

    pub fn set_destination_cursor_visible(&mut self, visible: bool) {
        self.destination_cursor.visible = visible;
    }

    // Move legality

    /// Validate a move without touching the board.
    pub fn plan_move(&self, from: Position, to: Position) -> Option<MovePlan> {
        if !to.is_playable() {
            return None;
        }
        let side = self.piece_at(from).side()?;
        let dy = i16::from(to.y) - i16::from(from.y);
        if dy * i16::from(side.forward()) <= 0 {
            return None;
        }
        if !to.in_bounds() {
            return None;
        }

        let dx = i16::from(to.x) - i16::from(from.x);
        if dx.abs() == 1 && dy.abs() == 1 && self.piece_at(to).is_empty() {
            return Some(MovePlan::Step { from, to });
        }

        find_capture_chain(self, from, to).map(MovePlan::Capture)
    }

    pub fn is_legal(&self, from: Position, to: Position) -> bool {
        self.plan_move(from, to).is_some()
    }

    /// Check a move and, when `commit` is set, play it.
    ///
    /// Returns whether a simple move or a capture chain joins `from` to `to`.
    /// With `commit` unset, or when the move is illegal, the board is unchanged.
    pub fn try_move(&mut self, from: Position, to: Position, commit: bool) -> bool {
        let Some(plan) = self.plan_move(from, to) else {
            trace!(%from, %to, "rejected move");
            return false;
        };
        if commit {
            self.apply(plan);
        }
        true
    }

    /// Apply a plan produced by [`Board::plan_move`] on this same board.
    ///
    /// Only reachable through [`Board::try_move`], so every plan is validated
    /// against the current grid before it lands here.
    fn apply(&mut self, plan: MovePlan) {
        let (from, to) = (plan.from(), plan.to());
        if let MovePlan::Capture(chain) = &plan {
            for step in chain.path() {
                self.remove(step.captured);
            }
        }
        let kind = self.piece_at(from);
        self.remove(from);
        self.put(to, kind);
        debug!(
            %from,
            %to,
            captured = plan.captured().len(),
            first = self.counts[0],
            second = self.counts[1],
            "move committed"
        );
    }

    /// Whether any ordered pair of squares forms a legal move, for either side.
    pub fn has_any_legal_move(&self) -> bool {
        Position::all().any(|from| Position::all().any(|to| self.is_legal(from, to)))
    }

    /// Whether `side` has at least one legal move.
    pub fn has_legal_move(&self, side: Side) -> bool {
        self.pieces(side)
            .into_iter()
            .any(|from| Position::all().any(|to| self.is_legal(from, to)))
    }

    fn put(&mut self, pos: Position, kind: PieceKind) {
        debug_assert!(self.grid[pos.idx()].is_empty(), "put onto occupied {pos}");
        self.grid[pos.idx()] = kind;
        if let Some(side) = kind.side() {
            self.counts[side.idx()] += 1;
        }
    }

    fn remove(&mut self, pos: Position) {
        let old = std::mem::take(&mut self.grid[pos.idx()]);
        if let Some(side) = old.side() {
            self.counts[side.idx()] -= 1;
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            for x in 0..BOARD_SIZE {
                write!(f, "{}", self.piece_at(Position::new(x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
