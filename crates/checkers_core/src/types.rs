use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Board width and height in squares.
pub const BOARD_SIZE: i8 = 8;
/// Rows filled with pieces for each side at setup.
pub const SETUP_ROWS: i8 = 3;
/// Pieces per side at setup.
pub const PIECES_PER_SIDE: u8 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
    /// Row direction this side moves in. Pieces never move backwards.
    pub fn forward(self) -> i8 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "First"),
            Side::Second => write!(f, "Second"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    FirstSide,
    SecondSide,
    #[default]
    Empty,
}

impl PieceKind {
    pub fn side(self) -> Option<Side> {
        match self {
            PieceKind::FirstSide => Some(Side::First),
            PieceKind::SecondSide => Some(Side::Second),
            PieceKind::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == PieceKind::Empty
    }

    pub fn glyph(self) -> char {
        match self {
            PieceKind::FirstSide => 'x',
            PieceKind::SecondSide => 'o',
            PieceKind::Empty => '.',
        }
    }

    pub fn from_glyph(c: char) -> Option<PieceKind> {
        match c {
            'x' | 'X' => Some(PieceKind::FirstSide),
            'o' | 'O' => Some(PieceKind::SecondSide),
            '.' => Some(PieceKind::Empty),
            _ => None,
        }
    }
}

impl From<Side> for PieceKind {
    fn from(side: Side) -> Self {
        match side {
            Side::First => PieceKind::FirstSide,
            Side::Second => PieceKind::SecondSide,
        }
    }
}

/// A square coordinate, or a displacement between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Dark squares: x and y of different parity. Only these ever hold pieces.
    pub fn is_playable(self) -> bool {
        (self.x % 2 == 0) != (self.y % 2 == 0)
    }

    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0, BOARD_SIZE - 1),
            y: self.y.clamp(0, BOARD_SIZE - 1),
        }
    }

    /// Row-major index into the grid. Caller checks bounds.
    pub(crate) fn idx(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// Every square on the board, row by row from y = 0.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position::new(x, y)))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Unit cursor movement produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Up points towards larger y, the Second side's home rows.
    pub fn delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, 1),
            Direction::Down => Position::new(0, -1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }
}

/// Input consumed by the game state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveCursor(Direction),
    Confirm,
    Quit,
}

/// Final result of a game. Never changes once reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    FirstSideWins,
    SecondSideWins,
    Draw,
    Quit,
}

impl Outcome {
    pub fn win_for(side: Side) -> Outcome {
        match side {
            Side::First => Outcome::FirstSideWins,
            Side::Second => Outcome::SecondSideWins,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::FirstSideWins => Some(Side::First),
            Outcome::SecondSideWins => Some(Side::Second),
            Outcome::Draw | Outcome::Quit => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::FirstSideWins => write!(f, "First side wins"),
            Outcome::SecondSideWins => write!(f, "Second side wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Quit => write!(f, "Quit"),
        }
    }
}
