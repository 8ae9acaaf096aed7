//! Text rendering of a game in progress

use checkers_core::{Game, Position, BOARD_SIZE};
use std::fmt::Write;

/// Draw the board with the top row (y = 7) first.
///
/// The piece cursor is shown as `[ ]`, the destination cursor as `< >`.
pub fn render_board(game: &Game) -> String {
    let board = game.board();
    let piece = board.piece_cursor();
    let dest = board.destination_cursor();

    let mut out = String::new();
    for y in (0..BOARD_SIZE).rev() {
        let _ = write!(out, "{} ", y);
        for x in 0..BOARD_SIZE {
            let pos = Position::new(x, y);
            let glyph = board.piece_at(pos).glyph();
            let (open, close) = if dest.visible && dest.position == pos {
                ('<', '>')
            } else if piece.visible && piece.position == pos {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {} ", x);
    }
    out.push('\n');
    out
}

/// Game status, with a warning after a rejected move.
pub fn status_line(game: &Game) -> String {
    let mut status = game.status();
    if game.illegal_attempt() && !game.is_finished() {
        status.push_str(" - illegal move, try again");
    }
    status
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
