//! Checkers board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use checkers_core::{Game, MovePair, PieceKind, Position, BOARD_SIZE};
use iced::widget::{column, container, row, text};
use iced::{Color, Element, Length};

/// Renders the board of a running game, cursors included
pub struct BoardView<'a> {
    game: &'a Game,
    last_move: Option<MovePair>,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game, last_move: Option<MovePair>) -> Self {
        Self { game, last_move }
    }

    /// Create the board view element, top row (y = 7) first
    pub fn view<M: 'a>(&self) -> Element<'a, M> {
        let mut board_column = column![].spacing(0);

        for y in (0..BOARD_SIZE).rev() {
            let mut board_row = row![].spacing(0);
            for x in 0..BOARD_SIZE {
                board_row = board_row.push(self.render_square(Position::new(x, y)));
            }
            board_column = board_column.push(board_row);
        }

        let border_color = if self.game.illegal_attempt() && !self.game.is_finished() {
            styles::ILLEGAL_BORDER
        } else {
            styles::BOARD_BORDER
        };

        container(board_column)
            .style(move |_theme| container::Style {
                border: iced::Border {
                    color: border_color,
                    width: 3.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square<M: 'a>(&self, pos: Position) -> Element<'a, M> {
        let board = self.game.board();
        let piece_cursor = board.piece_cursor();
        let dest_cursor = board.destination_cursor();

        let mut bg_color = if pos.is_playable() {
            styles::DARK_SQUARE
        } else {
            styles::LIGHT_SQUARE
        };

        if let Some((from, to)) = self.last_move {
            if pos == from || pos == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        // Destination cursor wins when both sit on the same square
        if dest_cursor.visible && dest_cursor.position == pos {
            bg_color = styles::DESTINATION_CURSOR;
        } else if piece_cursor.visible && piece_cursor.position == pos {
            bg_color = styles::PIECE_CURSOR;
        }

        let content: Element<'a, M> = match board.piece_at(pos) {
            PieceKind::FirstSide => piece(styles::FIRST_PIECE),
            PieceKind::SecondSide => piece(styles::SECOND_PIECE),
            PieceKind::Empty => text("").into(),
        };

        container(content)
            .width(SQUARE_SIZE)
            .height(SQUARE_SIZE)
            .center_x(Length::Fixed(SQUARE_SIZE))
            .center_y(Length::Fixed(SQUARE_SIZE))
            .style(move |_theme| container::Style {
                background: Some(iced::Background::Color(bg_color)),
                ..Default::default()
            })
            .into()
    }
}

fn piece<'a, M: 'a>(color: Color) -> Element<'a, M> {
    text("●")
        .size(SQUARE_SIZE * 0.7)
        .color(color)
        .center()
        .into()
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
