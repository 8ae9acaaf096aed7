//! Main application state and logic

use crate::board::BoardView;
use crate::styles::PANEL_WIDTH;

use checkers_core::{
    Direction, Game, GameConfig, GameState, Intent, MovePair, Opponent, Side, Turn,
    DEFAULT_CONFIG_FILE,
};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, horizontal_rule, pick_list, row, text, vertical_space};
use iced::{Element, Length, Subscription, Task, Theme};
use random_opponent::RandomOpponent;
use tracing::{debug, warn};

/// Main application state
pub struct CheckersApp {
    /// Settings loaded at startup
    config: GameConfig,
    game: Game,
    opponent: RandomOpponent,
    /// Side the human plays in the next new game
    human_side: Side,
    /// Last move on the board, by either side
    last_move: Option<MovePair>,
    /// Bumped on every new game so stale opponent timers are dropped
    generation: u64,
    /// An opponent move is scheduled
    opponent_pending: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Keyboard
    Intent(Intent),

    // Game controls
    NewGame,
    HumanSideChanged(Side),

    // Opponent pacing timer fired for the given game
    OpponentMove(u64),
}

impl CheckersApp {
    pub fn new() -> (Self, Task<Message>) {
        let config = match GameConfig::load(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default settings: {}", e);
                GameConfig::default()
            }
        };
        let opponent = match config.seed {
            Some(seed) => RandomOpponent::with_seed(seed),
            None => RandomOpponent::new(),
        };

        let mut app = Self {
            human_side: config.human_side,
            game: Game::new(config.human_side),
            config,
            opponent,
            last_move: None,
            generation: 0,
            opponent_pending: false,
        };
        let task = app.maybe_schedule_opponent();
        (app, task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| key_to_intent(&key).map(Message::Intent))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Intent(intent) => {
                let was_human_turn = self.is_human_turn();
                let from = self.game.board().piece_cursor().position;

                self.game.handle_intent(intent);

                // A confirmed destination that ended the human's turn was a move
                if was_human_turn && intent == Intent::Confirm && !self.is_human_turn() {
                    let to = self.game.board().piece_cursor().position;
                    debug!(%from, %to, "human moved");
                    self.last_move = Some((from, to));
                }
                self.maybe_schedule_opponent()
            }

            Message::NewGame => {
                self.start_new_game();
                self.maybe_schedule_opponent()
            }

            Message::HumanSideChanged(side) => {
                self.human_side = side;
                self.start_new_game();
                self.maybe_schedule_opponent()
            }

            Message::OpponentMove(generation) => {
                if generation != self.generation {
                    return Task::none();
                }
                self.opponent_pending = false;
                if let Some(mv) = self.game.play_opponent_turn(&mut self.opponent) {
                    self.last_move = Some(mv);
                }
                self.maybe_schedule_opponent()
            }
        }
    }

    fn start_new_game(&mut self) {
        self.generation += 1;
        self.opponent_pending = false;
        self.last_move = None;
        self.opponent.new_game();
        self.game = Game::new(self.human_side);
    }

    fn is_human_turn(&self) -> bool {
        matches!(self.game.state(), GameState::Playing(Turn::Human(_)))
    }

    /// If the automated side is on turn, wait out the pacing delay and then
    /// ask it for a move
    fn maybe_schedule_opponent(&mut self) -> Task<Message> {
        if !self.game.awaiting_opponent() || self.opponent_pending {
            return Task::none();
        }
        self.opponent_pending = true;

        let delay = self.config.opponent_delay();
        let generation = self.generation;
        Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::OpponentMove(generation),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.game, self.last_move).view();

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let side_picker = pick_list(
            [Side::First, Side::Second],
            Some(self.human_side),
            Message::HumanSideChanged,
        )
        .width(Length::Fill);

        let board = self.game.board();
        let counts = text(format!(
            "Pieces - First: {}  Second: {}",
            board.count(Side::First),
            board.count(Side::Second)
        ))
        .size(14);

        let mut status_column = column![text(self.game.status()).size(16)].spacing(5);
        if self.game.illegal_attempt() && !self.game.is_finished() {
            status_column = status_column.push(text("Illegal move, try again").size(14));
        }

        column![
            new_game_btn,
            vertical_space().height(20),
            text("You play").size(14),
            side_picker,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            status_column,
            counts,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text("Arrows: move cursor").size(13),
            text("Enter / Space: select").size(13),
            text("Esc / Q: quit game").size(13),
        ]
        .spacing(5)
        .into()
    }
}

/// Map a pressed key to an intent for the game
pub fn key_to_intent(key: &Key) -> Option<Intent> {
    match key.as_ref() {
        Key::Named(Named::ArrowUp) => Some(Intent::MoveCursor(Direction::Up)),
        Key::Named(Named::ArrowDown) => Some(Intent::MoveCursor(Direction::Down)),
        Key::Named(Named::ArrowLeft) => Some(Intent::MoveCursor(Direction::Left)),
        Key::Named(Named::ArrowRight) => Some(Intent::MoveCursor(Direction::Right)),
        Key::Named(Named::Enter | Named::Space) => Some(Intent::Confirm),
        Key::Named(Named::Escape) => Some(Intent::Quit),
        Key::Character(c) if c.eq_ignore_ascii_case("q") => Some(Intent::Quit),
        _ => None,
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
