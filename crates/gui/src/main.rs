//! Checkers GUI Application
//!
//! Play against the random opponent using the keyboard:
//! - Arrow keys move the active cursor
//! - Enter or Space selects the square under it
//! - Escape or Q quits the current game

mod app;
mod board;
mod styles;

use app::CheckersApp;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    application("Checkers", CheckersApp::update, CheckersApp::view)
        .subscription(CheckersApp::subscription)
        .theme(CheckersApp::theme)
        .window_size((960.0, 680.0))
        .run_with(CheckersApp::new)
}
