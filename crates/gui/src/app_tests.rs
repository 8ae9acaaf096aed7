use super::*;
use checkers_core::{PieceKind, Position};

fn pos(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

fn press(app: &mut CheckersApp, intents: &[Intent]) {
    for &intent in intents {
        let _ = app.update(Message::Intent(intent));
    }
}

/// Moves the human's piece from (1,2) to (2,3) on a fresh board
const OPENING: [Intent; 6] = [
    Intent::MoveCursor(Direction::Up),
    Intent::MoveCursor(Direction::Up),
    Intent::Confirm,
    Intent::MoveCursor(Direction::Right),
    Intent::MoveCursor(Direction::Up),
    Intent::Confirm,
];

fn app_playing(side: Side) -> CheckersApp {
    let (mut app, _) = CheckersApp::new();
    if app.human_side != side {
        let _ = app.update(Message::HumanSideChanged(side));
    }
    app
}

#[test]
fn test_key_mapping() {
    assert_eq!(
        key_to_intent(&Key::Named(Named::ArrowUp)),
        Some(Intent::MoveCursor(Direction::Up))
    );
    assert_eq!(
        key_to_intent(&Key::Named(Named::ArrowLeft)),
        Some(Intent::MoveCursor(Direction::Left))
    );
    assert_eq!(key_to_intent(&Key::Named(Named::Enter)), Some(Intent::Confirm));
    assert_eq!(key_to_intent(&Key::Named(Named::Space)), Some(Intent::Confirm));
    assert_eq!(key_to_intent(&Key::Named(Named::Escape)), Some(Intent::Quit));
    assert_eq!(key_to_intent(&Key::Character("Q".into())), Some(Intent::Quit));
    assert_eq!(key_to_intent(&Key::Character("x".into())), None);
    assert_eq!(key_to_intent(&Key::Named(Named::Tab)), None);
}

#[test]
fn test_human_move_schedules_opponent() {
    let mut app = app_playing(Side::First);
    assert!(!app.opponent_pending);

    press(&mut app, &OPENING);
    assert_eq!(app.last_move, Some((pos(1, 2), pos(2, 3))));
    assert!(app.game.awaiting_opponent());
    assert!(app.opponent_pending);

    let generation = app.generation;
    let _ = app.update(Message::OpponentMove(generation));
    assert!(!app.opponent_pending);
    assert!(!app.game.awaiting_opponent());
    let (from, _) = app.last_move.unwrap();
    assert_eq!(app.game.board().piece_at(from), PieceKind::Empty);
}

#[test]
fn test_stale_timer_is_ignored() {
    let mut app = app_playing(Side::First);
    press(&mut app, &OPENING);
    let stale = app.generation;

    let _ = app.update(Message::NewGame);
    let _ = app.update(Message::OpponentMove(stale));
    assert_eq!(app.game.board(), Game::new(Side::First).board());
    assert_eq!(app.last_move, None);
}

#[test]
fn test_playing_second_lets_opponent_open() {
    let mut app = app_playing(Side::Second);
    assert!(app.game.awaiting_opponent());
    assert!(app.opponent_pending);
    assert_eq!(app.game.status(), "Opponent is thinking...");

    let generation = app.generation;
    let _ = app.update(Message::OpponentMove(generation));
    assert_eq!(app.game.board().count(Side::First), 12);
    assert_eq!(
        app.game.status(),
        "Your move (Second): select a piece"
    );
}

#[test]
fn test_quit_key_finishes_game() {
    let mut app = app_playing(Side::First);
    let _ = app.update(Message::Intent(Intent::Quit));
    assert!(app.game.is_finished());
    assert_eq!(app.game.status(), "Game over: Quit");
}
