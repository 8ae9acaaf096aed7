use super::*;

#[test]
fn test_directions() {
    assert_eq!(parse_intent("w"), Some(Intent::MoveCursor(Direction::Up)));
    assert_eq!(parse_intent("UP"), Some(Intent::MoveCursor(Direction::Up)));
    assert_eq!(parse_intent("a"), Some(Intent::MoveCursor(Direction::Left)));
    assert_eq!(parse_intent("down"), Some(Intent::MoveCursor(Direction::Down)));
    assert_eq!(parse_intent(" right "), Some(Intent::MoveCursor(Direction::Right)));
}

#[test]
fn test_confirm_and_quit() {
    assert_eq!(parse_intent(""), Some(Intent::Confirm));
    assert_eq!(parse_intent("enter"), Some(Intent::Confirm));
    assert_eq!(parse_intent("q"), Some(Intent::Quit));
    assert_eq!(parse_intent("quit"), Some(Intent::Quit));
}

#[test]
fn test_unknown_word() {
    assert_eq!(parse_intent("jump"), None);
}

#[test]
fn test_line_with_several_intents() {
    assert_eq!(
        parse_line("w w d enter"),
        Some(vec![
            Intent::MoveCursor(Direction::Up),
            Intent::MoveCursor(Direction::Up),
            Intent::MoveCursor(Direction::Right),
            Intent::Confirm,
        ])
    );
    assert_eq!(parse_line("   "), Some(vec![Intent::Confirm]));
    assert_eq!(parse_line("w x"), None);
}
