//! Line-based keyboard input

use checkers_core::{Direction, Intent};

/// Map one line of input to an intent. Unknown words map to `None`.
///
/// An empty line confirms, so pressing Enter alone picks the square under the
/// active cursor.
pub fn parse_intent(line: &str) -> Option<Intent> {
    match line.trim().to_lowercase().as_str() {
        "" | "enter" | "e" => Some(Intent::Confirm),
        "w" | "up" | "k" => Some(Intent::MoveCursor(Direction::Up)),
        "s" | "down" | "j" => Some(Intent::MoveCursor(Direction::Down)),
        "a" | "left" | "h" => Some(Intent::MoveCursor(Direction::Left)),
        "d" | "right" | "l" => Some(Intent::MoveCursor(Direction::Right)),
        "q" | "quit" | "exit" => Some(Intent::Quit),
        _ => None,
    }
}

/// Split a line such as `w w d` into several intents.
///
/// Returns `None` if any word is unknown, so a typo never half-applies.
pub fn parse_line(line: &str) -> Option<Vec<Intent>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Some(vec![Intent::Confirm]);
    }
    words.into_iter().map(parse_intent).collect()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
