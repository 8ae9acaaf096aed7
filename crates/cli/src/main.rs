//! Terminal checkers
//!
//! Reads one line per turn from stdin and redraws the board after each one.
//!
//! ```bash
//! cargo run -p checkers_cli -- [config.toml]
//! ```

mod input;
mod render;

use checkers_core::{Game, GameConfig, DEFAULT_CONFIG_FILE};
use random_opponent::RandomOpponent;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Commands:");
    println!("  w / up, s / down, a / left, d / right   move the active cursor");
    println!("  <empty line> / enter                    select the square under it");
    println!("  q / quit                                leave the game");
    println!("Several commands can share a line, e.g. `w w d`.");
}

fn load_config() -> GameConfig {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    match GameConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("using default settings: {}", e);
            GameConfig::default()
        }
    }
}

fn redraw(stdout: &mut impl Write, game: &Game) {
    writeln!(stdout).ok();
    write!(stdout, "{}", render::render_board(game)).ok();
    writeln!(stdout, "{}", render::status_line(game)).ok();
    stdout.flush().ok();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config();
    let mut opponent = match config.seed {
        Some(seed) => RandomOpponent::with_seed(seed),
        None => RandomOpponent::new(),
    };
    let mut game = Game::new(config.human_side);
    info!(human = %config.human_side, "new game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_help();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        if game.awaiting_opponent() {
            redraw(&mut stdout, &game);
            std::thread::sleep(config.opponent_delay());
            if let Some((from, to)) = game.play_opponent_turn(&mut opponent) {
                writeln!(stdout, "Opponent moved {} -> {}", from, to).ok();
            }
            continue;
        }

        redraw(&mut stdout, &game);
        let line = match lines.next() {
            Some(Ok(l)) => l,
            // End of input ends the game like a quit
            _ => break,
        };

        match input::parse_line(&line) {
            Some(intents) => {
                for intent in intents {
                    game.handle_intent(intent);
                }
            }
            None => print_help(),
        }
    }

    match game.outcome() {
        Some(outcome) => {
            redraw(&mut stdout, &game);
            info!(%outcome, "game finished");
        }
        None => {
            writeln!(stdout, "Goodbye.").ok();
        }
    }
}
