//! Match Runner CLI
//!
//! Plays random opponents against each other and reports the results.

use match_runner::{MatchConfig, MatchRunner};
use random_opponent::RandomOpponent;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Checkers Match Runner");
    println!();
    println!("Usage:");
    println!("  match_runner [--games N] [--max-moves M] [--seed S] [--out FILE]");
    println!();
    println!("Options:");
    println!("  --games, -g      Number of games (default 10)");
    println!("  --max-moves, -m  Half-moves per game before a draw (default 200)");
    println!("  --seed, -s       Seed for both opponents (opponent 2 uses S + 1)");
    println!("  --out, -o        Write the match report as JSON");
    println!();
    println!("Examples:");
    println!("  match_runner --games 100 --seed 7 --out results.json");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut config = MatchConfig::default();
    let mut out: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--max-moves" | "-m" => {
                if i + 1 < args.len() {
                    config.max_moves = args[i + 1].parse().unwrap_or(config.max_moves);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    let (mut opponent1, mut opponent2) = match config.seed {
        Some(seed) => (
            RandomOpponent::with_seed(seed),
            RandomOpponent::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomOpponent::new(), RandomOpponent::new()),
    };

    println!(
        "Games: {}, Max moves: {}, Seed: {}",
        config.num_games,
        config.max_moves,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );
    println!();

    let runner = MatchRunner::new(config);
    let report = runner.run_match(&mut opponent1, &mut opponent2);

    println!();
    report.print_report();

    if let Some(path) = out {
        match report.save(&path) {
            Ok(()) => println!("Saved report to {}", path.display()),
            Err(e) => eprintln!("Warning: Failed to save report: {}", e),
        }
    }
}
