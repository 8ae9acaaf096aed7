//! Match Runner for checkers opponents
//!
//! This crate provides infrastructure for:
//! - Playing opponents against each other without a human in the loop
//! - Checking that every game terminates with a valid outcome
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run 100 random-vs-random games with a fixed seed
//! cargo run -p match_runner -- --games 100 --seed 7 --out results.json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
