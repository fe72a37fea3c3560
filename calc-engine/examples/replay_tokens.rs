//! Standalone token replay tool
//!
//! Feeds whitespace-separated tokens through a calculator and prints the
//! display, history and error text after each one, followed by a summary.
//!
//! Usage:
//!   replay_tokens [--scientific] <token> <token> ...
//!
//! Example:
//!   replay_tokens --scientific 9 0 sin + 1 =

use calc_engine::{Calculator, EngineConfig, Mode};
use std::env;

struct ReplayStats {
    accepted: usize,
    dropped: usize,
    errors: usize,
}

impl ReplayStats {
    fn new() -> Self {
        Self {
            accepted: 0,
            dropped: 0,
            errors: 0,
        }
    }

    fn print_summary(&self, calc: &Calculator) {
        println!("\n=== REPLAY SUMMARY ===");
        println!("Tokens accepted: {}", self.accepted);
        println!("Symbols dropped: {}", self.dropped);
        println!("Errors raised: {}", self.errors);
        println!("Calculations completed: {}", calc.history_log().len());

        for entry in calc.history_log() {
            println!("  {}", entry.expression);
        }
    }
}

fn main() {
    let mut mode = Mode::Basic;
    let mut symbols = Vec::new();

    for arg in env::args().skip(1) {
        if arg == "--scientific" {
            mode = Mode::Scientific;
        } else {
            symbols.push(arg);
        }
    }

    if symbols.is_empty() {
        eprintln!("Usage: replay_tokens [--scientific] <token> <token> ...");
        std::process::exit(1);
    }

    let mut calc = Calculator::with_config(EngineConfig::new().with_mode(mode));
    let mut stats = ReplayStats::new();

    for symbol in &symbols {
        match calc.submit_symbol(symbol) {
            Some(_) => stats.accepted += 1,
            None => stats.dropped += 1,
        }

        let error = calc.error_text();
        if error.is_some() {
            stats.errors += 1;
        }

        println!(
            "{:>10}  {:>14}  {:<28}  {}",
            symbol,
            calc.display_text(),
            calc.history_text(),
            error.unwrap_or("")
        );
    }

    stats.print_summary(&calc);
}
