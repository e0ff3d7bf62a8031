//! Calculator Session
//!
//! Replays keypad labels through the engine and prints each frame the way a
//! front end would render it, followed by the history panel.
//!
//! Run with: cargo run --example session -- 1 2 + 3 0 = ÷ 0 =
//! Set RUST_LOG=abacus=debug to see the engine's transition log.

use abacus::{CalculatorBuilder, ErrorPolicy};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let labels: Vec<String> = std::env::args().skip(1).collect();
    let labels = if labels.is_empty() {
        ["1", "2", ".", "5", "+", "7", "×", "2", "=", "±", "%", "÷", "0", "="]
            .map(String::from)
            .to_vec()
    } else {
        labels
    };

    let mut calc = match CalculatorBuilder::new()
        .error_policy(ErrorPolicy::ResetOnInput)
        .on_change(|snapshot| {
            let pending = snapshot.pending_text().unwrap_or_default();
            // Ring the operator key while it waits for its right operand
            let ring = match snapshot.pending_operator {
                Some(op) if snapshot.phase.has_pending_operator() => format!("({op})"),
                _ => String::new(),
            };
            println!(
                "{pending:>12} | {:>20} | {:<16} {ring}",
                snapshot.display_text,
                snapshot.phase.name()
            );
        })
        .build()
    {
        Ok(calc) => calc,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    println!("=== Calculator Session ===\n");
    for label in &labels {
        match calc.press(label) {
            Ok(true) => {}
            Ok(false) => println!("{:>12} | {:>20} | (ignored '{label}')", "", ""),
            Err(err) => eprintln!("skipping: {err}"),
        }
    }

    println!("\n=== Calculation History ===");
    if calc.history().is_empty() {
        println!("No calculations yet");
    }
    for line in calc.history_lines() {
        println!("  {line}");
    }
}
