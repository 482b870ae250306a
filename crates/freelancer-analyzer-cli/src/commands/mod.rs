//! Command implementations.

pub mod analyze;
pub mod ask;
pub mod health;
pub mod info;
pub mod interactive;

use colored::Colorize;

/// Print an analysis payload as indented JSON under a heading.
pub(crate) fn print_analysis_data(value: &serde_json::Value) {
    println!();
    println!("{}", "Analysis data:".green().bold());
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{}", value),
    }
}
