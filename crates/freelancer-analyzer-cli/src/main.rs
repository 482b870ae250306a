//! Freelancer Analyzer CLI - AI-assisted earnings data analysis.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use freelancer_analyzer::LogLevel;

fn main() {
    // A .env file next to the working directory is honored; real
    // environment variables take precedence.
    let _ = dotenvy::dotenv();

    let filter = log_filter();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(&filter))
        .init();
    tracing::debug!(%filter, "logging initialized");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask { question } => commands::ask::run(question, cli.data_path, cli.verbose),

        Commands::Analyze { kind } => commands::analyze::run(kind, cli.data_path, cli.verbose),

        Commands::Info => commands::info::run(cli.data_path),

        Commands::Health => commands::health::run(cli.data_path),

        Commands::Interactive => commands::interactive::run(cli.data_path, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Filter directive for the subscriber.
///
/// `RUST_LOG` wins outright; otherwise `DEBUG`/`LOG_LEVEL` decide.
fn log_filter() -> String {
    if let Ok(filter) = std::env::var("RUST_LOG") {
        return filter;
    }

    let debug = std::env::var("DEBUG")
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(false);
    if debug {
        return "debug".to_string();
    }

    std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<LogLevel>().ok())
        .unwrap_or_default()
        .as_filter()
        .to_string()
}
