//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use freelancer_analyzer::AnalysisKind;

/// Freelancer Analyzer: AI-assisted analysis of freelancer earnings data
#[derive(Parser)]
#[command(name = "freelancer-analyzer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the earnings CSV (default: DATA_PATH from the environment)
    #[arg(short = 'd', long, global = true, value_name = "PATH")]
    pub data_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a single natural-language question about the data
    Ask {
        /// The question to answer
        #[arg(value_name = "QUESTION")]
        question: String,
    },

    /// Run one named analysis and print its data as JSON
    Analyze {
        /// Analysis to run
        #[arg(short, long, default_value = "summary")]
        kind: AnalysisKind,
    },

    /// Show information about the dataset
    Info,

    /// Check system health status
    Health,

    /// Interactive mode for questions and analyses
    Interactive,
}
