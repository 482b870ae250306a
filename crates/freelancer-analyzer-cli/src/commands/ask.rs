//! Ask command - answer a single natural-language question.

use std::path::PathBuf;

use colored::Colorize;
use freelancer_analyzer::{FreelancerAnalyzer, Settings};

pub fn run(
    question: String,
    data_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if question.trim().is_empty() {
        return Err("Please provide a non-empty question".into());
    }

    let mut settings = Settings::from_env()?;
    if let Some(path) = data_path {
        settings = settings.with_data_path(path);
    }

    println!(
        "{} {}",
        "Loading".cyan().bold(),
        settings.data_path.display().to_string().white()
    );

    let analyzer = FreelancerAnalyzer::initialize(settings)?;

    println!("{} {}", "Question:".bold(), question);

    let outcome = analyzer.process_question(&question)?;

    println!(
        "{} {}",
        "Analysis:".bold(),
        outcome.analysis_kind.as_str().cyan()
    );
    println!();

    if outcome.answer.is_fallback() {
        println!("{}", "Answer (model unavailable):".yellow().bold());
    } else {
        println!("{}", "Answer:".green().bold());
    }
    println!("{}", outcome.answer.text());

    if verbose {
        super::print_analysis_data(&outcome.analysis_data);
    }

    Ok(())
}
