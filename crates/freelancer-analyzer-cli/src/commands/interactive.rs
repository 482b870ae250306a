//! Interactive mode - a small REPL over the analyzer.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use freelancer_analyzer::llm::sample_questions;
use freelancer_analyzer::{AnalysisKind, FreelancerAnalyzer, Settings};

pub fn run(data_path: Option<PathBuf>, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::from_env()?;
    if let Some(path) = data_path {
        settings = settings.with_data_path(path);
    }

    println!(
        "{} {}",
        "Loading".cyan().bold(),
        settings.data_path.display().to_string().white()
    );
    let model = settings.model.clone();
    let analyzer = FreelancerAnalyzer::initialize(settings)?;
    println!(
        "{} ({} records)",
        "Ready".green().bold(),
        analyzer.dataset().len()
    );

    print_welcome();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(command) = prompt_line(&mut lines, "command [ask] > ")? else {
            break;
        };

        match command.as_str() {
            "" | "ask" => {
                let Some(question) = prompt_line(&mut lines, "question > ")? else {
                    break;
                };
                if question.is_empty() {
                    println!("{}", "Please enter a question".yellow());
                    continue;
                }
                ask(&analyzer, &question, verbose);
            }
            "analyze" => {
                if !analyze_menu(&analyzer, &mut lines)? {
                    break;
                }
            }
            "samples" => {
                if !samples_menu(&analyzer, &mut lines, verbose)? {
                    break;
                }
            }
            "health" => super::health::print_report(&analyzer.health_check(), &model),
            "info" => super::info::print_dataset(analyzer.dataset()),
            "exit" | "quit" => break,
            other => {
                println!(
                    "{} '{}'. Commands: ask, analyze, samples, health, info, exit",
                    "Unknown command".yellow(),
                    other
                );
            }
        }
    }

    println!("{}", "Goodbye!".cyan().bold());
    Ok(())
}

fn print_welcome() {
    println!();
    println!("{}", "Freelancer Earnings Analyzer".cyan().bold());
    println!("Ask natural-language questions about the dataset, or run a named analysis.");
    println!();
    println!("Commands:");
    println!("  ask      - ask a question in natural language");
    println!("  analyze  - run a specific analysis");
    println!("  samples  - show example questions");
    println!("  health   - check system status");
    println!("  info     - show dataset information");
    println!("  exit     - quit");
}

/// Prompt and read one trimmed line; None on EOF.
fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    print!("\n{}", prompt.cyan().bold());
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn ask(analyzer: &FreelancerAnalyzer, question: &str, verbose: bool) {
    match analyzer.process_question(question) {
        Ok(outcome) => {
            if outcome.answer.is_fallback() {
                println!("{}", "Answer (model unavailable):".yellow().bold());
            } else {
                println!("{}", "Answer:".green().bold());
            }
            println!("{}", outcome.answer.text());

            if verbose {
                super::print_analysis_data(&outcome.analysis_data);
            }
        }
        Err(e) => println!("{} {}", "Error:".red().bold(), e),
    }
}

/// Returns false on EOF.
fn analyze_menu(
    analyzer: &FreelancerAnalyzer,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool, Box<dyn std::error::Error>> {
    println!("{}", "Available analyses:".bold());
    for (i, kind) in AnalysisKind::all().iter().enumerate() {
        println!("  {}. {} - {}", i + 1, kind, kind.description());
    }

    let Some(choice) = prompt_line(lines, "number > ")? else {
        return Ok(false);
    };

    let kind = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| AnalysisKind::all().get(n.wrapping_sub(1)))
        .copied();

    match kind {
        Some(kind) => match analyzer.run_analysis(kind) {
            Ok(value) => super::print_analysis_data(&value),
            Err(e) => println!("{} {}", "Error:".red().bold(), e),
        },
        None => println!("{}", "Invalid selection".yellow()),
    }

    Ok(true)
}

/// Returns false on EOF.
fn samples_menu(
    analyzer: &FreelancerAnalyzer,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let samples = sample_questions();

    println!("{}", "Example questions:".bold());
    for (i, question) in samples.iter().enumerate() {
        println!("  {}. {}", i + 1, question);
    }

    let Some(choice) = prompt_line(lines, "try one? number or Enter to skip > ")? else {
        return Ok(false);
    };

    if let Some(question) = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| samples.get(n.wrapping_sub(1)))
    {
        println!("{} {}", "Question:".bold(), question);
        ask(analyzer, question, verbose);
    }

    Ok(true)
}
