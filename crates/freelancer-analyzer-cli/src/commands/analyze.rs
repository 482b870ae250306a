//! Analyze command - run one named analysis and print its data.

use std::path::PathBuf;

use colored::Colorize;
use freelancer_analyzer::{resolve_data_path, AnalysisKind, DataAnalyzer, DataLoader};

pub fn run(
    kind: AnalysisKind,
    data_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_data_path(data_path);

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        path.display().to_string().white()
    );

    let dataset = DataLoader::new(&path).load()?;

    if verbose {
        println!(
            "Loaded {} records from {}",
            dataset.len().to_string().white().bold(),
            dataset.source().file
        );
    }

    let analyzer = DataAnalyzer::new(&dataset);
    let value = kind.run(&analyzer)?;

    println!(
        "{} {} - {}",
        "Analysis:".bold(),
        kind.to_string().cyan(),
        kind.description()
    );
    super::print_analysis_data(&value);

    Ok(())
}
