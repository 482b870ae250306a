//! Info command - dataset overview, basic stats, quality report.

use std::path::PathBuf;

use colored::Colorize;
use freelancer_analyzer::{resolve_data_path, DataLoader, Dataset};

pub fn run(data_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_data_path(data_path);
    let dataset = DataLoader::new(&path).load()?;
    print_dataset(&dataset);
    Ok(())
}

/// Print the dataset overview, numeric summaries, and quality report.
pub(crate) fn print_dataset(dataset: &Dataset) {
    let info = dataset.info();
    let quality = dataset.quality_report();

    println!("{}", "Dataset overview".cyan().bold());
    println!("  {:28} {}", "File:", dataset.source().file);
    println!("  {:28} {}", "Records:", info.total_records);
    println!("  {:28} {}", "Columns:", info.columns.len());
    for (name, levels) in &info.categorical_levels {
        println!("  {:28} {}", format!("{} levels:", name), levels.len());
    }

    println!();
    println!("{}", "Numeric columns".cyan().bold());
    println!(
        "  {:20} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "column", "mean", "median", "std", "min", "max"
    );
    for (name, summary) in dataset.basic_stats() {
        println!(
            "  {:20} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            name, summary.mean, summary.median, summary.std, summary.min, summary.max
        );
    }

    println!();
    println!("{}", "Data quality".cyan().bold());
    println!(
        "  {:28} {}",
        "Duplicate IDs:",
        colorize_count(quality.duplicate_freelancer_ids)
    );
    println!(
        "  {:28} {}",
        "Rows with missing values:",
        colorize_count(quality.records_with_missing_values)
    );
    println!(
        "  {:28} {}",
        "Zero earnings:",
        colorize_count(quality.earnings_anomalies.zero_earnings)
    );
    println!(
        "  {:28} {}",
        "Negative earnings:",
        colorize_count(quality.earnings_anomalies.negative_earnings)
    );
    println!(
        "  {:28} {}",
        "Earnings above $10k:",
        quality.earnings_anomalies.extremely_high_earnings
    );
    println!(
        "  {:28} {}",
        "Out-of-range ratings:",
        colorize_count(quality.rating_anomalies.out_of_range_ratings)
    );
}

fn colorize_count(count: usize) -> String {
    if count == 0 {
        count.to_string().green().to_string()
    } else {
        count.to_string().yellow().to_string()
    }
}
