//! Health command - check credentials, data, and model connectivity.

use std::path::PathBuf;

use colored::Colorize;
use freelancer_analyzer::{FreelancerAnalyzer, HealthReport, HealthStatus, LlmTestStatus, Settings};

pub fn run(data_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::from_env()?;
    if let Some(path) = data_path {
        settings = settings.with_data_path(path);
    }

    let model = settings.model.clone();
    let analyzer = FreelancerAnalyzer::initialize(settings)?;
    print_report(&analyzer.health_check(), &model);

    Ok(())
}

/// Print a health report.
pub(crate) fn print_report(report: &HealthReport, model: &str) {
    println!("{}", "System health".cyan().bold());
    println!("  {:24} {}", "Dataset records:", report.dataset_records);
    println!("  {:24} {}", "API key set:", check_mark(report.api_key_set));
    println!(
        "  {:24} {}",
        "Model client:",
        check_mark(report.llm_initialized)
    );
    println!("  {:24} {}", "Model:", model);

    let test_line = match &report.llm_test {
        LlmTestStatus::Passed => "passed".green().to_string(),
        LlmTestStatus::Failed(reason) => format!("{} ({})", "failed".red(), reason),
        LlmTestStatus::NotAvailable => "not available".yellow().to_string(),
    };
    println!("  {:24} {}", "Model round-trip:", test_line);

    let overall = match report.overall_status {
        HealthStatus::Healthy => "healthy".green().bold().to_string(),
        HealthStatus::Degraded => "degraded".yellow().bold().to_string(),
        HealthStatus::LlmUnavailable => "llm unavailable".red().bold().to_string(),
    };
    println!("  {:24} {}", "Overall:", overall);
}

fn check_mark(ok: bool) -> String {
    if ok {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}
