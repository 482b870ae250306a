//! Integration tests for the freelancer-analyzer pipeline.

use std::io::Write;
use tempfile::NamedTempFile;

use freelancer_analyzer::{
    AnalysisKind, AnalyzerError, DataAnalyzer, DataLoader, FreelancerAnalyzer, MockProvider,
    Settings,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const HEADER: &str = "Freelancer_ID,Job_Category,Platform,Experience_Level,Client_Region,\
Payment_Method,Job_Completed,Earnings_USD,Hourly_Rate,Job_Success_Rate,Client_Rating,Rehire_Rate";

fn earnings_fixture() -> String {
    let rows = [
        "1,Web Development,Upwork,Expert,USA,Crypto,250,8000.0,60.0,95.0,4.9,70.0",
        "2,Web Development,Upwork,Expert,USA,Crypto,90,5500.0,50.0,91.0,4.7,65.0",
        "3,Web Development,Fiverr,Intermediate,UK,PayPal,60,2500.0,30.0,88.0,4.5,55.0",
        "4,Design,Fiverr,Beginner,UK,PayPal,12,700.0,14.0,72.0,4.1,40.0",
        "5,Design,Freelancer,Intermediate,Asia,Bank Transfer,55,1800.0,22.0,84.0,4.4,50.0",
        "6,Writing,Freelancer,Expert,Asia,Crypto,140,3200.0,28.0,90.0,4.6,60.0",
        "7,Writing,Upwork,Beginner,USA,PayPal,8,400.0,12.0,70.0,3.9,30.0",
        "8,Data Science,Toptal,Expert,Europe,Bank Transfer,180,9500.0,80.0,97.0,5.0,80.0",
    ];
    format!("{}\n{}\n", HEADER, rows.join("\n"))
}

fn settings_for(path: &std::path::Path) -> Settings {
    Settings::from_source(|key| match key {
        "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
        _ => None,
    })
    .unwrap()
    .with_data_path(path)
}

// =============================================================================
// Loading and validation
// =============================================================================

#[test]
fn test_load_and_inspect_dataset() {
    let file = create_test_file(&earnings_fixture());
    let dataset = DataLoader::new(file.path()).load().unwrap();

    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.source().column_count, 12);
    assert!(dataset.source().hash.starts_with("sha256:"));

    let info = dataset.info();
    assert_eq!(info.total_records, 8);
    assert_eq!(info.categorical_levels["Platform"].len(), 4);
    assert_eq!(
        info.categorical_levels["Experience_Level"],
        vec!["Beginner", "Expert", "Intermediate"]
    );
    assert_eq!(info.missing_values["Earnings_USD"], 0);

    let stats = dataset.basic_stats();
    assert_eq!(stats["Earnings_USD"].count, 8);
    assert_eq!(stats["Earnings_USD"].max, 9500.0);
    assert!(stats.contains_key("Rehire_Rate"));
}

#[test]
fn test_quality_report_flags_anomalies() {
    let content = format!(
        "{}\n\
         1,Web,Upwork,Expert,USA,Crypto,10,0.0,20.0,90.0,4.5,50.0\n\
         1,Web,Upwork,Expert,USA,Crypto,10,-50.0,20.0,90.0,6.0,50.0\n\
         3,Web,Upwork,Expert,USA,PayPal,10,15000.0,20.0,90.0,4.5,NA\n",
        HEADER
    );
    let file = create_test_file(&content);
    let dataset = DataLoader::new(file.path()).load().unwrap();

    let quality = dataset.quality_report();
    assert_eq!(quality.duplicate_freelancer_ids, 1);
    assert_eq!(quality.earnings_anomalies.zero_earnings, 1);
    assert_eq!(quality.earnings_anomalies.negative_earnings, 1);
    assert_eq!(quality.earnings_anomalies.extremely_high_earnings, 1);
    assert_eq!(quality.rating_anomalies.out_of_range_ratings, 1);
    assert_eq!(quality.records_with_missing_values, 1);
}

#[test]
fn test_missing_data_file_halts_pipeline() {
    let settings = settings_for(std::path::Path::new("/nonexistent/earnings.csv"));

    // Initialization fails on the data step, before any model use.
    let err = FreelancerAnalyzer::initialize(settings).unwrap_err();
    assert!(matches!(err, AnalyzerError::DataNotFound { .. }));
}

#[test]
fn test_malformed_file_rejected() {
    let file = create_test_file("just,some,random\ncolumns,here,now\n");
    let err = DataLoader::new(file.path()).load().unwrap_err();
    assert!(matches!(err, AnalyzerError::DataFormat(_)));
}

// =============================================================================
// Analyses over a realistic fixture
// =============================================================================

#[test]
fn test_crypto_payment_analysis() {
    let file = create_test_file(&earnings_fixture());
    let dataset = DataLoader::new(file.path()).load().unwrap();
    let analyzer = DataAnalyzer::new(&dataset);

    let report = analyzer.crypto_payment();
    // Crypto cohort: 8000, 5500, 3200
    assert_eq!(report.crypto_vs_others.crypto_earnings.count, 3);
    assert_eq!(report.crypto_vs_others.crypto_earnings.mean, 5566.67);
    // Others: 2500, 700, 1800, 400, 9500
    assert_eq!(report.crypto_vs_others.other_earnings.mean, 2980.0);
    assert!(report.crypto_vs_others.crypto_higher);
    assert_eq!(report.payment_method_breakdown.len(), 3);
}

#[test]
fn test_regional_and_platform_analyses() {
    let file = create_test_file(&earnings_fixture());
    let dataset = DataLoader::new(file.path()).load().unwrap();
    let analyzer = DataAnalyzer::new(&dataset);

    let regional = analyzer.regional_income();
    assert_eq!(regional.market_leaders.highest_earning_region.region, "Europe");
    assert_eq!(regional.market_share_by_region["USA"], 37.5);
    assert_eq!(regional.earnings_range.global_max, 9500.0);

    let platforms = analyzer.platform_performance();
    let top = platforms.platform_ranking.by_earnings.first().unwrap();
    assert_eq!(top.0, "Toptal");
    assert_eq!(platforms.platform_statistics["Upwork"].freelancer_count, 3);
    assert_eq!(
        platforms.platform_statistics["Toptal"].rehire_rate_mean,
        Some(80.0)
    );
}

#[test]
fn test_expert_and_experience_analyses() {
    let file = create_test_file(&earnings_fixture());
    let dataset = DataLoader::new(file.path()).load().unwrap();
    let analyzer = DataAnalyzer::new(&dataset);

    let experts = analyzer.expert_projects();
    // Experts: jobs 250, 90, 140, 180 -> one under 100
    assert_eq!(experts.expert_project_analysis.total_experts, 4);
    assert_eq!(experts.expert_project_analysis.experts_under_100_projects, 1);
    assert_eq!(experts.expert_project_analysis.percentage_under_100, 25.0);
    assert_eq!(experts.project_range_breakdown["200+"], 1);

    let rates = analyzer.experience_rates();
    // Expert hourly rates: 60, 50, 28, 80 -> mean 54.5; beginners 14, 12 -> 13.0
    assert_eq!(rates.rate_progression["Expert"].avg_hourly_rate, 54.5);
    assert_eq!(rates.skill_premium.expert_vs_beginner_rate, 41.5);
}

#[test]
fn test_all_kinds_produce_json() {
    let file = create_test_file(&earnings_fixture());
    let dataset = DataLoader::new(file.path()).load().unwrap();
    let analyzer = DataAnalyzer::new(&dataset);

    for kind in AnalysisKind::all() {
        let value = kind.run(&analyzer).unwrap();
        assert!(value.is_object(), "{} produced no object", kind);
    }
}

// =============================================================================
// End-to-end question processing
// =============================================================================

#[test]
fn test_ask_question_end_to_end() {
    let file = create_test_file(&earnings_fixture());
    let settings = settings_for(file.path());

    let analyzer = FreelancerAnalyzer::offline(settings)
        .unwrap()
        .with_llm(MockProvider::with_answer("Toptal leads on earnings."));

    let outcome = analyzer
        .process_question("On which platform do freelancers earn the most?")
        .unwrap();

    assert_eq!(outcome.analysis_kind, "platform_performance");
    assert_eq!(outcome.answer.text(), "Toptal leads on earnings.");
    assert!(outcome.analysis_data["platform_ranking"]["by_earnings"].is_object());
}

#[test]
fn test_model_outage_still_returns_analysis() {
    let file = create_test_file(&earnings_fixture());
    let settings = settings_for(file.path());

    let analyzer = FreelancerAnalyzer::offline(settings)
        .unwrap()
        .with_llm(MockProvider::failing_timeout());

    let outcome = analyzer
        .process_question("Как распределяется доход по регионам?")
        .unwrap();

    assert_eq!(outcome.analysis_kind, "regional_income");
    assert!(outcome.answer.is_fallback());
    assert!(outcome.analysis_data["regional_statistics"].is_object());
}
