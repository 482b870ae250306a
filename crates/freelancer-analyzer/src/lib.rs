//! Freelancer Analyzer: statistical analysis of freelancer earnings data
//! with optional Claude-powered natural-language answers.
//!
//! The pipeline is linear: resolve settings from the environment, load the
//! CSV dataset, run an analysis, and optionally ask the model to narrate
//! the results.
//!
//! # Example
//!
//! ```no_run
//! use freelancer_analyzer::{FreelancerAnalyzer, Settings};
//!
//! let settings = Settings::from_env().unwrap();
//! let analyzer = FreelancerAnalyzer::initialize(settings).unwrap();
//!
//! let outcome = analyzer.process_question("Which platform pays best?").unwrap();
//! println!("{}", outcome.answer.text());
//! ```

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod input;
pub mod llm;
pub mod settings;
pub mod stats;

mod app;

pub use analysis::{AnalysisKind, DataAnalyzer};
pub use app::{Answer, FreelancerAnalyzer, HealthReport, HealthStatus, LlmTestStatus, QuestionOutcome};
pub use dataset::{DataLoader, Dataset, DatasetInfo, EarningsRecord, QualityReport};
pub use error::{AnalyzerError, Result};
pub use input::{DataTable, SourceMetadata};
pub use llm::{AnthropicProvider, LlmConfig, LlmProvider, MockProvider};
pub use settings::{resolve_data_path, LogLevel, ProxyConfig, Settings};
