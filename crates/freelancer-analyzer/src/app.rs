//! Orchestration of the analysis pipeline.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisKind, DataAnalyzer};
use crate::dataset::{DataLoader, Dataset};
use crate::error::Result;
use crate::llm::{self, prompts, AnthropicProvider, LlmProvider};
use crate::settings::Settings;

/// The answer attached to a processed question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Answer {
    /// Text produced by the model.
    Model { text: String },
    /// Static fallback used when the model was unavailable or failed.
    Fallback { reason: String, text: String },
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Model { text } | Answer::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Answer::Fallback { .. })
    }
}

/// Result of processing one natural-language question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question: String,
    /// The analysis the question was routed to.
    pub analysis_kind: String,
    /// Full analysis data the answer is based on.
    pub analysis_data: serde_json::Value,
    pub answer: Answer,
}

/// Result of the model connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmTestStatus {
    Passed,
    Failed(String),
    NotAvailable,
}

/// Overall system health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    LlmUnavailable,
}

/// Health report for the `health` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub dataset_records: usize,
    pub api_key_set: bool,
    pub llm_initialized: bool,
    pub llm_test: LlmTestStatus,
    pub overall_status: HealthStatus,
}

/// Coordinates data loading, analysis, and model integration for one run.
///
/// The pipeline is strictly ordered: settings are fully resolved before
/// construction, the dataset is loaded before any provider is consulted,
/// and the model is only reached when a question is actually processed.
#[derive(Debug)]
pub struct FreelancerAnalyzer {
    settings: Settings,
    dataset: Dataset,
    llm: Option<Arc<dyn LlmProvider>>,
}

impl FreelancerAnalyzer {
    /// Load the dataset and construct the Anthropic provider.
    ///
    /// Data errors surface here, before any network request is made.
    pub fn initialize(settings: Settings) -> Result<Self> {
        let dataset = DataLoader::new(&settings.data_path).load()?;
        let provider = AnthropicProvider::from_settings(&settings)?;

        Ok(Self {
            settings,
            dataset,
            llm: Some(Arc::new(provider)),
        })
    }

    /// Load the dataset without any model provider.
    pub fn offline(settings: Settings) -> Result<Self> {
        let dataset = DataLoader::new(&settings.data_path).load()?;
        Ok(Self {
            settings,
            dataset,
            llm: None,
        })
    }

    /// Replace the model provider (used by tests).
    pub fn with_llm(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.llm = Some(Arc::new(provider));
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn analyzer(&self) -> DataAnalyzer<'_> {
        DataAnalyzer::new(&self.dataset)
    }

    /// Run one named analysis.
    pub fn run_analysis(&self, kind: AnalysisKind) -> Result<serde_json::Value> {
        kind.run(&self.analyzer())
    }

    /// Process a natural-language question.
    ///
    /// The question is routed to an analysis, the analysis runs locally,
    /// and only then is the model consulted. A model failure degrades to
    /// the fallback response; the analysis data is returned either way.
    pub fn process_question(&self, question: &str) -> Result<QuestionOutcome> {
        let kind = llm::classify(question);
        tracing::debug!(question, %kind, "routed question");

        let analysis_data = self.run_analysis(kind)?;

        let answer = match &self.llm {
            None => Answer::Fallback {
                reason: "no model provider configured".to_string(),
                text: prompts::fallback_response().to_string(),
            },
            Some(provider) => {
                let analysis_json = serde_json::to_string_pretty(&analysis_data)?;
                let prompt = prompts::question_prompt(question, kind, &analysis_json);

                match provider.complete(&prompt) {
                    Ok(text) => Answer::Model { text },
                    Err(err) => {
                        tracing::warn!(error = %err, "model query failed, using fallback");
                        Answer::Fallback {
                            reason: err.to_string(),
                            text: prompts::fallback_response().to_string(),
                        }
                    }
                }
            }
        };

        Ok(QuestionOutcome {
            question: question.to_string(),
            analysis_kind: kind.to_string(),
            analysis_data,
            answer,
        })
    }

    /// Check the health of the system, including a live model probe.
    pub fn health_check(&self) -> HealthReport {
        let llm_test = match &self.llm {
            None => LlmTestStatus::NotAvailable,
            Some(provider) => match provider.complete(prompts::health_probe_prompt()) {
                Ok(_) => LlmTestStatus::Passed,
                Err(err) => LlmTestStatus::Failed(err.to_string()),
            },
        };

        let overall_status = match (&self.llm, &llm_test) {
            (None, _) => HealthStatus::LlmUnavailable,
            (Some(_), LlmTestStatus::Passed) => HealthStatus::Healthy,
            (Some(_), _) => HealthStatus::Degraded,
        };

        HealthReport {
            dataset_records: self.dataset.len(),
            api_key_set: !self.settings.api_key.is_empty(),
            llm_initialized: self.llm.is_some(),
            llm_test,
            overall_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Freelancer_ID,Job_Category,Platform,Experience_Level,Client_Region,Payment_Method,Job_Completed,Earnings_USD,Hourly_Rate,Job_Success_Rate,Client_Rating
1,Web Development,Upwork,Expert,USA,Crypto,120,5000.0,40.0,92.0,4.8
2,Design,Fiverr,Beginner,UK,PayPal,15,800.0,15.0,75.0,4.2
3,Writing,Freelancer,Intermediate,Asia,Bank Transfer,45,1500.0,20.0,85.0,4.5
";

    fn analyzer_with(provider: MockProvider) -> (FreelancerAnalyzer, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let settings = Settings::from_source(|key| match key {
            "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
            _ => None,
        })
        .unwrap()
        .with_data_path(file.path());

        let analyzer = FreelancerAnalyzer::offline(settings)
            .unwrap()
            .with_llm(provider);
        (analyzer, file)
    }

    #[test]
    fn test_process_question_with_model() {
        let (analyzer, _file) = analyzer_with(MockProvider::with_answer("Crypto earns more."));

        let outcome = analyzer
            .process_question("Do crypto payments earn more?")
            .unwrap();

        assert_eq!(outcome.analysis_kind, "crypto_payment");
        assert!(!outcome.answer.is_fallback());
        assert_eq!(outcome.answer.text(), "Crypto earns more.");
        assert!(outcome.analysis_data.get("crypto_vs_others").is_some());
    }

    #[test]
    fn test_model_failure_degrades_to_fallback() {
        let (analyzer, _file) = analyzer_with(MockProvider::failing_timeout());

        let outcome = analyzer.process_question("summary please").unwrap();

        assert!(outcome.answer.is_fallback());
        assert!(outcome.answer.text().contains("ANTHROPIC_API_KEY"));
        // Analysis data survives the degradation.
        assert!(outcome.analysis_data.get("dataset_overview").is_some());
    }

    #[test]
    fn test_prompt_carries_analysis_data() {
        let provider = MockProvider::new();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let settings = Settings::from_source(|key| match key {
            "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
            _ => None,
        })
        .unwrap()
        .with_data_path(file.path());

        let analyzer = FreelancerAnalyzer::offline(settings).unwrap();
        let provider_ref = Arc::new(provider);
        let analyzer = FreelancerAnalyzer {
            llm: Some(provider_ref.clone() as Arc<dyn LlmProvider>),
            ..analyzer
        };

        analyzer
            .process_question("Which platform is best?")
            .unwrap();

        let prompts = provider_ref.received_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("platform_statistics"));
        assert!(prompts[0].contains("Which platform is best?"));
    }

    #[test]
    fn test_health_check_states() {
        let (healthy, _f1) = analyzer_with(MockProvider::new());
        let report = healthy.health_check();
        assert_eq!(report.overall_status, HealthStatus::Healthy);
        assert_eq!(report.llm_test, LlmTestStatus::Passed);
        assert_eq!(report.dataset_records, 3);

        let (degraded, _f2) = analyzer_with(MockProvider::failing_auth());
        let report = degraded.health_check();
        assert_eq!(report.overall_status, HealthStatus::Degraded);
        assert!(matches!(report.llm_test, LlmTestStatus::Failed(_)));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let settings = Settings::from_source(|key| match key {
            "ANTHROPIC_API_KEY" => Some("sk-test".to_string()),
            _ => None,
        })
        .unwrap()
        .with_data_path(file.path());
        let offline = FreelancerAnalyzer::offline(settings).unwrap();
        assert_eq!(
            offline.health_check().overall_status,
            HealthStatus::LlmUnavailable
        );
    }
}
