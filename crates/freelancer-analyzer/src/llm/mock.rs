//! Mock LLM provider for testing.

use std::sync::Mutex;

use crate::error::{AnalyzerError, Result};

use super::provider::{LlmConfig, LlmProvider};

/// What the mock should do when queried.
#[derive(Debug)]
enum Behavior {
    /// Return a canned answer.
    Answer(String),
    /// Fail with an authentication error.
    FailAuth,
    /// Fail with a timeout.
    FailTimeout,
}

/// Mock provider returning predictable responses.
///
/// Records every prompt it receives so tests can assert on the prompt
/// contents.
#[derive(Debug)]
pub struct MockProvider {
    config: LlmConfig,
    behavior: Behavior,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    /// A mock that answers every prompt.
    pub fn new() -> Self {
        Self::with_answer("Mock model answer based on the supplied analysis.")
    }

    /// A mock with a specific canned answer.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            config: LlmConfig::default(),
            behavior: Behavior::Answer(answer.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A mock that rejects the credential.
    pub fn failing_auth() -> Self {
        Self {
            config: LlmConfig::default(),
            behavior: Behavior::FailAuth,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A mock that times out.
    pub fn failing_timeout() -> Self {
        Self {
            config: LlmConfig::default(),
            behavior: Behavior::FailTimeout,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        match &self.behavior {
            Behavior::Answer(answer) => Ok(answer.clone()),
            Behavior::FailAuth => Err(AnalyzerError::Authentication(
                "invalid x-api-key".to_string(),
            )),
            Behavior::FailTimeout => Err(AnalyzerError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }),
        }
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
