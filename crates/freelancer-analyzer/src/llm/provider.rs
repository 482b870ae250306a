//! LLM provider trait and configuration.

use std::time::Duration;

use crate::settings::{Settings, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS};

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier.
    pub model: String,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum retries after a transient failure.
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 2,
        }
    }
}

impl LlmConfig {
    /// Derive the provider configuration from resolved settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout: Duration::from_secs(settings.timeout_secs),
            ..Self::default()
        }
    }
}

/// Trait for chat-completion providers.
///
/// Implementations must be thread-safe (Send + Sync) so a provider can be
/// shared behind an `Arc` by the orchestrator.
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Send a prompt and return the model's text response.
    fn complete(&self, prompt: &str) -> crate::error::Result<String>;

    /// Provider configuration.
    fn config(&self) -> &LlmConfig;

    /// Provider name for logging and health reports.
    fn name(&self) -> &str;
}
