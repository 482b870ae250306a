//! Anthropic Claude messages API provider.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AnalyzerError, Result};
use crate::settings::Settings;

use super::prompts;
use super::provider::{LlmConfig, LlmProvider};

/// Anthropic API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version.
const API_VERSION: &str = "2023-06-01";

/// Base delay for retry backoff.
const BACKOFF_BASE_MS: u64 = 500;

/// Anthropic Claude provider.
#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl AnthropicProvider {
    /// Create a provider with the given API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::default(), None)
    }

    /// Create a provider from resolved settings, honoring the configured
    /// proxy and timeout.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::with_config(
            settings.api_key.clone(),
            LlmConfig::from_settings(settings),
            settings.proxy.as_ref().map(|p| p.url().to_string()),
        )
    }

    /// Create a provider with explicit configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        config: LlmConfig,
        proxy_url: Option<String>,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout);

        if let Some(url) = proxy_url {
            let proxy = reqwest::Proxy::all(&url)
                .map_err(|e| AnalyzerError::Config(format!("Invalid proxy URL '{}': {}", url, e)))?;
            tracing::debug!(proxy = %url, "routing model requests through proxy");
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| AnalyzerError::Config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    /// Single request attempt, without retries.
    fn send_once(&self, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": prompts::system_prompt(),
            "messages": [
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        let response = self
            .client
            .post(API_URL)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => AnalyzerError::Authentication(message),
                code => AnalyzerError::Upstream { status: code, message },
            });
        }

        let api_response: ApiResponse = response.json().map_err(|e| AnalyzerError::Upstream {
            status: status.as_u16(),
            message: format!("Failed to parse API response: {}", e),
        })?;

        api_response
            .content
            .into_iter()
            .find_map(|block| {
                if block.content_type == "text" {
                    Some(block.text)
                } else {
                    None
                }
            })
            .ok_or_else(|| AnalyzerError::Upstream {
                status: status.as_u16(),
                message: "No text in API response".to_string(),
            })
    }

    fn classify_send_error(&self, error: reqwest::Error) -> AnalyzerError {
        if error.is_timeout() {
            AnalyzerError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            AnalyzerError::Network(error.to_string())
        }
    }

    /// Backoff delay before the given retry attempt.
    fn backoff(attempt: u32) -> Duration {
        let base = BACKOFF_BASE_MS * 2u64.pow(attempt);
        Duration::from_millis(base + fastrand::u64(0..BACKOFF_BASE_MS / 2))
    }
}

impl LlmProvider for AnthropicProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        let mut attempt = 0u32;
        loop {
            match self.send_once(prompt) {
                Ok(text) => return Ok(text.trim().to_string()),
                Err(err) if err.is_transient() && attempt < self.config.max_retries => {
                    let delay = Self::backoff(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient model API failure, retrying"
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

/// Anthropic API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// Content block in API response.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}
