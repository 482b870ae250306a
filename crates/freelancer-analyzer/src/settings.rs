//! Runtime configuration resolved from environment variables.
//!
//! All configuration is reified into an immutable [`Settings`] value at
//! process start and passed explicitly into the components that need it.
//! Components never read process-wide environment state themselves, which
//! keeps them testable with injected configuration.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AnalyzerError, Result};

static HTTP_PROXY_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").unwrap());
static SOCKS_PROXY_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^socks(4|5|5h)?://").unwrap());

/// Default Claude model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
/// Default response token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default dataset location.
pub const DEFAULT_DATA_PATH: &str = "data/freelancer_earnings_bd.csv";

/// Log verbosity, parsed from `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by tracing-subscriber's `EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {}. Use: error, warn, info, debug, or trace.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// Resolved outbound proxy for reaching the model API.
///
/// `HTTP_PROXY`/`HTTPS_PROXY` and `SOCKS_PROXY` are mutually exclusive
/// alternatives; when both families are set, the HTTP family wins and the
/// SOCKS setting is ignored. They are never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyConfig {
    /// HTTP or HTTPS proxy URL.
    Http(String),
    /// SOCKS proxy URL (socks5:// scheme).
    Socks(String),
}

impl ProxyConfig {
    /// The proxy URL regardless of scheme family.
    pub fn url(&self) -> &str {
        match self {
            ProxyConfig::Http(url) | ProxyConfig::Socks(url) => url,
        }
    }
}

/// Immutable configuration for one run.
///
/// Created once at process start from environment variables, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Credential for the Anthropic API.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,
    /// Response length cap.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional outbound proxy.
    pub proxy: Option<ProxyConfig>,
    /// Input dataset location.
    pub data_path: PathBuf,
    /// Verbose diagnostics toggle.
    pub debug: bool,
    /// Log verbosity.
    pub log_level: LogLevel,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// The lookup is consulted once per variable; empty values are treated
    /// as unset. Fails with [`AnalyzerError::MissingCredential`] when
    /// `ANTHROPIC_API_KEY` is absent, before any file or network I/O.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("ANTHROPIC_API_KEY")
            .ok_or(AnalyzerError::MissingCredential("ANTHROPIC_API_KEY"))?;

        let model = get("CLAUDE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match get("CLAUDE_TEMPERATURE") {
            Some(raw) => parse_temperature(&raw)?,
            None => DEFAULT_TEMPERATURE,
        };

        let max_tokens = match get("CLAUDE_MAX_TOKENS") {
            Some(raw) => parse_positive::<u32>(&raw, "CLAUDE_MAX_TOKENS")?,
            None => DEFAULT_MAX_TOKENS,
        };

        let timeout_secs = match get("CLAUDE_TIMEOUT") {
            Some(raw) => parse_positive::<u64>(&raw, "CLAUDE_TIMEOUT")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        // HTTPS over HTTP within the family; HTTP family over SOCKS.
        let proxy = match get("HTTPS_PROXY").or_else(|| get("HTTP_PROXY")) {
            Some(url) => {
                if !HTTP_PROXY_SCHEME.is_match(&url) {
                    return Err(AnalyzerError::Config(format!(
                        "HTTP_PROXY/HTTPS_PROXY must be an http:// or https:// URL, got '{}'",
                        url
                    )));
                }
                Some(ProxyConfig::Http(url))
            }
            None => match get("SOCKS_PROXY") {
                Some(url) => {
                    if !SOCKS_PROXY_SCHEME.is_match(&url) {
                        return Err(AnalyzerError::Config(format!(
                            "SOCKS_PROXY must be a socks:// URL, got '{}'",
                            url
                        )));
                    }
                    Some(ProxyConfig::Socks(url))
                }
                None => None,
            },
        };

        let data_path = get("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let debug = match get("DEBUG") {
            Some(raw) => parse_bool(&raw, "DEBUG")?,
            None => false,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(raw) => raw.parse().map_err(AnalyzerError::Config)?,
            None => LogLevel::default(),
        };

        Ok(Self {
            api_key,
            model,
            temperature,
            max_tokens,
            timeout_secs,
            proxy,
            data_path,
            debug,
            log_level,
        })
    }

    /// Replace the dataset path (CLI override).
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Serialize back to the environment variables that produce this value.
    ///
    /// `from_source` over the returned pairs yields an identical Settings.
    pub fn to_env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![
            ("ANTHROPIC_API_KEY", self.api_key.clone()),
            ("CLAUDE_MODEL", self.model.clone()),
            ("CLAUDE_TEMPERATURE", self.temperature.to_string()),
            ("CLAUDE_MAX_TOKENS", self.max_tokens.to_string()),
            ("CLAUDE_TIMEOUT", self.timeout_secs.to_string()),
        ];

        match &self.proxy {
            Some(ProxyConfig::Http(url)) => vars.push(("HTTP_PROXY", url.clone())),
            Some(ProxyConfig::Socks(url)) => vars.push(("SOCKS_PROXY", url.clone())),
            None => {}
        }

        vars.push(("DATA_PATH", self.data_path.display().to_string()));
        vars.push(("DEBUG", self.debug.to_string()));
        vars.push(("LOG_LEVEL", self.log_level.to_string()));
        vars
    }

    /// Tracing filter directive implied by `DEBUG` and `LOG_LEVEL`.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            self.log_level.as_filter()
        }
    }
}

/// Resolve the dataset path for commands that never reach the network.
///
/// Precedence: explicit override, then `DATA_PATH`, then the default.
pub fn resolve_data_path(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(|| {
            std::env::var("DATA_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

fn parse_temperature(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        AnalyzerError::Config(format!("CLAUDE_TEMPERATURE is not a number: '{}'", raw))
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(AnalyzerError::Config(format!(
            "CLAUDE_TEMPERATURE must be between 0 and 1, got {}",
            value
        )));
    }
    Ok(value)
}

fn parse_positive<T>(raw: &str, name: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| AnalyzerError::Config(format!("{} is not a valid integer: '{}'", name, raw)))?;
    if value < T::from(1u8) {
        return Err(AnalyzerError::Config(format!(
            "{} must be a positive integer, got '{}'",
            name, raw
        )));
    }
    Ok(value)
}

fn parse_bool(raw: &str, name: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AnalyzerError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_credential_fails() {
        let err = Settings::from_source(source(&[])).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::MissingCredential("ANTHROPIC_API_KEY")
        ));
    }

    #[test]
    fn test_empty_credential_fails() {
        let err = Settings::from_source(source(&[("ANTHROPIC_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingCredential(_)));
    }

    #[test]
    fn test_defaults() {
        let settings =
            Settings::from_source(source(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();

        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(settings.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.proxy, None);
        assert_eq!(settings.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!settings.debug);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_http_proxy_resolved() {
        let settings = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("HTTP_PROXY", "http://127.0.0.1:10801"),
        ]))
        .unwrap();

        assert_eq!(
            settings.proxy,
            Some(ProxyConfig::Http("http://127.0.0.1:10801".into()))
        );
    }

    #[test]
    fn test_http_proxy_wins_over_socks() {
        let settings = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("HTTP_PROXY", "http://127.0.0.1:10801"),
            ("SOCKS_PROXY", "socks5://127.0.0.1:1080"),
        ]))
        .unwrap();

        assert_eq!(
            settings.proxy,
            Some(ProxyConfig::Http("http://127.0.0.1:10801".into()))
        );
    }

    #[test]
    fn test_https_proxy_wins_within_family() {
        let settings = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("HTTP_PROXY", "http://127.0.0.1:10801"),
            ("HTTPS_PROXY", "http://127.0.0.1:10802"),
        ]))
        .unwrap();

        assert_eq!(
            settings.proxy,
            Some(ProxyConfig::Http("http://127.0.0.1:10802".into()))
        );
    }

    #[test]
    fn test_socks_proxy_alone() {
        let settings = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("SOCKS_PROXY", "socks5://127.0.0.1:1080"),
        ]))
        .unwrap();

        assert_eq!(
            settings.proxy,
            Some(ProxyConfig::Socks("socks5://127.0.0.1:1080".into()))
        );
    }

    #[test]
    fn test_proxy_scheme_validated() {
        let err = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("HTTP_PROXY", "127.0.0.1:10801"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));

        let err = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("SOCKS_PROXY", "http://127.0.0.1:1080"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        for bad in ["abc", "1.5", "-0.1"] {
            let err = Settings::from_source(source(&[
                ("ANTHROPIC_API_KEY", "sk-test"),
                ("CLAUDE_TEMPERATURE", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, AnalyzerError::Config(_)), "accepted {}", bad);
        }
    }

    #[test]
    fn test_invalid_max_tokens_rejected() {
        for bad in ["0", "-5", "many"] {
            let err = Settings::from_source(source(&[
                ("ANTHROPIC_API_KEY", "sk-test"),
                ("CLAUDE_MAX_TOKENS", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, AnalyzerError::Config(_)), "accepted {}", bad);
        }
    }

    #[test]
    fn test_debug_flag_parsing() {
        for (raw, expected) in [("true", true), ("1", true), ("FALSE", false), ("0", false)] {
            let settings = Settings::from_source(source(&[
                ("ANTHROPIC_API_KEY", "sk-test"),
                ("DEBUG", raw),
            ]))
            .unwrap();
            assert_eq!(settings.debug, expected, "for {}", raw);
        }
    }

    #[test]
    fn test_log_level_parsing() {
        let settings = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.log_filter(), "debug");
    }

    #[test]
    fn test_debug_overrides_log_filter() {
        let settings = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("LOG_LEVEL", "warn"),
            ("DEBUG", "true"),
        ]))
        .unwrap();
        assert_eq!(settings.log_filter(), "debug");
    }

    #[test]
    fn test_env_round_trip() {
        let original = Settings::from_source(source(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("CLAUDE_MODEL", "claude-3-5-haiku-20241022"),
            ("CLAUDE_TEMPERATURE", "0.7"),
            ("CLAUDE_MAX_TOKENS", "2048"),
            ("CLAUDE_TIMEOUT", "15"),
            ("SOCKS_PROXY", "socks5://127.0.0.1:1080"),
            ("DATA_PATH", "data/custom.csv"),
            ("DEBUG", "true"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        let vars = original.to_env_vars();
        let pairs: Vec<(&str, &str)> = vars
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        let reloaded = Settings::from_source(source(&pairs)).unwrap();

        assert_eq!(original, reloaded);
    }
}
