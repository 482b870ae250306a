//! Error types for the freelancer-analyzer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analyzer operations.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A required credential variable is not set.
    #[error("Missing credential: {0} environment variable not set")]
    MissingCredential(&'static str),

    /// Configuration error (bad value, invalid proxy URL, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured data file does not exist.
    #[error("Data file not found: {path}")]
    DataNotFound { path: PathBuf },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be parsed into its expected type.
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// The file parsed but does not match the expected table shape.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Empty file or no data rows to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream API rejected the credential.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The model request did not complete within the configured timeout.
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The upstream endpoint could not be reached at all.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx or otherwise invalid response from the model API.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
}

impl AnalyzerError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Authentication failures and client-side errors are permanent;
    /// timeouts, rate limits and server errors are transient.
    pub fn is_transient(&self) -> bool {
        match self {
            AnalyzerError::Timeout { .. } | AnalyzerError::Network(_) => true,
            AnalyzerError::Upstream { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
