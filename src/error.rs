//! Error types for the Octopus Energy to tado° reading sync.
//!
//! Each stage of a run has its own error enum so callers can decide what to
//! escalate: fetch errors end pagination quietly, submission errors end the
//! process.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// tado° reading submission errors
    #[error("reading submission error")]
    Submission(#[from] SubmissionError),

    /// Run-level refusals
    #[error("sync aborted")]
    Sync(#[from] SyncError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while fetching one page of consumption data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a consumption page
    #[error("failed to decode consumption page: {0}")]
    Decode(#[from] serde_json::Error),

    /// Pagination guard tripped
    #[error("stopped after {0} pages without reaching the last page")]
    TooManyPages(usize),
}

/// Errors raised while submitting a reading to tado°.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Token request was rejected
    #[error("authentication failed (status {status}): {body}")]
    AuthFailed { status: u16, body: String },

    /// Account lookup returned no home to attach the reading to
    #[error("account has no home")]
    NoHome,

    /// Server answered with a non-success status
    #[error("{step} failed with status {status}: {body}")]
    Status {
        step: &'static str,
        status: u16,
        body: String,
    },
}

/// Reasons a run refuses to submit.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Pagination stopped early and strict mode is on
    #[error("consumption history is incomplete: {0}")]
    IncompleteAggregation(String),

    /// No interval was returned by the source
    #[error("no consumption data available")]
    NoData,
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Creates a status error from HTTP status and response body.
    pub fn status(status: reqwest::StatusCode, body: String) -> Self {
        Self::Status {
            status: status.as_u16(),
            body,
        }
    }

    /// Whether another attempt at the same URL could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Decode(_) | Self::TooManyPages(_) => false,
        }
    }
}

impl SubmissionError {
    /// Creates an authentication error from a rejected token request.
    pub fn auth_failed(status: reqwest::StatusCode, body: String) -> Self {
        Self::AuthFailed {
            status: status.as_u16(),
            body,
        }
    }

    /// Creates an error for a failed request step.
    pub fn status(step: &'static str, status: reqwest::StatusCode, body: String) -> Self {
        Self::Status {
            step,
            status: status.as_u16(),
            body,
        }
    }
}
