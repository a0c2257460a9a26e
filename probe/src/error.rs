//! Probe error type
//!
//! Every check returns `Result<String, ProbeError>`; the error's `Display`
//! becomes the detail line of a failed check.

use careergpt_probe_common::error::CommonError;
use thiserror::Error;

/// Probe error type
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Transport-level failure (connect, TLS, body read)
    #[error("Exception: {0}")]
    Http(String),

    /// Request exceeded the configured timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Non-success status that the check does not treat specially
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body (clipped)
        body: String,
    },

    /// 404 for a resource the check expected to exist
    #[error("{0} not found (404)")]
    NotFound(String),

    /// Body was not valid JSON or did not match the typed view
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Required keys absent from the JSON body
    #[error("Missing fields: {0:?}")]
    MissingFields(Vec<String>),

    /// Body has the keys but the values are wrong
    #[error("{0}")]
    Unexpected(String),

    /// A value captured by an earlier check is unavailable
    #[error("{0}")]
    MissingDependency(String),

    /// Local file could not be read (e.g. resume upload source)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Whether the check was skipped because an earlier capture is missing
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::MissingDependency(_))
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias (probe)
pub type ProbeResult<T> = Result<T, ProbeError>;
