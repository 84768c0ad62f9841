use thiserror::Error;

use crate::types::ErrorType;

/// Result type alias for Alertmanager operations
pub type Result<T> = std::result::Result<T, AlertmanagerError>;

/// Errors that can occur when talking to Alertmanager
///
/// A body-level `error` envelope on a 2xx response is not an error here: the
/// operations return it as a regular [`crate::ApiResponse`]. Only
/// [`crate::ApiResponse::into_data`] turns it into [`AlertmanagerError::Application`].
#[derive(Debug, Error)]
pub enum AlertmanagerError {
    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The base URL cannot have path segments appended
    #[error("Invalid Alertmanager base URL: {0}")]
    InvalidBaseUrl(String),

    /// No response was received (connection refused, timeout, middleware failure)
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// The connection failed while the response body was being read
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Alertmanager answered with a non-2xx status code
    #[error("Alertmanager API error: HTTP {status} {status_text} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase of the status code
        status_text: String,
        /// Raw response body
        message: String,
        /// Response body, when it is valid JSON
        body: Option<serde_json::Value>,
    },

    /// A 2xx response body did not match the expected envelope
    #[error("Failed to decode Alertmanager response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Alertmanager returned an `error` envelope
    #[error("Alertmanager returned {error_type} error: {message}")]
    Application {
        error_type: ErrorType,
        message: String,
    },
}

impl AlertmanagerError {
    /// HTTP status code of the response, if one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error is an HTTP 404
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if no complete response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::ReadBody(_))
    }

    /// Check if the error is retryable
    ///
    /// Returns `true` for:
    /// - Network/connection errors
    /// - Timeout errors
    /// - Server errors (5xx status codes)
    ///
    /// The client itself never retries; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(reqwest_middleware::Error::Reqwest(err)) => {
                err.is_connect() || err.is_timeout()
            }
            Self::ReadBody(err) => err.is_timeout(),
            Self::Api { status, .. } => *status >= 500,
            Self::Application { error_type, .. } => *error_type == ErrorType::ServerError,
            _ => false,
        }
    }
}
