use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Value of the `status` field present on every response body
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl Display for ResponseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStatus::Success => write!(f, "success"),
            ResponseStatus::Error => write!(f, "error"),
        }
    }
}

/// Classification carried by an `error` envelope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ErrorType {
    /// Empty `errorType`
    #[default]
    #[serde(rename = "")]
    None,
    /// Internal failure on the Alertmanager side
    #[serde(rename = "server_error")]
    ServerError,
    /// Malformed request parameters or body
    #[serde(rename = "bad_data")]
    BadData,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::None => "",
            ErrorType::ServerError => "server_error",
            ErrorType::BadData => "bad_data",
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body wrapper
///
/// The `status` field decides the shape: a `success` body carries `data`,
/// an `error` body carries `errorType` and `error`. A `success` body without
/// `data` is rejected at decode time unless `T` is an `Option`.
///
/// ```rust
/// use alertmanager_client::{Envelope, ErrorType};
///
/// let body = r#"{"status":"error","errorType":"bad_data","error":"start time must not be equal to end time"}"#;
/// let envelope: Envelope<Vec<String>> = serde_json::from_str(body).unwrap();
///
/// assert_eq!(envelope.error_type(), Some(ErrorType::BadData));
/// assert!(envelope.data().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success {
        data: T,
    },
    Error {
        #[serde(rename = "errorType", default)]
        error_type: ErrorType,
        error: String,
    },
}

impl<T> Envelope<T> {
    pub fn status(&self) -> ResponseStatus {
        match self {
            Envelope::Success { .. } => ResponseStatus::Success,
            Envelope::Error { .. } => ResponseStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    /// Payload of a `success` envelope
    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success { data } => Some(data),
            Envelope::Error { .. } => None,
        }
    }

    /// Consume the envelope, keeping only the payload
    pub fn into_data(self) -> Option<T> {
        match self {
            Envelope::Success { data } => Some(data),
            Envelope::Error { .. } => None,
        }
    }

    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            Envelope::Error { error_type, .. } => Some(*error_type),
            Envelope::Success { .. } => None,
        }
    }

    /// Human-readable message of an `error` envelope
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Envelope::Error { error, .. } => Some(error),
            Envelope::Success { .. } => None,
        }
    }
}
