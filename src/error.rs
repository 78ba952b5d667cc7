//! Error types for almanaut
//!
//! This module defines the error hierarchy for the whole crate and the
//! classifier that turns a failed Alma response into a domain error.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The main error type for almanaut
#[derive(Error, Debug)]
pub enum Error {
    /// Network/HTTP-layer failure below the domain-error envelope
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A structured error reported by the Alma API
    #[error("{code}: {message}")]
    Api {
        /// Classified error kind
        kind: ApiErrorKind,
        /// Remote-reported error code (-1 when absent)
        code: i64,
        /// Remote-reported human message
        message: String,
        /// Auxiliary data mapping from the error envelope
        data: Value,
        /// HTTP status of the failed response
        status: u16,
        /// Original response body, retained for introspection
        body: String,
    },

    /// The payload does not satisfy the declared resource schema
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload parsed but lacks the shape the merge step expects
    #[error("malformed payload: {message}")]
    MalformedPayload {
        /// What was missing or mis-shaped
        message: String,
    },

    /// The configured host or endpoint does not form a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A retrieval request that cannot be executed as given
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },
}

impl Error {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a malformed payload error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// The classified kind of an API error, if this is one
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for almanaut
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Error Classifier
// ============================================================================

/// Closed enumeration of Alma error codes the client recognizes
///
/// Codes absent from the table fall back to `Unclassified`; the original
/// code and message are preserved on the error either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Unrecognized or absent error code
    Unclassified,
    /// Code -402119
    General,
    /// Code -40166410
    InvalidParameterWithValidOptions,
    /// Code -40166419
    NoValidOptionsParameter,
    /// Code -401873
    NoFilterWithPolMode,
}

impl ApiErrorKind {
    /// Look up a remote error code in the fixed classification table
    pub fn from_code(code: i64) -> Self {
        match code {
            -402119 => Self::General,
            -40166410 => Self::InvalidParameterWithValidOptions,
            -40166419 => Self::NoValidOptionsParameter,
            -401873 => Self::NoFilterWithPolMode,
            _ => Self::Unclassified,
        }
    }
}

/// The `error` object embedded in a failed response body
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default = "default_code")]
    code: i64,
    #[serde(default = "default_message")]
    message: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorEnvelope,
}

fn default_code() -> i64 {
    -1
}

fn default_message() -> String {
    "An unknown error occurred".to_string()
}

impl Default for ErrorEnvelope {
    fn default() -> Self {
        Self {
            code: default_code(),
            message: default_message(),
            data: Value::Null,
        }
    }
}

/// Classify a failed response (status >= 400) into an [`Error::Api`]
///
/// Bodies without a parseable envelope classify as `Unclassified` with the
/// default code of -1. Classification always produces an error, never a
/// silent return.
pub(crate) fn classify_error_response(status: u16, body: &str) -> Error {
    let envelope = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_default();

    Error::Api {
        kind: ApiErrorKind::from_code(envelope.code),
        code: envelope.code,
        message: envelope.message,
        data: envelope.data,
        status,
        body: body.to_string(),
    }
}
