//! Error types for OCS API calls

use thiserror::Error;

/// Errors raised by the wrapper itself or forwarded from the HTTP layer.
///
/// A remote `failure` status is not an error: it comes back as a regular
/// [`Envelope`](super::Envelope) for the caller to inspect.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP-layer failure, forwarded unchanged from reqwest.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body could not be read as an OCS envelope.
    #[error("Failed parsing response (HTTP {status}): {reason}")]
    EnvelopeParse {
        reason: String,
        status: u16,
        raw_body: String,
    },

    /// A single-field update named a field outside its allow-list.
    #[error("The key {field} was not one of the following: {}", allowed.join(", "))]
    InvalidField { field: String, allowed: Vec<String> },

    /// An options map or path argument failed local validation.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Invalid base URI '{uri}': {reason}")]
    InvalidBaseUri { uri: String, reason: String },
}

impl ApiError {
    pub(crate) fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }

    /// Raw response body, when the error carries one
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::EnvelopeParse { raw_body, .. } => Some(raw_body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
