// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

use std::time::Duration;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// All failures the transport client can surface to application code.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The bridge could not be reached (DNS resolution or TCP connect failed).
    #[error("Failed to reach bridge: {0}")]
    Connection(String),

    /// The request did not complete within the configured timeout.
    #[error("Bridge request timed out after {0:?}")]
    Timeout(Duration),

    /// The bridge answered with a success status but a body that is not
    /// valid JSON, or JSON of an unexpected shape.
    #[error("Malformed response from bridge for {endpoint}: {reason}")]
    InvalidResponse {
        /// Endpoint path the request was sent to.
        endpoint: String,
        /// Parse or decode failure description.
        reason: String,
    },

    /// The bridge answered with an error status (4xx/5xx).
    #[error("Bridge returned {status} for {endpoint}: {message}")]
    Bridge {
        /// HTTP status code returned by the bridge.
        status: u16,
        /// Endpoint path the request was sent to.
        endpoint: String,
        /// Error message extracted from the response body, or "Unknown error".
        message: String,
    },

    /// A successful response is missing a field the operation requires.
    #[error("Bridge response for {endpoint} is missing required field `{field}`")]
    MissingField {
        /// Endpoint path the request was sent to.
        endpoint: String,
        /// Name of the absent field.
        field: &'static str,
    },

    /// The caller cancelled the operation via its cancellation token.
    #[error("Operation cancelled")]
    Cancelled,

    /// The client was constructed with unusable configuration.
    #[error("Invalid bridge client configuration: {0}")]
    Config(String),

    /// Wraps a URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wraps a Serde JSON serialization error for request bodies.
    #[error("Request serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BridgeError {
    /// Whether the retry policy may reattempt after this failure.
    ///
    /// Connection and timeout failures are transient. HTTP errors are
    /// retried for 408 and 5xx only; any other 4xx is a client-side
    /// problem a retry cannot fix.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::Timeout(_) => true,
            Self::Bridge { status, .. } => *status == 408 || *status >= 500,
            _ => false,
        }
    }

    /// Classifies a transport-level `reqwest` failure.
    pub(crate) fn from_reqwest(err: reqwest::Error, request_timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(request_timeout)
        } else {
            Self::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge(status: u16) -> BridgeError {
        BridgeError::Bridge {
            status,
            endpoint: "/tx/submit".into(),
            message: "boom".into(),
        }
    }

    #[test]
    fn retryable_classification() {
        assert!(BridgeError::Connection("refused".into()).is_retryable());
        assert!(BridgeError::Timeout(Duration::from_secs(10)).is_retryable());
        assert!(bridge(408).is_retryable());
        assert!(bridge(500).is_retryable());
        assert!(bridge(503).is_retryable());
        assert!(!bridge(400).is_retryable());
        assert!(!bridge(401).is_retryable());
        assert!(!bridge(404).is_retryable());
        assert!(!BridgeError::Cancelled.is_retryable());
        assert!(!BridgeError::InvalidResponse {
            endpoint: "/health".into(),
            reason: "not json".into()
        }
        .is_retryable());
    }
}
