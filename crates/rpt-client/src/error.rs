//! Error types for the filters client.

use thiserror::Error;

/// Errors that can occur while fetching filter options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The server answered with a non-success HTTP status.
    #[error("HTTP error: status {status}")]
    Transport {
        /// HTTP status code.
        status: u16,
    },

    /// The envelope reported a status other than `"OK"`.
    #[error("API error: {status}")]
    Api {
        /// Status string reported by the API.
        status: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not a valid envelope.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl FetchError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport { .. } | Self::Network(_) => {
                "Could not reach the report server. Please check your connection."
            }
            Self::Api { .. } => "The report server rejected the request.",
            Self::JsonParse(_) => "The report server sent an unexpected response.",
            Self::InvalidUrl { .. } => "The report server address is misconfigured.",
        }
    }

    /// Returns whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Transport { status } => *status >= 500 || *status == 429,
            Self::Api { .. } | Self::JsonParse(_) | Self::InvalidUrl { .. } => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, FetchError>;
