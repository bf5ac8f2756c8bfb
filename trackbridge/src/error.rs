//! Error types for trackbridge

use std::io;
use thiserror::Error;

/// Result type alias for trackbridge operations
pub type Result<T> = std::result::Result<T, TrackbridgeError>;

/// Errors that can occur while talking to the remote tracker or serving
/// tool calls
#[derive(Debug, Error)]
pub enum TrackbridgeError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport failed before a response could be interpreted
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote tracker rejected the request
    #[error("Tracker API error: {0}")]
    Api(String),

    /// A referenced entity does not exist on the remote tracker
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "issue" or "team"
        entity: &'static str,
        /// Identifier that failed to resolve
        id: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl TrackbridgeError {
    /// Construct a not-found error for the given entity kind and id
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = TrackbridgeError::not_found("issue", "abc-123");
        assert_eq!(err.to_string(), "issue not found: abc-123");
    }

    #[test]
    fn test_config_display() {
        let err = TrackbridgeError::Config("TRACKBRIDGE_API_KEY not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: TRACKBRIDGE_API_KEY not set"
        );
    }

    #[test]
    fn test_api_display() {
        let err = TrackbridgeError::Api("rate limited".to_string());
        assert_eq!(err.to_string(), "Tracker API error: rate limited");
    }
}
