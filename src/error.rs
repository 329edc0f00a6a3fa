//! Error types for termstore-search
//!
//! This module defines the error hierarchy for the crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for termstore-search
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Decoding Errors
    // ============================================================================
    /// A hit could not be decoded into the target type
    #[error("Failed to decode hit: {message}")]
    Decode {
        /// What went wrong
        message: String,
    },

    /// A projected field a sparse decoder requires was absent
    #[error("Hit '{hit_id}' is missing required field '{field}'")]
    MissingField {
        /// Engine identity of the offending hit
        hit_id: String,
        /// Stored field name that was expected
        field: String,
    },

    /// Standard decoding needed a full stored document that was absent
    #[error("Hit '{hit_id}' has no source document")]
    MissingSource {
        /// Engine identity of the offending hit
        hit_id: String,
    },

    /// JSON deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Response Errors
    // ============================================================================
    /// The engine response did not match the expected wire shape
    #[error("Malformed search response: {message}")]
    MalformedResponse {
        /// What was malformed
        message: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all error with a plain message
    #[error("{0}")]
    Other(String),

    /// Error propagated from an embedder-supplied component
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a missing-field error
    pub fn missing_field(hit_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            hit_id: hit_id.into(),
            field: field.into(),
        }
    }

    /// Create a missing-source error
    pub fn missing_source(hit_id: impl Into<String>) -> Self {
        Self::MissingSource {
            hit_id: hit_id.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Result type alias for termstore-search
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::decode("bad value");
        assert_eq!(err.to_string(), "Failed to decode hit: bad value");

        let err = Error::missing_field("100001", "conceptId");
        assert_eq!(
            err.to_string(),
            "Hit '100001' is missing required field 'conceptId'"
        );

        let err = Error::missing_source("42");
        assert_eq!(err.to_string(), "Hit '42' has no source document");
    }

    #[test]
    fn test_json_parse_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::JsonParse(_)));
    }
}
