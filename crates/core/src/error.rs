//! Error types for the twinvoice domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant. The context compiler
//! itself has no error type: every resolution rule defines a default.

use thiserror::Error;

/// The top-level error type for all twinvoice operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Storage errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Required user input ---
    #[error("Missing input: {0}")]
    MissingInput(String),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned no content")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed for {key}: {reason}")]
    Io { key: String, reason: String },

    #[error("Failed to serialize value for {key}: {reason}")]
    Serialization { key: String, reason: String },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn store_error_names_key() {
        let err = Error::Store(StoreError::Io {
            key: "corrections_v1".into(),
            reason: "disk full".into(),
        });
        assert!(err.to_string().contains("corrections_v1"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn missing_input_mentions_field() {
        let err = Error::MissingInput("question".into());
        assert_eq!(err.to_string(), "Missing input: question");
    }
}
