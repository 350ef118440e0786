//! Error types for media-census
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Transport and decode failures are explicit variants; whether they abort a
//! pagination run or are logged and skipped is decided by the configured
//! failure policy, not here.

use thiserror::Error;

/// The main error type for media-census
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode page: {message}")]
    Decode { message: String },

    /// The legacy data source guarantees `flags.hd` on every item; an item
    /// without it cannot be classified and the lookup is a hard error.
    #[error("Media item '{id}' has no hd flag")]
    MissingHdFlag { id: String },

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("Media listing is only available in cached mode")]
    CacheDisabled,

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a missing-hd-flag error for an item
    pub fn missing_hd_flag(id: impl Into<String>) -> Self {
        Self::MissingHdFlag { id: id.into() }
    }

    /// Check if this error came from the page fetch/decode path.
    ///
    /// These are the failures the skip-and-continue policy is allowed to
    /// swallow; anything else always propagates.
    pub fn is_page_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::JsonParse(_) | Error::Decode { .. }
        )
    }
}

/// Result type alias for media-census
pub type Result<T> = std::result::Result<T, Error>;
