//! Error types for invitation content extraction.

use thiserror::Error;

/// Errors that can occur while turning an ICS event into display content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("ICS parse error: {0}")]
    Parse(String),

    #[error("No VEVENT component found")]
    MissingEvent,

    #[error("Missing required property: {0}")]
    MissingProperty(&'static str),

    #[error("Invalid {property} value: '{value}'")]
    InvalidValue {
        property: &'static str,
        value: String,
    },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for content extraction.
pub type ContentResult<T> = Result<T, ContentError>;
