//! Error types for the translation pipeline

use thiserror::Error;

/// Result type used throughout the core crate
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Everything that can go wrong between file selection and a rendered
/// result. Display strings are the user-facing messages; the controller
/// surfaces them verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// Declared media type outside the allow-list
    #[error("Invalid audio format. Please upload a WAV, MP3, or OGG file.")]
    InvalidFormat,

    /// File exceeds the upload size limit
    #[error("Audio file is too large. Maximum size is 10MB.")]
    OversizedFile,

    /// The file could not be read back after selection
    #[error("Failed to read audio file: {0}")]
    EncodingFailure(String),

    /// A readable file still produced no encoded content
    #[error("Failed to convert audio file to base64")]
    EmptyEncoding,

    /// Endpoint base URL was never configured; fatal for the session
    #[error("API URL is not set")]
    ConfigurationMissing,

    /// Language code outside the supported tables
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// Non-success response from the translation service, with its own
    /// message when it supplied one
    #[error("{0}")]
    RequestFailed(String),

    /// Network-level failure or a malformed response body
    #[error("Translation request failed: {0}")]
    TransportFailure(String),
}
