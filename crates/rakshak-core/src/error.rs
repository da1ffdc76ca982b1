use thiserror::Error;

/// Top-level error type for Rakshak.
#[derive(Debug, Error)]
pub enum RakshakError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Error from an external service (Gemini, Safe Browsing, Translate).
    #[error("service error: {0}")]
    Service(String),

    /// Error from the rulebook or keyword engine.
    #[error("detect error: {0}")]
    Detect(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
