use thiserror::Error;

/// Fatal configuration problems detected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TOKEN_SECRET must be set to a non-empty value")]
    MissingSecret,

    #[error("Invalid rate limit settings: {0}")]
    InvalidRateLimit(String),
}
