//! Session credential configuration.
//!
//! The shared secret is the only input to the signing scheme that does not
//! come from the request. It is loaded once at startup and passed explicitly
//! to the issuer and the verifier.
//!
//! # Environment Variables
//!
//! - `TOKEN_SECRET`: HMAC key (required)

use std::env;
use std::fmt;

use crate::error::ConfigError;

#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
}

impl TokenConfig {
    /// Creates a config from an explicit secret. Empty secrets are rejected.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        Ok(Self { secret })
    }

    /// Loads `TOKEN_SECRET` from the environment.
    ///
    /// A missing secret is a fatal configuration error, so callers are
    /// expected to abort startup on `Err`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(env::var("TOKEN_SECRET").unwrap_or_default())
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}
