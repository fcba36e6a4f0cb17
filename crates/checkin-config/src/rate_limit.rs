//! Rate limiting configuration for the credential endpoints.
//!
//! The issue and verify endpoints are unauthenticated by nature, so they are
//! the ones worth throttling. Limits are keyed by client IP using
//! `SmartIpKeyExtractor`, which honours `X-Forwarded-For`, `X-Real-Ip` and
//! `Forwarded` before falling back to the peer address.
//!
//! # Environment Variables
//!
//! - `RATE_LIMIT_AUTH_REPLENISH_SECS`: Seconds to replenish one request slot (default: 1)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: Maximum requests in a burst (default: 20)
//!
//! # Rate Limiting Strategy
//!
//! Token bucket: one slot is added every `auth_replenish_secs`, each request
//! consumes one slot, and at most `auth_burst_size` slots accumulate.
//! Requests arriving with an empty bucket get `429 Too Many Requests`.

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

use crate::error::ConfigError;

pub type AuthGovernorConfig =
    GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Seconds after which one request slot is replenished.
    pub auth_replenish_secs: u64,

    /// Maximum number of slots that can accumulate.
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            auth_replenish_secs: 1,
            auth_burst_size: 20,
        }
    }
}

impl RateLimitConfig {
    /// Loads limits from the environment, falling back to defaults for
    /// missing or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_replenish_secs: std::env::var("RATE_LIMIT_AUTH_REPLENISH_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_replenish_secs),
            auth_burst_size: std::env::var("RATE_LIMIT_AUTH_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_burst_size),
        }
    }

    /// Builds the governor config applied to the credential routes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRateLimit`] when either value is zero,
    /// which governor cannot represent as a quota.
    pub fn auth_governor_config(&self) -> Result<AuthGovernorConfig, ConfigError> {
        GovernorConfigBuilder::default()
            .per_second(self.auth_replenish_secs)
            .burst_size(self.auth_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| {
                ConfigError::InvalidRateLimit(format!(
                    "replenish={}s burst={}",
                    self.auth_replenish_secs, self.auth_burst_size
                ))
            })
    }
}
