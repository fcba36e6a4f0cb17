//! # Check-in Config
//!
//! Configuration types for the check-in API, loaded from environment variables:
//!
//! - [`token`]: Shared secret used to sign and verify session credentials
//! - [`slack`]: Slack webhook and Web API settings for the alert relay
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: Rate limiting for the credential endpoints
//!
//! # Example
//!
//! ```ignore
//! use checkin_config::{CorsConfig, RateLimitConfig, SlackConfig, TokenConfig};
//!
//! let token_config = TokenConfig::from_env()?;
//! let slack_config = SlackConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rate_limit_config = RateLimitConfig::from_env();
//! ```

pub mod cors;
pub mod error;
pub mod rate_limit;
pub mod slack;
pub mod token;

pub use cors::CorsConfig;
pub use error::ConfigError;
pub use rate_limit::RateLimitConfig;
pub use slack::SlackConfig;
pub use token::TokenConfig;
