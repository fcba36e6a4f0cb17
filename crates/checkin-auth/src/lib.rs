//! # Check-in Auth
//!
//! Session credentials for the volunteer check-in API.
//!
//! - [`claims`]: Identity claims and the closed set of roles
//! - [`token`]: Credential issuance and verification
//!
//! # Credential Format
//!
//! ```text
//! <hex hmac-sha256 of payload>.<base64(firstName:lastName:role:issuedAtMillis)>
//! ```
//!
//! Credentials are valid for 30 minutes after `issuedAtMillis`.
//!
//! # Example
//!
//! ```ignore
//! use checkin_auth::{IdentityClaims, Role, issue_token, verify_token};
//! use checkin_config::TokenConfig;
//!
//! let config = TokenConfig::from_env()?;
//! let claims = IdentityClaims::new("Ann", "Lee", Role::Admin);
//!
//! let token = issue_token(&claims, &config);
//! assert_eq!(verify_token(&token, &config)?, claims);
//! ```

pub mod claims;
pub mod token;

pub use claims::{IdentityClaims, Role, UnknownRole};
pub use token::{
    TOKEN_TTL_MILLIS, TokenError, issue_token, issue_token_at, verify_token, verify_token_at,
};
