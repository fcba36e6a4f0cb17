//! # Checkin API
//!
//! Backend for a volunteer check-in front end. It has no database and no
//! sessions table: identity is resolved by the front end at login and bound
//! into a signed, time-limited credential that every later request presents.
//!
//! ## Overview
//!
//! - **Session credentials**: HMAC-SHA256 signed tokens carrying first name,
//!   last name, role and issue time, valid for 30 minutes
//! - **Role gating**: admin and team lead routes are gated on the claimed role
//! - **Slack alert relay**: staff post alerts to an incoming webhook and read
//!   the latest channel messages with author names resolved
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── checkin-core/     # AppError and its HTTP rendering
//! ├── checkin-config/   # Token, Slack, CORS and rate limit settings
//! └── checkin-auth/     # Claims, roles, credential issuance and verification
//! src/
//! ├── bin/cli.rs        # Offline credential tooling
//! ├── middleware/       # AuthUser extractor and role gating
//! └── modules/
//!     ├── auth/         # /api/auth: token, verify, session
//!     └── alerts/       # /api/alerts: send, recent messages
//! ```
//!
//! Each feature module follows the same layout: `model.rs` for DTOs,
//! `service.rs` for logic, `controller.rs` for handlers and `router.rs`.
//!
//! ## Credential Format
//!
//! ```text
//! <hex HMAC-SHA256(payload)>.<base64(firstName:lastName:role:issuedAtMillis)>
//! ```
//!
//! Any failure (bad shape, bad signature, expired) is reported to clients as
//! the same `401 Invalid or expired token`.
//!
//! ## Quick Start
//!
//! ```bash
//! TOKEN_SECRET=$(cargo run --bin checkin-cli -- generate-secret)
//! SLACK_WEBHOOK_URL=https://hooks.slack.com/services/...
//! SLACK_BOT_TOKEN=xoxb-...
//! SLACK_CHANNEL_ID=C0123456
//! ```
//!
//! API documentation is served at `/scalar` and `/api-docs/openapi.json`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use checkin_auth;
pub use checkin_config;
pub use checkin_core;
