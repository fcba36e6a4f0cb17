//! Middleware and extractors for request authentication and authorization.
//!
//! - [`auth`]: `AuthUser` extractor verifying `Authorization: Bearer <credential>`
//! - [`role`]: Role gating for admin / team lead routes
//!
//! # Authentication Flow
//!
//! 1. Client sends the credential it received from `POST /api/auth/token`
//!    in the `Authorization: Bearer` header
//! 2. `AuthUser` verifies signature and expiry and extracts the claims
//! 3. Role middleware compares the claimed role with the route's allowed set
//! 4. Handler executes if all checks pass
//!
//! Every verification failure is reported as the same 401, whether the
//! credential was malformed, forged or expired.

pub mod auth;
pub mod role;
