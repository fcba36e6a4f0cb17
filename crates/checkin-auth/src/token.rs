//! Session credential issuance and verification.
//!
//! A credential is `<signature>.<payload>` where the payload is the base64
//! (standard alphabet, padded) encoding of
//! `firstName:lastName:role:issuedAtMillis` and the signature is the lowercase
//! hex HMAC-SHA256 of the decoded payload under the shared secret.
//!
//! Verification never tells the caller *why* a credential was rejected at the
//! HTTP boundary. [`TokenError`] carries the reason only so it can be logged
//! at debug level and counted in metrics.

use chrono::Utc;
use data_encoding::BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use checkin_config::TokenConfig;

use crate::claims::{IdentityClaims, Role};

type HmacSha256 = Hmac<Sha256>;

/// Credentials expire 30 minutes after issuance.
pub const TOKEN_TTL_MILLIS: i64 = 30 * 60 * 1000;

const SIGNATURE_HEX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("credential is malformed: {0}")]
    Malformed(&'static str),

    #[error("credential payload is not valid base64 text")]
    Encoding,

    #[error("credential signature does not match")]
    BadSignature,

    #[error("credential has expired")]
    Expired,
}

impl TokenError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed(_) => "malformed",
            TokenError::Encoding => "encoding",
            TokenError::BadSignature => "signature",
            TokenError::Expired => "expired",
        }
    }
}

/// Issues a credential stamped with the current wall-clock time.
pub fn issue_token(claims: &IdentityClaims, config: &TokenConfig) -> String {
    issue_token_at(claims, config, Utc::now().timestamp_millis())
}

/// Issues a credential stamped with `issued_at_millis`.
///
/// Names are embedded verbatim. Callers must reject names containing `:`
/// beforehand, otherwise the credential will never verify.
pub fn issue_token_at(claims: &IdentityClaims, config: &TokenConfig, issued_at_millis: i64) -> String {
    let payload = format!(
        "{}:{}:{}:{}",
        claims.first_name, claims.last_name, claims.role, issued_at_millis
    );
    let signature = hex::encode(sign(payload.as_bytes(), config).finalize().into_bytes());

    format!("{}.{}", signature, BASE64.encode(payload.as_bytes()))
}

/// Verifies a credential against the current wall-clock time.
pub fn verify_token(token: &str, config: &TokenConfig) -> Result<IdentityClaims, TokenError> {
    verify_token_at(token, config, Utc::now().timestamp_millis())
}

/// Verifies a credential as if the current time were `now_millis`.
///
/// Succeeds when the signature is the exact HMAC of the payload and no more
/// than [`TOKEN_TTL_MILLIS`] have passed since issuance.
pub fn verify_token_at(
    token: &str,
    config: &TokenConfig,
    now_millis: i64,
) -> Result<IdentityClaims, TokenError> {
    let (signature, encoded_payload) = token
        .split_once('.')
        .ok_or(TokenError::Malformed("missing separator"))?;

    let payload_bytes = BASE64
        .decode(encoded_payload.as_bytes())
        .map_err(|_| TokenError::Encoding)?;
    let payload = String::from_utf8(payload_bytes).map_err(|_| TokenError::Encoding)?;

    let (claims, issued_at_millis) = parse_payload(&payload)?;

    check_signature(signature, payload.as_bytes(), config)?;

    if now_millis.saturating_sub(issued_at_millis) > TOKEN_TTL_MILLIS {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

fn sign(payload: &[u8], config: &TokenConfig) -> HmacSha256 {
    // HMAC takes keys of any length, so construction cannot fail.
    let mac = HmacSha256::new_from_slice(config.secret()).expect("HMAC accepts any key length");
    mac.chain_update(payload)
}

fn check_signature(signature: &str, payload: &[u8], config: &TokenConfig) -> Result<(), TokenError> {
    // Only the canonical lowercase encoding is accepted.
    let canonical = signature.len() == SIGNATURE_HEX_LEN
        && signature
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !canonical {
        return Err(TokenError::BadSignature);
    }

    let provided = hex::decode(signature).map_err(|_| TokenError::BadSignature)?;
    sign(payload, config)
        .verify_slice(&provided)
        .map_err(|_| TokenError::BadSignature)
}

fn parse_payload(payload: &str) -> Result<(IdentityClaims, i64), TokenError> {
    let fields: Vec<&str> = payload.split(':').collect();
    let &[first_name, last_name, role, issued_at] = fields.as_slice() else {
        return Err(TokenError::Malformed("expected four payload fields"));
    };

    if first_name.is_empty() || last_name.is_empty() {
        return Err(TokenError::Malformed("empty name"));
    }

    let role: Role = role
        .parse()
        .map_err(|_| TokenError::Malformed("unknown role"))?;
    let issued_at_millis: i64 = issued_at
        .parse()
        .map_err(|_| TokenError::Malformed("timestamp is not an integer"))?;

    Ok((
        IdentityClaims::new(first_name, last_name, role),
        issued_at_millis,
    ))
}
