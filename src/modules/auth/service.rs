use checkin_auth::{IdentityClaims, Role, issue_token, verify_token};
use checkin_config::TokenConfig;
use checkin_core::AppError;
use tracing::{debug, info, instrument};

use super::model::{IssueTokenRequest, IssueTokenResponse, VerifyTokenRequest};
use crate::metrics::{track_token_issued, track_token_verification};

/// Message returned for every rejected credential, whatever the reason.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(role = %dto.role))]
    pub fn issue_token(
        dto: IssueTokenRequest,
        token_config: &TokenConfig,
    ) -> Result<IssueTokenResponse, AppError> {
        // Already validated by the extractor; parse again to get the typed role.
        let role: Role = dto.role.parse().map_err(AppError::bad_request)?;
        let claims = IdentityClaims::new(dto.first_name, dto.last_name, role);

        let token = issue_token(&claims, token_config);

        track_token_issued(role);
        info!(role = %role, "Issued session credential");

        Ok(IssueTokenResponse { token })
    }

    /// Checks a credential and returns its claims, or a single unauthorized
    /// error for every kind of failure.
    pub fn verify_credential(
        token: &str,
        token_config: &TokenConfig,
    ) -> Result<IdentityClaims, AppError> {
        let result = verify_token(token, token_config);
        track_token_verification(result.as_ref().err());

        result.map_err(|err| {
            debug!(reason = err.reason(), "Rejected session credential");
            AppError::unauthorized(INVALID_TOKEN_MESSAGE)
        })
    }

    #[instrument(skip_all)]
    pub fn verify_token(
        body: &[u8],
        token_config: &TokenConfig,
    ) -> Result<IdentityClaims, AppError> {
        let request: VerifyTokenRequest = serde_json::from_slice(body).unwrap_or_default();

        match request.token {
            Some(token) => Self::verify_credential(&token, token_config),
            None => {
                debug!("Verify request carried no token");
                Err(AppError::unauthorized(INVALID_TOKEN_MESSAGE))
            }
        }
    }
}
