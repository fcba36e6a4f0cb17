use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use checkin_auth::IdentityClaims;
use checkin_core::AppError;
use tracing::instrument;

use super::model::{IssueTokenRequest, IssueTokenResponse};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue a session credential
#[utoipa::path(
    post,
    path = "/api/auth/token",
    request_body = IssueTokenRequest,
    responses(
        (status = 200, description = "Credential issued", body = IssueTokenResponse),
        (status = 400, description = "Missing or invalid identity fields", body = super::model::ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IssueTokenRequest>,
) -> Result<Json<IssueTokenResponse>, AppError> {
    let response = AuthService::issue_token(dto, &state.token_config)?;
    Ok(Json(response))
}

/// Verify a session credential and return its claims
#[utoipa::path(
    post,
    path = "/api/auth/verify",
    request_body = super::model::VerifyTokenRequest,
    responses(
        (status = 200, description = "Credential is valid", body = IdentityClaims),
        (status = 401, description = "Invalid or expired token", body = super::model::ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn verify_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdentityClaims>, AppError> {
    let claims = AuthService::verify_token(&body, &state.token_config)?;
    Ok(Json(claims))
}

/// Return the claims of the bearer credential
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session", body = IdentityClaims),
        (status = 401, description = "Invalid or expired token", body = super::model::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn get_session(AuthUser(claims): AuthUser) -> Json<IdentityClaims> {
    Json(claims)
}
