use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use checkin_auth::{IdentityClaims, Role};
use checkin_core::AppError;

use crate::modules::auth::service::{AuthService, INVALID_TOKEN_MESSAGE};
use crate::state::AppState;

/// Extractor that verifies the `Authorization: Bearer <credential>` header
/// and yields the credential's claims.
///
/// When a role-gating middleware has already verified the credential, the
/// claims it stored in the request extensions are reused.
#[derive(Debug, Clone)]
pub struct AuthUser(pub IdentityClaims);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.0.role == role
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.0.role)
    }

    pub fn display_name(&self) -> String {
        self.0.full_name()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::unauthorized(INVALID_TOKEN_MESSAGE))?;

        let claims = AuthService::verify_credential(bearer.token(), &state.token_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthUser {
        AuthUser(IdentityClaims::new("Ann", "Lee", role))
    }

    #[test]
    fn test_has_role() {
        assert!(user(Role::Admin).has_role(Role::Admin));
        assert!(!user(Role::Volunteer).has_role(Role::Admin));
    }

    #[test]
    fn test_has_any_role() {
        let staff = [Role::Admin, Role::TeamLead];
        assert!(user(Role::TeamLead).has_any_role(&staff));
        assert!(!user(Role::Volunteer).has_any_role(&staff));
        assert!(!user(Role::Admin).has_any_role(&[]));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(user(Role::Admin).display_name(), "Ann Lee");
    }
}
