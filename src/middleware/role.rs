//! Role-based authorization middleware.
//!
//! Credentials carry the role resolved at login, so gating never needs a
//! lookup: verify the bearer credential, compare its role with the allowed
//! set, then hand the claims to the handler through the request extensions.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use checkin_auth::Role;
use checkin_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Roles that run the event: may send alerts and read the alert feed.
pub const STAFF_ROLES: [Role; 2] = [Role::Admin, Role::TeamLead];

/// Verifies the bearer credential and checks its role against `allowed_roles`.
///
/// Missing or invalid credentials produce 401; a valid credential with a
/// role outside the set produces 403.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[Role],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, allowed_roles)?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Gate for admin and team lead routes.
///
/// ```rust,ignore
/// let alerts = init_alerts_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_staff));
/// ```
pub async fn require_staff(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &STAFF_ROLES).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Checks a single role in controller logic.
pub fn check_role(auth_user: &AuthUser, required_role: Role) -> Result<(), AppError> {
    check_any_role(auth_user, &[required_role])
}

pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[Role]) -> Result<(), AppError> {
    if !auth_user.has_any_role(allowed_roles) {
        tracing::warn!(role = %auth_user.role(), "Role not permitted for route");
        crate::metrics::track_authorization_check(false, auth_user.role());
        return Err(AppError::forbidden(format!(
            "Access denied. Role '{}' may not access this resource",
            auth_user.role()
        )));
    }

    crate::metrics::track_authorization_check(true, auth_user.role());
    Ok(())
}
