use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use checkin_auth::{IdentityClaims, Role};

use crate::modules::alerts::model::{SendAlertRequest, SlackMessage};
use crate::modules::auth::model::{
    ErrorResponse, IssueTokenRequest, IssueTokenResponse, MessageResponse, VerifyTokenRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::auth::controller::verify_token,
        crate::modules::auth::controller::get_session,
        crate::modules::alerts::controller::send_alert,
        crate::modules::alerts::controller::get_recent_messages,
    ),
    components(
        schemas(
            IssueTokenRequest,
            IssueTokenResponse,
            VerifyTokenRequest,
            IdentityClaims,
            Role,
            MessageResponse,
            ErrorResponse,
            SendAlertRequest,
            SlackMessage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Session credential issuance and verification"),
        (name = "Alerts", description = "Slack alert relay for event staff")
    ),
    info(
        title = "Checkin API",
        version = "0.1.0",
        description = "Stateless session credentials and a Slack alert relay for volunteer check-in.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("HMAC-SHA256")
                        .build(),
                ),
            )
        }
    }
}
