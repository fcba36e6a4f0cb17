use axum::Json;
use axum::extract::State;
use checkin_core::AppError;
use tracing::{error, info, instrument};

use super::model::{SendAlertRequest, SlackMessage};
use super::service::{SlackError, SlackService};
use crate::metrics::track_alert_sent;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Relay an alert to the operations Slack channel
#[utoipa::path(
    post,
    path = "/api/alerts",
    request_body = SendAlertRequest,
    responses(
        (status = 200, description = "Alert sent", body = MessageResponse),
        (status = 400, description = "Missing alert message", body = crate::modules::auth::model::ErrorResponse),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Role may not send alerts"),
        (status = 500, description = "Slack could not be reached", body = crate::modules::auth::model::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alerts"
)]
#[instrument(skip_all, fields(sender_role = %auth_user.role()))]
pub async fn send_alert(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SendAlertRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let slack = SlackService::new(state.http_client.clone(), state.slack_config.clone());

    match slack.send_alert(&dto.text).await {
        Ok(()) => {
            track_alert_sent(true);
            info!(sender = %auth_user.display_name(), "Alert relayed");
            Ok(Json(MessageResponse {
                message: "Alert sent to Slack.".to_string(),
            }))
        }
        Err(err) => {
            track_alert_sent(false);
            error!(error = %err, "Slack post failed");
            Err(AppError::internal_error("Error sending alert to Slack."))
        }
    }
}

/// List the most recent messages in the operations Slack channel
#[utoipa::path(
    get,
    path = "/api/alerts/messages",
    responses(
        (status = 200, description = "Recent messages, newest first", body = [SlackMessage]),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Role may not read alerts"),
        (status = 500, description = "Slack could not be reached", body = crate::modules::auth::model::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Alerts"
)]
#[instrument(skip_all)]
pub async fn get_recent_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<SlackMessage>>, AppError> {
    let slack = SlackService::new(state.http_client.clone(), state.slack_config.clone());

    slack.recent_messages().await.map(Json).map_err(|err| {
        error!(error = %err, "Slack fetch failed");
        match err {
            SlackError::Api(_) => AppError::internal_error(err.to_string()),
            _ => AppError::internal_error("Error fetching Slack messages."),
        }
    })
}
