use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendAlertRequest {
    #[validate(length(min = 1, message = "Missing alert message"))]
    #[schema(example = "Parking lot B is full, redirect arrivals to lot C")]
    pub text: String,
}

/// A recent channel message with the author's display name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlackMessage {
    pub text: String,
    pub user: String,
    pub ts: String,
}

// Slack Web API payloads. Only the fields the relay reads are modelled.

#[derive(Debug, Serialize)]
pub(crate) struct WebhookPayload<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub ts: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserInfoResponse {
    pub ok: bool,
    #[serde(default)]
    pub user: Option<SlackUser>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SlackUser {
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub profile: Option<SlackProfile>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SlackProfile {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SlackUser {
    /// Profile display name, then real name, then a placeholder.
    pub fn preferred_name(&self) -> String {
        let display_name = self
            .profile
            .as_ref()
            .and_then(|p| p.display_name.as_deref());

        [display_name, self.real_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or("Unnamed User")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_name_order() {
        let user: SlackUser = serde_json::from_str(
            r#"{"real_name":"Dana Reyes","profile":{"display_name":"dana"}}"#,
        )
        .unwrap();
        assert_eq!(user.preferred_name(), "dana");

        let user: SlackUser = serde_json::from_str(
            r#"{"real_name":"Dana Reyes","profile":{"display_name":""}}"#,
        )
        .unwrap();
        assert_eq!(user.preferred_name(), "Dana Reyes");

        let user: SlackUser = serde_json::from_str(r#"{"profile":{}}"#).unwrap();
        assert_eq!(user.preferred_name(), "Unnamed User");
    }

    #[test]
    fn test_history_tolerates_missing_fields() {
        let history: HistoryResponse =
            serde_json::from_str(r#"{"ok":true,"messages":[{"bot_id":"B1"}]}"#).unwrap();
        assert!(history.ok);
        assert_eq!(history.messages.len(), 1);
        assert_eq!(history.messages[0].text, "");
        assert_eq!(history.messages[0].bot_id.as_deref(), Some("B1"));
    }
}
