use std::collections::{HashMap, HashSet};
use std::time::Duration;

use checkin_config::SlackConfig;
use checkin_config::slack::RECENT_MESSAGE_LIMIT;
use futures::future::join_all;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::model::{
    HistoryMessage, HistoryResponse, SlackMessage, UserInfoResponse, WebhookPayload,
};

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Slack relay is not configured: {0} is missing")]
    NotConfigured(&'static str),

    #[error("Slack request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Slack responded with status {0}")]
    Status(u16),

    #[error("Slack API error: {0}")]
    Api(String),
}

pub fn format_alert(text: &str) -> String {
    format!("📢 *New Alert:*\n{}", text)
}

/// Picks the author name for a message: the resolved Slack user, then the
/// message's own `username`, then a bot label, then "Unknown".
pub(crate) fn resolve_author(message: &HistoryMessage, names: &HashMap<String, String>) -> String {
    if let Some(name) = message.user.as_ref().and_then(|id| names.get(id)) {
        return name.clone();
    }
    if let Some(username) = message.username.as_ref().filter(|u| !u.is_empty()) {
        return username.clone();
    }
    if message.bot_id.is_some() {
        return "Slack Bot".to_string();
    }
    "Unknown".to_string()
}

/// Client for the Slack incoming webhook and Web API.
pub struct SlackService {
    client: Client,
    config: SlackConfig,
}

impl SlackService {
    pub fn new(client: Client, config: SlackConfig) -> Self {
        Self { client, config }
    }

    /// Builds the shared HTTP client used for every Slack call.
    pub fn build_client(config: &SlackConfig) -> Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
    }

    /// Posts an alert to the incoming webhook. Fire-and-forget from Slack's
    /// point of view: nothing is retried.
    #[instrument(skip_all)]
    pub async fn send_alert(&self, text: &str) -> Result<(), SlackError> {
        let webhook_url = self
            .config
            .webhook_url
            .as_deref()
            .ok_or(SlackError::NotConfigured("SLACK_WEBHOOK_URL"))?;

        let message = format_alert(text);
        let response = self
            .client
            .post(webhook_url)
            .json(&WebhookPayload { text: &message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "Slack webhook response");

        if !status.is_success() {
            return Err(SlackError::Status(status.as_u16()));
        }

        info!("Alert delivered to Slack");
        Ok(())
    }

    /// Fetches the latest channel messages and resolves their authors.
    #[instrument(skip_all)]
    pub async fn recent_messages(&self) -> Result<Vec<SlackMessage>, SlackError> {
        let bot_token = self
            .config
            .bot_token
            .as_deref()
            .ok_or(SlackError::NotConfigured("SLACK_BOT_TOKEN"))?;
        let channel_id = self
            .config
            .channel_id
            .as_deref()
            .ok_or(SlackError::NotConfigured("SLACK_CHANNEL_ID"))?;

        let limit = RECENT_MESSAGE_LIMIT.to_string();
        let response = self
            .client
            .post(self.config.api_url("conversations.history"))
            .bearer_auth(bot_token)
            .form(&[("channel", channel_id), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SlackError::Status(response.status().as_u16()));
        }

        let history: HistoryResponse = response.json().await?;
        if !history.ok {
            return Err(SlackError::Api(
                history.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        let user_ids: HashSet<&str> = history
            .messages
            .iter()
            .filter_map(|m| m.user.as_deref())
            .filter(|id| !id.is_empty())
            .collect();
        let names = self.lookup_user_names(bot_token, user_ids).await;

        Ok(history
            .messages
            .iter()
            .map(|message| SlackMessage {
                text: message.text.clone(),
                user: resolve_author(message, &names),
                ts: message.ts.clone(),
            })
            .collect())
    }

    /// Resolves user ids concurrently. Failed lookups are logged and left out.
    async fn lookup_user_names(
        &self,
        bot_token: &str,
        user_ids: HashSet<&str>,
    ) -> HashMap<String, String> {
        let lookups = user_ids.into_iter().map(|user_id| async move {
            match self.lookup_user_name(bot_token, user_id).await {
                Ok(name) => name.map(|name| (user_id.to_string(), name)),
                Err(err) => {
                    warn!(user_id = %user_id, error = %err, "Failed to fetch Slack user");
                    None
                }
            }
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }

    async fn lookup_user_name(
        &self,
        bot_token: &str,
        user_id: &str,
    ) -> Result<Option<String>, SlackError> {
        let info: UserInfoResponse = self
            .client
            .get(self.config.api_url("users.info"))
            .bearer_auth(bot_token)
            .query(&[("user", user_id)])
            .send()
            .await?
            .json()
            .await?;

        if !info.ok {
            return Ok(None);
        }
        Ok(info.user.map(|user| user.preferred_name()))
    }
}
