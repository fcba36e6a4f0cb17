//! Slack relay configuration.
//!
//! Every Slack setting is optional so the credential service can run without
//! the relay. Handlers that need a missing value fail at request time with a
//! generic error instead of aborting startup.
//!
//! # Environment Variables
//!
//! - `SLACK_WEBHOOK_URL`: Incoming webhook used to post alerts
//! - `SLACK_BOT_TOKEN`: Bot token for the Web API (message history, user lookup)
//! - `SLACK_CHANNEL_ID`: Channel whose recent messages are listed
//! - `SLACK_API_BASE_URL`: Web API base URL (default: `https://slack.com/api`)
//! - `SLACK_TIMEOUT_SECS`: Outbound HTTP timeout (default: 10)

use std::env;
use std::fmt;

pub const DEFAULT_SLACK_API_BASE_URL: &str = "https://slack.com/api";

/// Number of channel messages fetched for the recent-messages feed.
pub const RECENT_MESSAGE_LIMIT: u32 = 5;

#[derive(Clone, PartialEq, Eq)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
    pub bot_token: Option<String>,
    pub channel_id: Option<String>,
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            bot_token: None,
            channel_id: None,
            api_base_url: DEFAULT_SLACK_API_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl SlackConfig {
    pub fn from_env() -> Self {
        Self {
            webhook_url: non_empty_var("SLACK_WEBHOOK_URL"),
            bot_token: non_empty_var("SLACK_BOT_TOKEN"),
            channel_id: non_empty_var("SLACK_CHANNEL_ID"),
            api_base_url: non_empty_var("SLACK_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SLACK_API_BASE_URL.to_string()),
            timeout_secs: env::var("SLACK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Full URL of a Web API method, e.g. `conversations.history`.
    pub fn api_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base_url, method)
    }
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "<redacted>"))
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("channel_id", &self.channel_id)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
