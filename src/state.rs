use checkin_config::{CorsConfig, RateLimitConfig, SlackConfig, TokenConfig};
use reqwest::Client;

use crate::modules::alerts::service::SlackService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub token_config: TokenConfig,
    pub slack_config: SlackConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub http_client: Client,
}

impl AppState {
    pub fn new(
        token_config: TokenConfig,
        slack_config: SlackConfig,
        cors_config: CorsConfig,
        rate_limit_config: RateLimitConfig,
    ) -> anyhow::Result<Self> {
        let http_client = SlackService::build_client(&slack_config)?;

        Ok(Self {
            token_config,
            slack_config,
            cors_config,
            rate_limit_config,
            http_client,
        })
    }
}

/// Loads every config from the environment. A missing `TOKEN_SECRET` is
/// fatal and surfaces here.
pub fn init_app_state() -> anyhow::Result<AppState> {
    AppState::new(
        TokenConfig::from_env()?,
        SlackConfig::from_env(),
        CorsConfig::from_env(),
        RateLimitConfig::from_env(),
    )
}
