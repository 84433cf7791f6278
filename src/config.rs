//! Settings read once from the environment at startup.

use crate::slack::{api::API_BASE, channel::ChannelId, SlackAccessToken};
use std::env;

pub const TOKEN_VAR: &str = "SLACK_BOT_TOKEN";
pub const CHANNEL_VAR: &str = "SLACK_CHANNEL";
pub const API_BASE_VAR: &str = "SLACK_API_BASE";

/// Everything needed to send a report. None of it is needed to preview one,
/// so absence is only an error once sending is attempted.
pub struct Config {
    pub token: Option<SlackAccessToken>,
    /// Where reports go unless `--channel` says otherwise.
    pub channel: Option<ChannelId>,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            token: SlackAccessToken::from_env_value(env::var(TOKEN_VAR).ok()),
            channel: ChannelId::from_env_value(env::var(CHANNEL_VAR).ok()),
            api_base: env::var(API_BASE_VAR).unwrap_or_else(|_| API_BASE.to_owned()),
        }
    }
}
