//! Either show a report on the console or post it to Slack.

use crate::config::{Config, CHANNEL_VAR, TOKEN_VAR};
use crate::error::Failure;
use crate::slack::{block::Block, channel::ChannelId, SlackAccessToken, SlackError};
use colored::Colorize;
use serde_json::json;

const FRAME_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

/// What to do with a built report.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Render locally; nothing leaves the machine. With `json`, render the
    /// raw Block Kit payload instead of the console layout.
    Preview { json: bool },
    /// Post to Slack, optionally overriding the configured channel.
    Send { channel: Option<ChannelId> },
}

/// What a successful dispatch did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The rendered preview, ready to print.
    Previewed(String),
    Sent(ChannelId),
}

/// The one capability the dispatcher needs from a messaging platform.
#[allow(async_fn_in_trait)]
pub trait Messenger {
    async fn post_message(
        &self,
        token: &SlackAccessToken,
        channel: &ChannelId,
        blocks: &[Block],
        text: &str,
    ) -> Result<(), SlackError>;
}

/// Preview or send `blocks`. `text` is the notification fallback.
///
/// Sending requires both a token and a channel; without either, nothing is
/// sent. There's exactly one attempt.
pub async fn dispatch<M: Messenger>(
    blocks: &[Block],
    text: &str,
    mode: Mode,
    config: &Config,
    messenger: &M,
) -> Result<Outcome, Failure> {
    match mode {
        Mode::Preview { json: false } => Ok(Outcome::Previewed(render_preview(blocks))),
        Mode::Preview { json: true } => Ok(Outcome::Previewed(render_json(blocks, text))),
        Mode::Send { channel } => {
            let token = config
                .token
                .as_ref()
                .ok_or(Failure::MissingConfiguration(TOKEN_VAR))?;

            let channel = channel
                .filter(|c| !c.0.trim().is_empty())
                .or_else(|| config.channel.clone())
                .ok_or(Failure::MissingConfiguration(CHANNEL_VAR))?;

            messenger
                .post_message(token, &channel, blocks, text)
                .await?;

            Ok(Outcome::Sent(channel))
        }
    }
}

/// Line-oriented console rendering of a report.
pub fn render_preview(blocks: &[Block]) -> String {
    let frame = "=".repeat(FRAME_WIDTH);
    let mut lines = vec![
        frame.clone(),
        "[테스트 모드] 마케팅 리포트 미리보기".to_owned(),
        frame.clone(),
    ];

    for block in blocks {
        match block {
            Block::Header(x) => {
                lines.push(String::new());
                lines.push(format!("### {}", x).bold().to_string());
            }
            Block::Context(x) => lines.push(indent(x).dimmed().to_string()),
            Block::Divider => lines.push("-".repeat(RULE_WIDTH)),
            Block::Section(x) => {
                lines.extend(x.text.iter().chain(x.fields.iter()).map(|t| indent(t)));
            }
        }
    }

    lines.push(frame);
    lines.join("\n") + "\n"
}

/// The `chat.postMessage` body minus the channel, e.g. for pasting into
/// Slack's Block Kit Builder.
pub fn render_json(blocks: &[Block], text: &str) -> String {
    format!("{:#}", json!({ "blocks": blocks, "text": text }))
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}
