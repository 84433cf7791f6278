//! Send Block Kit messages to a given Slack channel.

use super::{api::*, block::Block, channel::ChannelId, SlackAccessToken, SlackError};
use crate::dispatch::Messenger;
use serde::{Deserialize, Serialize};

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a ChannelId,
    blocks: &'a [Block],
    // Used for notifications in the presence of `blocks`.
    text: &'a str,
    unfurl_links: bool,
    unfurl_media: bool,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
}

impl Messenger for SlackClient {
    /// Post a message in a channel the bot has already been invited to. Link
    /// previews are suppressed; the report carries no links worth unfurling.
    async fn post_message(
        &self,
        token: &SlackAccessToken,
        channel: &ChannelId,
        blocks: &[Block],
        text: &str,
    ) -> Result<(), SlackError> {
        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage", token)
            .json(&MessageRequest {
                channel,
                blocks,
                text,
                unfurl_links: false,
                unfurl_media: false,
            })
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(_) => Ok(()),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}
