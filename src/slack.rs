//! Supports posting a Block Kit message to any Slack channel.
//!
//! Only `chat.postMessage` is wrapped; the bot must already be a member of the
//! destination channel.

pub mod api;
pub mod auth;
pub mod block;
pub mod channel;
pub mod error;
pub mod message;

pub use auth::SlackAccessToken;
pub use error::SlackError;
