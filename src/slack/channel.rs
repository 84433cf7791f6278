//! Slack channel identifiers.

use serde::Serialize;
use std::fmt;

/// The destination of a message. Slack's API prefers the underlying channel
/// ID (`C0123456789`), which can be found in the UI by copying a link to the
/// channel, but will also accept a channel name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    /// Treat an unset or blank value as no channel at all.
    pub fn from_env_value(raw: Option<String>) -> Option<Self> {
        raw.map(|x| x.trim().to_owned())
            .filter(|x| !x.is_empty())
            .map(ChannelId)
    }
}

/// Format without the surrounding newtype wrapper.
impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let x = ChannelId("C024BE91L".into());
        assert_eq!(format!("{}", x), "C024BE91L");
    }

    #[test]
    fn test_from_env_value() {
        assert_eq!(ChannelId::from_env_value(Some(String::new())), None);
        assert_eq!(
            ChannelId::from_env_value(Some(" C024BE91L ".into())),
            Some(ChannelId("C024BE91L".into()))
        );
    }
}
