//! Helpers around Slack's use of OAuth Bearer Authentication.

use std::fmt;

/// A newtype wrapper around Slack bot tokens (`xoxb-…`).
#[derive(Clone, PartialEq, Eq)]
pub struct SlackAccessToken(pub String);

/// Never print the secret itself.
impl fmt::Debug for SlackAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlackAccessToken(<redacted>)")
    }
}

impl SlackAccessToken {
    /// Treat an unset or blank value as no token at all.
    pub fn from_env_value(raw: Option<String>) -> Option<Self> {
        raw.map(|x| x.trim().to_owned())
            .filter(|x| !x.is_empty())
            .map(SlackAccessToken)
    }
}

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_auth_header_val() {
        let token = SlackAccessToken("xoxb-foo".into());
        assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = SlackAccessToken("xoxb-secret".into());
        let out = format!("{:?}", Some(token));

        assert_eq!(out, "Some(SlackAccessToken(<redacted>))");
        assert!(!out.contains("xoxb-secret"));
    }

    #[test]
    fn test_from_env_value() {
        assert!(SlackAccessToken::from_env_value(None).is_none());
        assert!(SlackAccessToken::from_env_value(Some(String::new())).is_none());
        assert!(SlackAccessToken::from_env_value(Some("  ".into())).is_none());
        assert_eq!(
            SlackAccessToken::from_env_value(Some("xoxb-1".into())),
            Some(SlackAccessToken("xoxb-1".into()))
        );
    }
}
