use std::fmt;

/// Sum type representing every way a call to Slack can fail.
#[derive(Debug)]
pub enum SlackError {
    /// The request never produced a readable response.
    APIRequestFailed(reqwest::Error),
    /// Slack answered with `"ok": false` and the given error code.
    APIResponseError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::APIRequestFailed(e)
    }
}

impl fmt::Display for SlackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlackError::APIRequestFailed(e) => write!(f, "Slack API request failed: {}", e),
            SlackError::APIResponseError(e) => write!(f, "Slack API returned error: {}", e),
        }
    }
}
