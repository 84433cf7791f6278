use crate::slack::SlackError;
use std::fmt;
use std::path::PathBuf;

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug)]
pub enum Failure {
    /// Send mode was requested without the named environment variable.
    MissingConfiguration(&'static str),
    /// The performance record lacks a metric the report needs.
    MissingMetric(String),
    /// A metric that must be a whole number (a count or a won amount) isn't.
    NotAnAmount(String),
    /// A record file could not be read or parsed.
    DataFile(PathBuf, String),
    Slack(SlackError),
}

impl From<SlackError> for Failure {
    fn from(e: SlackError) -> Self {
        Failure::Slack(e)
    }
}

impl Failure {
    /// Process exit status, distinct per failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::Slack(_) => 1,
            Failure::MissingConfiguration(_) => 2,
            Failure::MissingMetric(_) | Failure::NotAnAmount(_) | Failure::DataFile(..) => 3,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            Failure::MissingConfiguration(var) => format!("${} is not set", var),
            Failure::MissingMetric(m) => format!("Missing metric: {}", m),
            Failure::NotAnAmount(m) => format!("Metric is not a whole number: {}", m),
            Failure::DataFile(path, e) => {
                format!("Could not load report data from {}: {}", path.display(), e)
            }
            Failure::Slack(e) => e.to_string(),
        };

        write!(f, "{}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Failure::MissingConfiguration("SLACK_BOT_TOKEN").to_string(),
            "$SLACK_BOT_TOKEN is not set"
        );
        assert_eq!(
            Failure::MissingMetric("view_rate".into()).to_string(),
            "Missing metric: view_rate"
        );
        assert_eq!(
            Failure::Slack(SlackError::APIResponseError("invalid_auth".into())).to_string(),
            "Slack API returned error: invalid_auth"
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        let config = Failure::MissingConfiguration("SLACK_CHANNEL").exit_code();
        let slack = Failure::Slack(SlackError::APIResponseError("x".into())).exit_code();
        let data = Failure::MissingMetric("roas".into()).exit_code();

        assert_ne!(config, 0);
        assert_ne!(slack, 0);
        assert_ne!(config, slack);
        assert_ne!(data, config);
        assert_ne!(data, slack);
    }
}
