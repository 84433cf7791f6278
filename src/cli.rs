use crate::dispatch::Mode;
use crate::slack::channel::ChannelId;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "marketing-report",
    about = "Post the marketing performance report (before vs after the pivot date) to Slack.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[arg(
        long,
        visible_alias = "preview",
        help = "Print the report to the console instead of sending it."
    )]
    pub test: bool,
    #[arg(
        long,
        requires = "test",
        help = "With --test, print the Block Kit JSON payload instead of the console layout."
    )]
    pub json: bool,
    #[arg(
        long,
        value_name = "ID",
        conflicts_with = "test",
        help = "Slack channel ID to send to, overriding $SLACK_CHANNEL."
    )]
    pub channel: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Load the performance record from a JSON file instead of the built-in data."
    )]
    pub data: Option<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.test {
            Mode::Preview { json: self.json }
        } else {
            Mode::Send {
                channel: self.channel.clone().map(ChannelId),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("marketing-report").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_is_send() {
        assert_eq!(parse(&[]).unwrap().mode(), Mode::Send { channel: None });
    }

    #[test]
    fn test_preview() {
        assert_eq!(
            parse(&["--test"]).unwrap().mode(),
            Mode::Preview { json: false }
        );
        assert_eq!(
            parse(&["--preview", "--json"]).unwrap().mode(),
            Mode::Preview { json: true }
        );
    }

    #[test]
    fn test_channel_override() {
        assert_eq!(
            parse(&["--channel", "C024BE91L"]).unwrap().mode(),
            Mode::Send {
                channel: Some(ChannelId("C024BE91L".into()))
            }
        );
    }

    #[test]
    fn test_illegal_combinations() {
        assert!(parse(&["--test", "--channel", "C1"]).is_err());
        assert!(parse(&["--json"]).is_err());
    }

    #[test]
    fn test_data_path() {
        let cli = parse(&["--test", "--data", "report.json"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
