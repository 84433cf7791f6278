//! Marketing performance report for Slack.
//!
//! Compares campaign numbers before and after a pivot date and either prints
//! the report (`--test`) or posts it with `chat.postMessage`.
//!
//! Sending needs `$SLACK_BOT_TOKEN` and a channel, from `$SLACK_CHANNEL` or
//! `--channel`. Both may come from a `.env` file.

use chrono::Local;
use clap::Parser;
use cli::Cli;
use config::Config;
use dispatch::{dispatch, Outcome};
use dotenvy::dotenv;
use error::Failure;
use report::{build_blocks, fallback_text, PerformanceRecord};
use slack::api::SlackClient;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod cli;
mod config;
mod de;
mod dispatch;
mod error;
mod report;
mod slack;

/// Application entrypoint. Initialises tracing, loads `.env` and settings,
/// then builds and dispatches the report.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let cli = Cli::parse();
    let config = Config::from_env();

    match run(&cli, &config).await {
        Ok(Outcome::Previewed(out)) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Sent(channel)) => {
            info!("Report sent to {}", channel);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Load the record, build the report, and hand it to the dispatcher.
async fn run(cli: &Cli, config: &Config) -> Result<Outcome, Failure> {
    let record = match &cli.data {
        Some(path) => PerformanceRecord::load(path)?,
        None => PerformanceRecord::sample(),
    };

    let blocks = build_blocks(&record, Local::now().date_naive())?;
    let text = fallback_text(&record);
    let client = SlackClient::new(config.api_base.clone());

    dispatch(&blocks, &text, cli.mode(), config, &client).await
}
