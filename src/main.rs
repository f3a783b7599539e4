mod analyzer;
mod config;
mod matcher;
mod model;
mod notifier;
mod orchestrator;
mod parser;
mod source;
mod utils;

#[cfg(test)]
mod test_utils;

use clap::Parser;
use config::DEFAULT_CONFIG_PATH;
use config::AppConfig;
use notifier::{Notifier, TelegramNotifier};
use source::{ArticleSource, ArxivFetcher};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utils::{skip_day, Clock, SystemClock};

/// Scrap the arXiv and forward interesting articles to Telegram.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,

    /// Do not send a message when no article is found, for every filter set.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let client = match ArxivFetcher::build_client() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    run(&cli, &SystemClock, |config| {
        (
            ArxivFetcher::new(client.clone(), config.feed_url.clone()),
            TelegramNotifier::new(config.telegram_bot_token.clone(), client),
        )
    })
    .await
}

/// Checks the run-date gate, then loads the config and runs every filter set.
/// Nothing is loaded or built on a skip day.
async fn run<C, S, N, F>(cli: &Cli, clock: &C, build: F) -> ExitCode
where
    C: Clock,
    S: ArticleSource,
    N: Notifier,
    F: FnOnce(&AppConfig) -> (S, N),
{
    if let Some(day) = skip_day(clock) {
        println!("It's {}, the arXiv is resting. Nothing to do.", day);
        return ExitCode::SUCCESS;
    }

    info!("Config path: {}", cli.config_path.display());

    match orchestrator::launch(&cli.config_path, cli.quiet, build).await {
        Ok(report) => {
            info!(
                "🏁 Run finished: {} filter set(s), {} article(s), {} message(s) sent, {} failed",
                report.filter_sets, report.articles_found, report.messages_sent, report.messages_failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Config load error: {}", e);
            ExitCode::FAILURE
        }
    }
}
