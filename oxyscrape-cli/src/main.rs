//! Oxyscrape CLI
//!
//! Command-line interface for the Oxylabs Web Scraper API: realtime
//! scraping, push-pull job management, and the proxy endpoint.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oxyscrape")]
#[command(about = "Oxylabs Web Scraper API CLI", long_about = None)]
struct Cli {
    /// API username
    #[arg(long, env = "OXYLABS_USERNAME")]
    username: String,

    /// API password
    #[arg(long, env = "OXYLABS_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oxyscrape_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        username: cli.username,
        password: cli.password,
    };

    handle_command(cli.command, &config).await
}
