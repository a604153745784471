//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod proxy;
mod scrape;

pub use job::JobCommands;
pub use proxy::ProxyCommands;
pub use scrape::ScrapeCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Realtime scraping (results in the same response)
    Scrape {
        #[command(subcommand)]
        command: ScrapeCommands,
    },
    /// Push-pull job management (submit, poll, fetch results)
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Proxy endpoint integration
    Proxy {
        #[command(subcommand)]
        command: ProxyCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scrape { command } => scrape::handle_scrape_command(command, config).await,
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Proxy { command } => proxy::handle_proxy_command(command, config).await,
    }
}
