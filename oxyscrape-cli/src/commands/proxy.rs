//! Proxy endpoint command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use oxyscrape_core::domain::job::Render;

use crate::config::Config;

/// Proxy subcommands
#[derive(Subcommand)]
pub enum ProxyCommands {
    /// Print the proxy connection string
    Url,
    /// Fetch a URL through the scraping proxy
    Fetch {
        /// Target URL
        url: String,

        /// Proxy location header value
        #[arg(long)]
        geo_location: Option<String>,

        /// Rendering mode header: html or png
        #[arg(long)]
        render: Option<String>,

        /// Re-enable TLS certificate verification on the proxy path
        #[arg(long)]
        verify_tls: bool,
    },
}

/// Handle proxy commands
pub async fn handle_proxy_command(command: ProxyCommands, config: &Config) -> Result<()> {
    match command {
        ProxyCommands::Url => {
            println!("{}", config.client().proxy_url());
            Ok(())
        }
        ProxyCommands::Fetch {
            url,
            geo_location,
            render,
            verify_tls,
        } => {
            let render = render
                .map(|r| r.parse::<Render>())
                .transpose()
                .map_err(anyhow::Error::msg)?;

            let client = config.client().with_proxy_tls_verification(verify_tls);
            let response = client
                .fetch_via_proxy(&url, geo_location.as_deref(), render)
                .await?;

            let status = response.status();
            let status_str = format!("{}", status);
            println!(
                "{} {}",
                "Status:".bold(),
                if status.is_success() {
                    status_str.green()
                } else {
                    status_str.red()
                }
            );

            let body = response.text().await?;
            println!("{}", body);

            Ok(())
        }
    }
}
