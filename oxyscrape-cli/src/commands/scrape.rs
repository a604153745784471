//! Realtime scrape command handlers
//!
//! One subcommand per scraper source template, plus `url` for the
//! universal source.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use oxyscrape_client::ScraperClient;
use oxyscrape_core::domain::job::Render;
use oxyscrape_core::dto::query::ScrapeQuery;

use crate::config::Config;

/// Realtime scrape subcommands
#[derive(Subcommand)]
pub enum ScrapeCommands {
    /// Scrape an arbitrary URL with the universal source
    Url {
        /// Target URL
        url: String,

        /// Proxy location, e.g. "United States"
        #[arg(long)]
        geo_location: Option<String>,

        /// Rendering mode: html or png
        #[arg(long)]
        render: Option<String>,

        /// Enable parsing
        #[arg(long)]
        parse: bool,

        /// Browser profile, e.g. "desktop_chrome"
        #[arg(long)]
        user_agent_type: Option<String>,

        /// Session id to keep the same exit IP
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Scrape an Amazon product page by ASIN (parsed)
    AmazonProduct {
        /// Amazon Standard Identification Number
        asin: String,

        /// Location (ZIP code or country), defaults to United States
        #[arg(long)]
        geo_location: Option<String>,
    },
    /// Search Amazon (parsed)
    AmazonSearch {
        /// Search term
        query: String,

        /// Number of result pages
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Location, defaults to United States
        #[arg(long)]
        geo_location: Option<String>,
    },
    /// Search Google (parsed)
    GoogleSearch {
        /// Search term
        query: String,

        /// Number of result pages
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Location, e.g. "California,United States"
        #[arg(long)]
        geo_location: Option<String>,
    },
}

/// Handle realtime scrape commands
pub async fn handle_scrape_command(command: ScrapeCommands, config: &Config) -> Result<()> {
    let client = config.client();

    let query = match command {
        ScrapeCommands::Url {
            url,
            geo_location,
            render,
            parse,
            user_agent_type,
            session_id,
        } => {
            let mut query = ScrapeQuery::universal(url);
            if let Some(geo) = geo_location {
                query = query.with_geo_location(geo);
            }
            if let Some(render) = render {
                query = query.with_render(render.parse::<Render>().map_err(anyhow::Error::msg)?);
            }
            if parse {
                query = query.with_parse(true);
            }
            if let Some(ua) = user_agent_type {
                query = query.with_user_agent_type(ua);
            }
            if let Some(session) = session_id {
                query = query.with_session_id(session);
            }
            query
        }
        ScrapeCommands::AmazonProduct { asin, geo_location } => {
            let mut query = ScrapeQuery::amazon_product(asin);
            if let Some(geo) = geo_location {
                query = query.with_geo_location(geo);
            }
            query
        }
        ScrapeCommands::AmazonSearch {
            query: term,
            pages,
            geo_location,
        } => {
            let mut query = ScrapeQuery::amazon_search(term).with_pages(pages);
            if let Some(geo) = geo_location {
                query = query.with_geo_location(geo);
            }
            query
        }
        ScrapeCommands::GoogleSearch {
            query: term,
            pages,
            geo_location,
        } => {
            let mut query = ScrapeQuery::google_search(term).with_pages(pages);
            if let Some(geo) = geo_location {
                query = query.with_geo_location(geo);
            }
            query
        }
    };

    run_scrape(&client, &query).await
}

/// Run one realtime scrape and pretty-print the response
async fn run_scrape(client: &ScraperClient, query: &ScrapeQuery) -> Result<()> {
    let result = client.scrape(query).await?;

    println!(
        "{}",
        format!("Scrape result ({}):", query.source()).bold()
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
