//! Job command handlers
//!
//! Push-pull lifecycle: submit single or batch jobs, check status, and
//! wait for results.

use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use oxyscrape_client::ScraperClient;
use oxyscrape_core::domain::job::{JobStatus, Render, ResultType};
use oxyscrape_core::dto::job::JobStatusInfo;
use oxyscrape_core::dto::query::ScrapeQuery;

use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Submit an async job
    Submit {
        /// Target URL
        url: String,

        /// Scraper source
        #[arg(long, default_value = "universal")]
        source: String,

        /// Proxy location
        #[arg(long)]
        geo_location: Option<String>,

        /// Rendering mode: html or png
        #[arg(long)]
        render: Option<String>,

        /// Enable parsing
        #[arg(long)]
        parse: bool,

        /// Webhook URL notified on completion
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Submit a batch of URLs (one job per URL, up to 5000)
    Batch {
        /// Target URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Scraper source
        #[arg(long, default_value = "universal")]
        source: String,

        /// Proxy location shared by all URLs
        #[arg(long)]
        geo_location: Option<String>,
    },
    /// Get job status
    Status {
        /// Job id
        id: String,
    },
    /// Fetch results of a job that is already done
    Results {
        /// Job id
        id: String,

        /// Result shape: raw, parsed, png or markdown
        #[arg(long, default_value = "parsed")]
        result_type: String,
    },
    /// Poll a job until it completes, then fetch its results
    Await {
        /// Job id
        id: String,

        /// Result shape: raw, parsed, png or markdown
        #[arg(long, default_value = "parsed")]
        result_type: String,

        /// Seconds between status checks
        #[arg(long, default_value_t = 2.0)]
        poll_interval: f64,

        /// Maximum seconds to wait
        #[arg(long, default_value_t = 300.0)]
        timeout: f64,
    },
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        JobCommands::Submit {
            url,
            source,
            geo_location,
            render,
            parse,
            callback_url,
        } => {
            let mut query = ScrapeQuery::new(source).with_url(url);
            if let Some(geo) = geo_location {
                query = query.with_geo_location(geo);
            }
            if let Some(render) = render {
                query = query.with_render(render.parse::<Render>().map_err(anyhow::Error::msg)?);
            }
            if parse {
                query = query.with_parse(true);
            }
            if let Some(callback) = callback_url {
                query = query.with_callback_url(callback);
            }
            submit_job(&client, &query).await
        }
        JobCommands::Batch {
            urls,
            source,
            geo_location,
        } => {
            let mut query = ScrapeQuery::new(source);
            if let Some(geo) = geo_location {
                query = query.with_geo_location(geo);
            }
            submit_batch(&client, &query, &urls).await
        }
        JobCommands::Status { id } => get_status(&client, &id).await,
        JobCommands::Results { id, result_type } => {
            let result_type = result_type
                .parse::<ResultType>()
                .map_err(anyhow::Error::msg)?;
            fetch_results(&client, &id, result_type).await
        }
        JobCommands::Await {
            id,
            result_type,
            poll_interval,
            timeout,
        } => {
            let result_type = result_type
                .parse::<ResultType>()
                .map_err(anyhow::Error::msg)?;
            await_results(
                &client,
                &id,
                result_type,
                Duration::from_secs_f64(poll_interval),
                Duration::from_secs_f64(timeout),
            )
            .await
        }
    }
}

/// Submit a single job and print its id
async fn submit_job(client: &ScraperClient, query: &ScrapeQuery) -> Result<()> {
    let job_id = client.submit(query).await?;

    println!("{}", "Job submitted:".bold());
    println!("  ID: {}", job_id.cyan());

    Ok(())
}

/// Submit a batch and print the ids in submission order
async fn submit_batch(client: &ScraperClient, query: &ScrapeQuery, urls: &[String]) -> Result<()> {
    let ids = client.submit_batch(query, urls).await?;

    println!(
        "{}",
        format!("Batch submitted, {} job(s):", ids.len()).bold()
    );
    for (url, id) in urls.iter().zip(ids.iter()) {
        println!("  {} {}", id.cyan(), url.dimmed());
    }

    Ok(())
}

/// Fetch and display one job's status record
async fn get_status(client: &ScraperClient, id: &str) -> Result<()> {
    let info = client.get_status(id).await?;

    print_status(id, &info);

    Ok(())
}

/// Fetch and print results of a done job
async fn fetch_results(client: &ScraperClient, id: &str, result_type: ResultType) -> Result<()> {
    let result = client.fetch_result(id, result_type).await?;

    println!("{}", format!("Results for job {} ({}):", id, result_type).bold());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Poll until terminal, then print results
async fn await_results(
    client: &ScraperClient,
    id: &str,
    result_type: ResultType,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<()> {
    println!(
        "{}",
        format!("Waiting for job {} (timeout {:?})...", id, timeout).dimmed()
    );

    let result = client
        .await_result(id, result_type, poll_interval, timeout)
        .await?;

    println!("{}", format!("Results for job {} ({}):", id, result_type).bold());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Print a status record, server metadata included
fn print_status(id: &str, info: &JobStatusInfo) {
    println!("{}", "Job status:".bold());
    println!("  ID:     {}", id.cyan());
    println!("  Status: {}", colorize_status(info.status));

    for (key, value) in &info.meta {
        println!("  {}: {}", key.dimmed(), value);
    }
}

/// Colorize a job status for display
fn colorize_status(status: JobStatus) -> colored::ColoredString {
    let status_str = status.as_str();
    match status {
        JobStatus::Pending => status_str.yellow(),
        JobStatus::Done => status_str.green(),
        JobStatus::Faulted => status_str.red(),
        JobStatus::Other => status_str.dimmed(),
    }
}
