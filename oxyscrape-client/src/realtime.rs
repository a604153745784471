//! Realtime scraping endpoint

use serde_json::Value;
use tracing::debug;

use crate::ScraperClient;
use crate::error::Result;
use oxyscrape_core::dto::query::ScrapeQuery;

impl ScraperClient {
    /// Scrape synchronously via the realtime endpoint.
    ///
    /// Blocks (asynchronously) until the scrape completes server-side and
    /// returns the response JSON directly. For long-running scrapes prefer
    /// [`submit`](Self::submit) + [`await_result`](Self::await_result).
    ///
    /// # Example
    /// ```no_run
    /// # use oxyscrape_client::ScraperClient;
    /// # use oxyscrape_core::dto::query::ScrapeQuery;
    /// # async fn example() -> oxyscrape_client::Result<()> {
    /// let client = ScraperClient::new("USERNAME", "PASSWORD");
    /// let result = client.scrape(&ScrapeQuery::google_search("web scraping")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape(&self, query: &ScrapeQuery) -> Result<Value> {
        let url = format!("{}/v1/queries", self.realtime_url());
        debug!("Realtime scrape via {} (source {})", url, query.source());

        let response = self
            .authed(self.http().post(&url))
            .json(&query.to_body())
            .send()
            .await?;

        self.handle_response(response).await
    }
}
