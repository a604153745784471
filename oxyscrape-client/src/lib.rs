//! Oxyscrape HTTP Client
//!
//! A type-safe client for the Oxylabs Web Scraper API covering all three
//! integration modes:
//!
//! - Realtime: synchronous scrape, results in the same HTTP response
//! - Push-pull: submit a job, poll its status, fetch results separately
//! - Proxy endpoint: route plain GET requests through the scraping proxy
//!
//! # Example
//!
//! ```no_run
//! use oxyscrape_client::ScraperClient;
//! use oxyscrape_core::domain::job::ResultType;
//! use oxyscrape_core::dto::query::ScrapeQuery;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> oxyscrape_client::Result<()> {
//!     let client = ScraperClient::new("USERNAME", "PASSWORD");
//!
//!     let job_id = client.submit(&ScrapeQuery::universal("https://example.com")).await?;
//!     let result = client
//!         .await_result(
//!             &job_id,
//!             ResultType::Parsed,
//!             Duration::from_secs(2),
//!             Duration::from_secs(300),
//!         )
//!         .await?;
//!
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod proxy;
mod realtime;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use jobs::MAX_BATCH_URLS;
pub use oxyscrape_core::domain::credentials::Credentials;
pub use oxyscrape_core::domain::job::{JobStatus, Render, ResultType};
pub use oxyscrape_core::dto::job::JobStatusInfo;
pub use oxyscrape_core::dto::query::ScrapeQuery;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Production realtime endpoint host.
pub const REALTIME_BASE_URL: &str = "https://realtime.oxylabs.io";
/// Production push-pull (data) endpoint host.
pub const DATA_BASE_URL: &str = "https://data.oxylabs.io";
/// Proxy-endpoint host and port; credentials are embedded in the URL.
pub const PROXY_HOST: &str = "realtime.oxylabs.io";
pub const PROXY_PORT: u16 = 60000;

/// Client for the Oxylabs Web Scraper API
///
/// Stateless apart from the credential pair and the reused HTTP connection
/// pool; safe to clone and share. Every API call authenticates with HTTP
/// Basic Auth. Methods are organized by integration mode:
/// - Realtime scraping ([`scrape`](Self::scrape))
/// - Push-pull job lifecycle ([`submit`](Self::submit),
///   [`get_status`](Self::get_status), [`await_result`](Self::await_result))
/// - Proxy endpoint ([`proxy_url`](Self::proxy_url),
///   [`fetch_via_proxy`](Self::fetch_via_proxy))
#[derive(Debug, Clone)]
pub struct ScraperClient {
    credentials: Credentials,
    realtime_url: String,
    data_url: String,
    verify_proxy_tls: bool,
    client: Client,
}

impl ScraperClient {
    /// Create a client against the production endpoints.
    ///
    /// # Example
    /// ```
    /// use oxyscrape_client::ScraperClient;
    ///
    /// let client = ScraperClient::new("USERNAME", "PASSWORD");
    /// ```
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_client(username, password, Client::new())
    }

    /// Create a client with a custom HTTP client.
    ///
    /// Use this to configure timeouts, pooling, or TLS settings on the
    /// underlying transport.
    ///
    /// # Example
    /// ```
    /// use oxyscrape_client::ScraperClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ScraperClient::with_client("USERNAME", "PASSWORD", http_client);
    /// ```
    pub fn with_client(
        username: impl Into<String>,
        password: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            realtime_url: REALTIME_BASE_URL.to_string(),
            data_url: DATA_BASE_URL.to_string(),
            verify_proxy_tls: false,
            client,
        }
    }

    /// Override the realtime and data base URLs (staging, tests).
    pub fn with_base_urls(
        mut self,
        realtime_url: impl Into<String>,
        data_url: impl Into<String>,
    ) -> Self {
        self.realtime_url = realtime_url.into().trim_end_matches('/').to_string();
        self.data_url = data_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Enable or disable TLS certificate verification on the proxy path.
    ///
    /// Verification is off by default because the proxy intercepts TLS to
    /// return scraped content; see [`fetch_via_proxy`](Self::fetch_via_proxy).
    pub fn with_proxy_tls_verification(mut self, verify: bool) -> Self {
        self.verify_proxy_tls = verify;
        self
    }

    pub fn realtime_url(&self) -> &str {
        &self.realtime_url
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn verify_proxy_tls(&self) -> bool {
        self.verify_proxy_tls
    }

    /// Attach Basic Auth to a request builder.
    pub(crate) fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.basic_auth(&self.credentials.username, Some(&self.credentials.password))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON.
    ///
    /// Checks the status code and returns [`ClientError::ApiError`] carrying
    /// the status and body if the request failed, or deserializes the
    /// response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_uses_production_endpoints() {
        let client = ScraperClient::new("u", "p");
        assert_eq!(client.realtime_url(), "https://realtime.oxylabs.io");
        assert_eq!(client.data_url(), "https://data.oxylabs.io");
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = ScraperClient::new("u", "p")
            .with_base_urls("http://localhost:8080/", "http://localhost:8081/");
        assert_eq!(client.realtime_url(), "http://localhost:8080");
        assert_eq!(client.data_url(), "http://localhost:8081");
    }

    #[test]
    fn test_proxy_tls_verification_defaults_off() {
        let client = ScraperClient::new("u", "p");
        assert!(!client.verify_proxy_tls());
        let client = client.with_proxy_tls_verification(true);
        assert!(client.verify_proxy_tls());
    }
}
