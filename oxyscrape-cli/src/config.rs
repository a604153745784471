//! Configuration module
//!
//! Holds the credential pair shared by every command handler.

use oxyscrape_client::ScraperClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
}

impl Config {
    /// Build an API client from the configured credentials.
    pub fn client(&self) -> ScraperClient {
        ScraperClient::new(&self.username, &self.password)
    }
}
