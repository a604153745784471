//! Scrape query payload builder
//!
//! A [`ScrapeQuery`] collects the request fields accepted by the realtime
//! and push-pull submission endpoints and renders them into a JSON body.
//! Only fields that were actually set appear in the body; the open-ended
//! extra-field overlay is merged last.

use serde_json::{Map, Value};

use crate::domain::job::Render;

/// Request payload for a single scrape, in any integration mode.
///
/// Construct via one of the source templates ([`universal`](Self::universal),
/// [`amazon_product`](Self::amazon_product), ...) or [`new`](Self::new) for a
/// raw source identifier, then chain `with_*` setters.
///
/// # Example
/// ```
/// use oxyscrape_core::dto::query::ScrapeQuery;
/// use oxyscrape_core::domain::job::Render;
///
/// let query = ScrapeQuery::universal("https://example.com")
///     .with_render(Render::Html)
///     .with_geo_location("United States");
/// let body = query.to_body();
/// assert_eq!(body["source"], "universal");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeQuery {
    source: String,
    url: Option<String>,
    query: Option<String>,
    geo_location: Option<String>,
    render: Option<Render>,
    parse: Option<bool>,
    pages: Option<u32>,
    parsing_instructions: Option<Value>,
    browser_instructions: Option<Vec<Value>>,
    user_agent_type: Option<String>,
    session_id: Option<String>,
    callback_url: Option<String>,
    extra: Map<String, Value>,
}

impl ScrapeQuery {
    /// Start an empty query for an arbitrary scraper source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            url: None,
            query: None,
            geo_location: None,
            render: None,
            parse: None,
            pages: None,
            parsing_instructions: None,
            browser_instructions: None,
            user_agent_type: None,
            session_id: None,
            callback_url: None,
            extra: Map::new(),
        }
    }

    /// Scrape an arbitrary URL with the `universal` source.
    pub fn universal(url: impl Into<String>) -> Self {
        Self::new("universal").with_url(url)
    }

    /// Amazon product page by ASIN, parsed, US location by default.
    pub fn amazon_product(asin: impl Into<String>) -> Self {
        Self::new("amazon_product")
            .with_query(asin)
            .with_geo_location("United States")
            .with_parse(true)
    }

    /// Amazon search results for a term, parsed, US location by default.
    pub fn amazon_search(term: impl Into<String>) -> Self {
        Self::new("amazon_search")
            .with_query(term)
            .with_geo_location("United States")
            .with_parse(true)
    }

    /// Google search results for a term, parsed by default.
    pub fn google_search(term: impl Into<String>) -> Self {
        Self::new("google_search").with_query(term).with_parse(true)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Search term or catalog key for `*_search` / `*_product` sources.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Proxy location, e.g. `"United States"` or `"California,United States"`.
    pub fn with_geo_location(mut self, geo_location: impl Into<String>) -> Self {
        self.geo_location = Some(geo_location.into());
        self
    }

    pub fn with_render(mut self, render: Render) -> Self {
        self.render = Some(render);
        self
    }

    pub fn with_parse(mut self, parse: bool) -> Self {
        self.parse = Some(parse);
        self
    }

    /// Number of result pages to retrieve (search sources).
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Custom parser configuration, passed through verbatim.
    pub fn with_parsing_instructions(mut self, instructions: Value) -> Self {
        self.parsing_instructions = Some(instructions);
        self
    }

    /// Ordered browser automation steps, passed through verbatim.
    pub fn with_browser_instructions(mut self, steps: Vec<Value>) -> Self {
        self.browser_instructions = Some(steps);
        self
    }

    /// Browser profile, e.g. `"desktop_chrome"`.
    pub fn with_user_agent_type(mut self, user_agent_type: impl Into<String>) -> Self {
        self.user_agent_type = Some(user_agent_type.into());
        self
    }

    /// Session id to keep the same exit IP across requests.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Webhook URL notified when an async job completes.
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Attach an arbitrary extra field to the outgoing body.
    ///
    /// Extra fields are merged after every named field and override them on
    /// key collision, `source` and `url` included. This mirrors the
    /// service's documented overlay behavior and is intentional.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Render the request body for a single-target submission.
    ///
    /// Contains exactly the fields that were set, plus `source`.
    pub fn to_body(&self) -> Value {
        let mut body = self.base_fields();
        if let Some(url) = &self.url {
            body.insert("url".to_string(), Value::String(url.clone()));
        }
        // Overlay merges last; collisions silently override base fields.
        body.extend(self.extra.clone());
        Value::Object(body)
    }

    /// Render the request body for a batch submission: same fields, with
    /// `url` as the ordered array of targets. Any singular `url` set on the
    /// query is ignored.
    pub fn to_batch_body(&self, urls: &[String]) -> Value {
        let mut body = self.base_fields();
        body.insert(
            "url".to_string(),
            Value::Array(urls.iter().map(|u| Value::String(u.clone())).collect()),
        );
        body.extend(self.extra.clone());
        Value::Object(body)
    }

    fn base_fields(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("source".to_string(), Value::String(self.source.clone()));
        if let Some(query) = &self.query {
            body.insert("query".to_string(), Value::String(query.clone()));
        }
        if let Some(geo) = &self.geo_location {
            body.insert("geo_location".to_string(), Value::String(geo.clone()));
        }
        if let Some(render) = self.render {
            body.insert(
                "render".to_string(),
                Value::String(render.as_str().to_string()),
            );
        }
        if let Some(parse) = self.parse {
            body.insert("parse".to_string(), Value::Bool(parse));
        }
        if let Some(pages) = self.pages {
            body.insert("pages".to_string(), Value::from(pages));
        }
        if let Some(instructions) = &self.parsing_instructions {
            body.insert("parsing_instructions".to_string(), instructions.clone());
        }
        if let Some(steps) = &self.browser_instructions {
            body.insert(
                "browser_instructions".to_string(),
                Value::Array(steps.clone()),
            );
        }
        if let Some(ua) = &self.user_agent_type {
            body.insert("user_agent_type".to_string(), Value::String(ua.clone()));
        }
        if let Some(session) = &self.session_id {
            body.insert("session_id".to_string(), Value::String(session.clone()));
        }
        if let Some(callback) = &self.callback_url {
            body.insert("callback_url".to_string(), Value::String(callback.clone()));
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_body_has_only_source_and_url() {
        let body = ScrapeQuery::universal("https://example.com").to_body();
        assert_eq!(
            body,
            json!({"source": "universal", "url": "https://example.com"})
        );
    }

    #[test]
    fn optional_fields_appear_when_set() {
        let body = ScrapeQuery::universal("https://example.com")
            .with_render(Render::Png)
            .with_parse(true)
            .with_user_agent_type("desktop_chrome")
            .with_session_id("abc123")
            .with_callback_url("https://hooks.example.com/done")
            .to_body();
        assert_eq!(
            body,
            json!({
                "source": "universal",
                "url": "https://example.com",
                "render": "png",
                "parse": true,
                "user_agent_type": "desktop_chrome",
                "session_id": "abc123",
                "callback_url": "https://hooks.example.com/done",
            })
        );
    }

    #[test]
    fn structured_instructions_pass_through() {
        let body = ScrapeQuery::universal("https://example.com")
            .with_parsing_instructions(json!({"title": {"_fns": []}}))
            .with_browser_instructions(vec![json!({"type": "click", "selector": "#go"})])
            .to_body();
        assert_eq!(body["parsing_instructions"], json!({"title": {"_fns": []}}));
        assert_eq!(
            body["browser_instructions"],
            json!([{"type": "click", "selector": "#go"}])
        );
    }

    #[test]
    fn extra_fields_merge_into_body() {
        let body = ScrapeQuery::universal("https://example.com")
            .with_extra("context", json!([{"key": "follow_redirects", "value": true}]))
            .to_body();
        assert_eq!(
            body["context"],
            json!([{"key": "follow_redirects", "value": true}])
        );
    }

    #[test]
    fn extra_fields_override_base_fields_on_collision() {
        // Matches the service's overlay behavior: last write wins, even for
        // required fields.
        let body = ScrapeQuery::universal("https://example.com")
            .with_extra("source", json!("google"))
            .to_body();
        assert_eq!(body["source"], "google");
        assert_eq!(body["url"], "https://example.com");
    }

    #[test]
    fn batch_body_carries_url_array_in_order() {
        let urls: Vec<String> = ["https://a.test", "https://b.test", "https://c.test"]
            .iter()
            .map(|u| u.to_string())
            .collect();
        let body = ScrapeQuery::new("universal")
            .with_geo_location("Germany")
            .to_batch_body(&urls);
        assert_eq!(
            body,
            json!({
                "source": "universal",
                "geo_location": "Germany",
                "url": ["https://a.test", "https://b.test", "https://c.test"],
            })
        );
    }

    #[test]
    fn amazon_product_template_defaults() {
        let body = ScrapeQuery::amazon_product("B07FZ8S74R").to_body();
        assert_eq!(
            body,
            json!({
                "source": "amazon_product",
                "query": "B07FZ8S74R",
                "geo_location": "United States",
                "parse": true,
            })
        );
    }

    #[test]
    fn google_search_template_defaults() {
        let body = ScrapeQuery::google_search("web scraping")
            .with_pages(2)
            .to_body();
        assert_eq!(
            body,
            json!({
                "source": "google_search",
                "query": "web scraping",
                "parse": true,
                "pages": 2,
            })
        );
    }
}
