//! Data transfer objects
//!
//! Request payload builders and response shapes for talking to the
//! Web Scraper API. Requests are built as `serde_json` values so the
//! caller-supplied overlay can be merged with well-defined precedence;
//! responses are thin typed wrappers that pass server metadata through
//! verbatim.

pub mod job;
pub mod query;
