//! Job domain types

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Status of a submitted scrape job, as reported by the service.
///
/// The server assigns the status; the client never mutates it. Statuses the
/// client does not know about deserialize to [`JobStatus::Other`] and are
/// treated as non-terminal, so new server-side states keep a poll loop
/// waiting instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Done,
    Faulted,
    #[serde(other)]
    Other,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Done => "done",
            JobStatus::Faulted => "faulted",
            JobStatus::Other => "unknown",
        }
    }

    /// Whether polling can stop: results are fetchable (`done`) or the job
    /// permanently failed (`faulted`).
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Faulted)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape requested when fetching the result of a `done` job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultType {
    Raw,
    #[default]
    Parsed,
    Png,
    Markdown,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Raw => "raw",
            ResultType::Parsed => "parsed",
            ResultType::Png => "png",
            ResultType::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(ResultType::Raw),
            "parsed" => Ok(ResultType::Parsed),
            "png" => Ok(ResultType::Png),
            "markdown" => Ok(ResultType::Markdown),
            _ => Err(format!("Unknown result type: {}", s)),
        }
    }
}

/// Rendering mode for the `render` request field and the
/// `x-oxylabs-render` proxy header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Render {
    Html,
    Png,
}

impl Render {
    pub fn as_str(&self) -> &'static str {
        match self {
            Render::Html => "html",
            Render::Png => "png",
        }
    }
}

impl fmt::Display for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Render {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Render::Html),
            "png" => Ok(Render::Png),
            _ => Err(format!("Unknown render mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_deserializes_from_wire_strings() {
        let status: JobStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, JobStatus::Pending);
        let status: JobStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, JobStatus::Done);
        let status: JobStatus = serde_json::from_str("\"faulted\"").unwrap();
        assert_eq!(status, JobStatus::Faulted);
    }

    #[test]
    fn unknown_status_is_non_terminal() {
        let status: JobStatus = serde_json::from_str("\"running\"").unwrap();
        assert_eq!(status, JobStatus::Other);
        assert!(!status.is_terminal());
    }

    #[test]
    fn terminal_statuses() {
        assert!(JobStatus::Done.is_terminal());
        assert!(JobStatus::Faulted.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
    }

    #[test]
    fn result_type_round_trips_through_str() {
        for (name, kind) in [
            ("raw", ResultType::Raw),
            ("parsed", ResultType::Parsed),
            ("png", ResultType::Png),
            ("markdown", ResultType::Markdown),
        ] {
            assert_eq!(kind.as_str(), name);
            assert_eq!(name.parse::<ResultType>().unwrap(), kind);
        }
        assert!("pdf".parse::<ResultType>().is_err());
    }

    #[test]
    fn render_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Render::Html).unwrap(), "html");
        assert_eq!(serde_json::to_value(Render::Png).unwrap(), "png");
    }
}
