//! Error types for the scraper client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the scraper client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Underlying transport failed (connection, TLS, body read). Surfaced
    /// unwrapped; never retried.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body returned by the API
        body: String,
    },

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Status polling observed `faulted`; the job permanently failed
    #[error("Job {job_id} failed")]
    JobFailed { job_id: String },

    /// Polling exceeded the caller-supplied timeout without a terminal
    /// status. The job may still complete server-side.
    #[error("Job {job_id} timed out after {timeout:?}")]
    JobTimedOut { job_id: String, timeout: Duration },

    /// Request rejected locally before any network call
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and response body
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_class_helpers() {
        assert!(ClientError::api_error(404, "missing").is_client_error());
        assert!(!ClientError::api_error(404, "missing").is_server_error());
        assert!(ClientError::api_error(500, "boom").is_server_error());
        let failed = ClientError::JobFailed {
            job_id: "j1".to_string(),
        };
        assert!(!failed.is_client_error() && !failed.is_server_error());
    }

    #[test]
    fn timeout_error_names_job_and_timeout() {
        let err = ClientError::JobTimedOut {
            job_id: "j1".to_string(),
            timeout: Duration::from_secs(300),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("j1"));
        assert!(rendered.contains("300"));
    }
}
