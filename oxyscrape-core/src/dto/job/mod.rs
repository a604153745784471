//! Job response DTOs
//!
//! Thin typed views of the push-pull endpoints' responses. Anything beyond
//! the fields the client acts on is kept verbatim in `meta`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::job::JobStatus;

/// Response of the single-job submission endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Server-assigned job identifier, opaque to the client.
    pub id: String,
}

/// One entry of a batch submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryHandle {
    pub id: String,
}

/// Response of the batch submission endpoint. The `queries` order matches
/// submission order; the server may return fewer entries than URLs sent.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSubmitResponse {
    #[serde(default)]
    pub queries: Vec<QueryHandle>,
}

/// Status record for one job, with server-supplied metadata passed through.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatusInfo {
    pub status: JobStatus,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_info_keeps_server_metadata() {
        let info: JobStatusInfo = serde_json::from_value(json!({
            "status": "pending",
            "id": "7138009017805262849",
            "created_at": "2026-01-05 12:00:00",
        }))
        .unwrap();
        assert_eq!(info.status, JobStatus::Pending);
        assert_eq!(info.meta["id"], "7138009017805262849");
        assert_eq!(info.meta["created_at"], "2026-01-05 12:00:00");
    }

    #[test]
    fn batch_response_defaults_to_empty() {
        let resp: BatchSubmitResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.queries.is_empty());
    }

    #[test]
    fn batch_response_preserves_order() {
        let resp: BatchSubmitResponse = serde_json::from_value(json!({
            "queries": [{"id": "1"}, {"id": "2"}, {"id": "3"}],
        }))
        .unwrap();
        let ids: Vec<&str> = resp.queries.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
