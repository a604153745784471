//! Push-pull job lifecycle endpoints
//!
//! Submission (single and batch), status fetch, result fetch, and the
//! polling loop that waits for a terminal status.

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, info};

use crate::ScraperClient;
use crate::error::{ClientError, Result};
use oxyscrape_core::domain::job::{JobStatus, ResultType};
use oxyscrape_core::dto::job::{BatchSubmitResponse, JobStatusInfo, SubmitResponse};
use oxyscrape_core::dto::query::ScrapeQuery;

/// Maximum number of URLs the batch endpoint accepts per submission.
pub const MAX_BATCH_URLS: usize = 5_000;

impl ScraperClient {
    // =============================================================================
    // Submission
    // =============================================================================

    /// Submit a single async job.
    ///
    /// # Returns
    /// The server-assigned job id.
    ///
    /// # Example
    /// ```no_run
    /// # use oxyscrape_client::ScraperClient;
    /// # use oxyscrape_core::dto::query::ScrapeQuery;
    /// # async fn example() -> oxyscrape_client::Result<()> {
    /// let client = ScraperClient::new("USERNAME", "PASSWORD");
    /// let query = ScrapeQuery::universal("https://example.com")
    ///     .with_callback_url("https://hooks.example.com/done");
    /// let job_id = client.submit(&query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit(&self, query: &ScrapeQuery) -> Result<String> {
        let url = format!("{}/v1/queries", self.data_url());
        let response = self
            .authed(self.http().post(&url))
            .json(&query.to_body())
            .send()
            .await?;

        let submitted: SubmitResponse = self.handle_response(response).await?;
        info!("Submitted job {} (source {})", submitted.id, query.source());
        Ok(submitted.id)
    }

    /// Submit one batch job for up to [`MAX_BATCH_URLS`] target URLs.
    ///
    /// Each URL gets its own job; the returned ids are in submission order.
    /// If the server omits a slot the returned sequence is correspondingly
    /// shorter. There is no aggregate status; poll each id individually.
    pub async fn submit_batch(&self, query: &ScrapeQuery, urls: &[String]) -> Result<Vec<String>> {
        if urls.len() > MAX_BATCH_URLS {
            return Err(ClientError::InvalidRequest(format!(
                "Batch of {} URLs exceeds the service limit of {}",
                urls.len(),
                MAX_BATCH_URLS
            )));
        }

        let url = format!("{}/v1/queries/batch", self.data_url());
        let response = self
            .authed(self.http().post(&url))
            .json(&query.to_batch_body(urls))
            .send()
            .await?;

        let batch: BatchSubmitResponse = self.handle_response(response).await?;
        info!(
            "Submitted batch of {} URL(s), received {} job id(s)",
            urls.len(),
            batch.queries.len()
        );
        Ok(batch.queries.into_iter().map(|q| q.id).collect())
    }

    // =============================================================================
    // Status & Results
    // =============================================================================

    /// Fetch the current status record for one job.
    ///
    /// Server-supplied metadata beyond `status` is passed through verbatim
    /// in [`JobStatusInfo::meta`].
    pub async fn get_status(&self, job_id: &str) -> Result<JobStatusInfo> {
        let url = format!("{}/v1/queries/{}", self.data_url(), job_id);
        let response = self.authed(self.http().get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the result payload of a job known to be `done`.
    ///
    /// Useful on its own when completion was signaled out of band (e.g. a
    /// callback URL); [`await_result`](Self::await_result) calls this after
    /// polling. The payload is returned unmodified.
    pub async fn fetch_result(&self, job_id: &str, result_type: ResultType) -> Result<Value> {
        let url = format!("{}/v1/queries/{}/results", self.data_url(), job_id);
        let response = self
            .authed(self.http().get(&url))
            .query(&[("type", result_type.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Poll a job until it reaches a terminal status, then fetch its result.
    ///
    /// Checks the status, sleeping `poll_interval` between checks, for up to
    /// `timeout`:
    /// - `done`: fetches and returns the result in the requested shape
    /// - `faulted`: fails with [`ClientError::JobFailed`] immediately, even
    ///   when observed on the very last check before the timeout
    /// - anything else is non-terminal; the loop sleeps and retries, never
    ///   oversleeping past `timeout`
    ///
    /// Exceeding `timeout` without a terminal status fails with
    /// [`ClientError::JobTimedOut`]. The job keeps running server-side and
    /// may still complete; calling this again with the same id is safe.
    pub async fn await_result(
        &self,
        job_id: &str,
        result_type: ResultType,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<Value> {
        let start = Instant::now();

        while start.elapsed() < timeout {
            let info = self.get_status(job_id).await?;

            match info.status {
                JobStatus::Done => {
                    debug!("Job {} done, fetching {} result", job_id, result_type);
                    return self.fetch_result(job_id, result_type).await;
                }
                JobStatus::Faulted => {
                    return Err(ClientError::JobFailed {
                        job_id: job_id.to_string(),
                    });
                }
                status => {
                    debug!("Job {} still {}, waiting", job_id, status);
                }
            }

            let remaining = timeout.saturating_sub(start.elapsed());
            if !remaining.is_zero() {
                tokio::time::sleep(poll_interval.min(remaining)).await;
            }
        }

        Err(ClientError::JobTimedOut {
            job_id: job_id.to_string(),
            timeout,
        })
    }
}
