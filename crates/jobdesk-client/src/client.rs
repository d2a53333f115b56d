//! Scheduler REST client.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use jobdesk_protocols::{
    ApiError, ApiMessage, Job, JobPayload, LogPage, LogQuery, SchedulerApi, TaskDefinition,
};

/// HTTP implementation of [`SchedulerApi`].
///
/// The base address can be swapped at runtime; requests already sent keep the address
/// they were built with. No timeout and no retries are applied.
pub struct HttpSchedulerClient {
    client: reqwest::Client,
    base_url: RwLock<Url>,
}

impl HttpSchedulerClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: RwLock::new(parse_base_url(base_url)?),
        })
    }

    pub fn base_url(&self) -> Url {
        self.base_url.read().clone()
    }

    /// Point subsequent requests at another scheduler.
    pub fn set_base_url(&self, base_url: &str) -> Result<(), ApiError> {
        let url = parse_base_url(base_url)?;
        debug!("Scheduler base URL set to {}", url);
        *self.base_url.write() = url;
        Ok(())
    }

    /// Base address with `segments` appended. A trailing `""` segment yields a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            debug!("Scheduler responded {}: {}", status, text);
            return Err(ApiError::Status { status, message: text });
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments);
        debug!("GET {}", url);
        self.fetch(self.client.get(url)).await
    }

    async fn post_payload(&self, segments: &[&str], payload: &JobPayload) -> Result<ApiMessage, ApiError> {
        let url = self.endpoint(segments);
        debug!("POST {} job_id={}", url, payload.job_id);
        self.fetch(self.client.post(url).json(payload)).await
    }
}

#[async_trait]
impl SchedulerApi for HttpSchedulerClient {
    async fn list_available_tasks(&self) -> Result<Vec<TaskDefinition>, ApiError> {
        self.get(&["available-tasks", ""]).await
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get(&["jobs", ""]).await
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<ApiMessage, ApiError> {
        self.post_payload(&["add-job", ""], payload).await
    }

    async fn update_job(&self, payload: &JobPayload) -> Result<ApiMessage, ApiError> {
        self.post_payload(&["update-job", ""], payload).await
    }

    async fn remove_job(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.get(&["remove-job", job_id]).await
    }

    async fn pause_job(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.get(&["pause-job", job_id]).await
    }

    async fn resume_job(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.get(&["resume-job", job_id]).await
    }

    async fn run_job_now(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        let url = self.endpoint(&["run-job-now", ""]);
        debug!("POST {} job_id={}", url, job_id);
        self.fetch(self.client.post(url).query(&[("job_id", job_id)]))
            .await
    }

    async fn list_logs(&self, query: &LogQuery) -> Result<LogPage, ApiError> {
        let url = self.endpoint(&["logs", ""]);
        debug!("GET {} page={} limit={}", url, query.page, query.limit);
        self.fetch(self.client.get(url).query(query)).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            raw, other
        ))),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
