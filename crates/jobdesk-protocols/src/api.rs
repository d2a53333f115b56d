//! Scheduler service interface.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{ApiMessage, Job, JobPayload, LogPage, LogQuery, TaskDefinition};

/// Operations offered by the remote scheduler service.
///
/// Implementations perform no transformation: payloads are built by the caller and
/// responses are returned as decoded. Failures of any kind surface as [`ApiError`].
#[async_trait]
pub trait SchedulerApi: Send + Sync {
    /// Tasks the scheduler can run, with their parameter definitions.
    async fn list_available_tasks(&self) -> Result<Vec<TaskDefinition>, ApiError>;

    async fn list_jobs(&self) -> Result<Vec<Job>, ApiError>;

    async fn create_job(&self, payload: &JobPayload) -> Result<ApiMessage, ApiError>;

    /// Update an existing job, identified by `payload.job_id`.
    async fn update_job(&self, payload: &JobPayload) -> Result<ApiMessage, ApiError>;

    async fn remove_job(&self, job_id: &str) -> Result<ApiMessage, ApiError>;

    async fn pause_job(&self, job_id: &str) -> Result<ApiMessage, ApiError>;

    async fn resume_job(&self, job_id: &str) -> Result<ApiMessage, ApiError>;

    /// Run the job once, right now, outside its schedule.
    async fn run_job_now(&self, job_id: &str) -> Result<ApiMessage, ApiError>;

    async fn list_logs(&self, query: &LogQuery) -> Result<LogPage, ApiError>;
}
