//! In-memory [`SchedulerApi`] double for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use jobdesk_protocols::{
    ApiError, ApiMessage, Job, JobPayload, LogPage, LogQuery, SchedulerApi, TaskDefinition,
};

/// Records every call and answers from canned data.
#[derive(Default)]
pub(crate) struct RecordingApi {
    pub tasks: Mutex<Vec<TaskDefinition>>,
    pub jobs: Mutex<Vec<Job>>,
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<JobPayload>>,
    pub fail: AtomicBool,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(self, tasks: Vec<TaskDefinition>) -> Self {
        *self.tasks.lock().unwrap() = tasks;
        self
    }

    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        *self.jobs.lock().unwrap() = jobs;
        self
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<JobPayload> {
        self.payloads.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn ack(&self, call: String) -> Result<ApiMessage, ApiError> {
        self.record(call.clone())?;
        Ok(ApiMessage { message: call })
    }
}

#[async_trait]
impl SchedulerApi for RecordingApi {
    async fn list_available_tasks(&self) -> Result<Vec<TaskDefinition>, ApiError> {
        self.record("list_available_tasks".to_string())?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.record("list_jobs".to_string())?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<ApiMessage, ApiError> {
        self.record(format!("create_job {}", payload.job_id))?;
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(ApiMessage { message: "created".to_string() })
    }

    async fn update_job(&self, payload: &JobPayload) -> Result<ApiMessage, ApiError> {
        self.record(format!("update_job {}", payload.job_id))?;
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(ApiMessage { message: "updated".to_string() })
    }

    async fn remove_job(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.ack(format!("remove_job {}", job_id))
    }

    async fn pause_job(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.ack(format!("pause_job {}", job_id))
    }

    async fn resume_job(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.ack(format!("resume_job {}", job_id))
    }

    async fn run_job_now(&self, job_id: &str) -> Result<ApiMessage, ApiError> {
        self.ack(format!("run_job_now {}", job_id))
    }

    async fn list_logs(&self, query: &LogQuery) -> Result<LogPage, ApiError> {
        self.record(format!("list_logs page={}", query.page))?;
        Ok(LogPage::default())
    }
}
