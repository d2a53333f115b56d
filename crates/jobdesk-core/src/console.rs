//! Console state: the task catalogue, the job list and the draft being edited.
//!
//! Every list is replaced wholesale by the latest successful response. A failed fetch is
//! logged and leaves the previous list in place.

use tracing::{error, info};

use jobdesk_protocols::{
    ApiError, ApiMessage, Job, JobDraft, LogPage, LogQuery, Parameters, SchedulerApi,
    TaskDefinition,
};

use crate::draft::JobDraftState;
use crate::error::DraftError;

/// Scheduler console bound to one [`SchedulerApi`].
pub struct Console<A> {
    api: A,
    available_tasks: Vec<TaskDefinition>,
    jobs: Vec<Job>,
    draft: JobDraftState,
}

impl<A: SchedulerApi> Console<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            available_tasks: Vec::new(),
            jobs: Vec::new(),
            draft: JobDraftState::Idle,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn available_tasks(&self) -> &[TaskDefinition] {
        &self.available_tasks
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// Parameter definitions of `func`; empty when the task is unknown.
    pub fn task_parameters(&self, func: &str) -> Parameters {
        parameters_for(&self.available_tasks, func)
    }

    pub async fn refresh_tasks(&mut self) -> Result<(), ApiError> {
        match self.api.list_available_tasks().await {
            Ok(tasks) => {
                self.available_tasks = tasks;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching available tasks: {}", e);
                Err(e)
            }
        }
    }

    pub async fn refresh_jobs(&mut self) -> Result<(), ApiError> {
        match self.api.list_jobs().await {
            Ok(jobs) => {
                self.jobs = jobs;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching jobs: {}", e);
                Err(e)
            }
        }
    }

    /// Re-fetch both lists. Both fetches are attempted; the first failure is returned.
    pub async fn reload(&mut self) -> Result<(), ApiError> {
        let tasks = self.refresh_tasks().await;
        let jobs = self.refresh_jobs().await;
        tasks.and(jobs)
    }

    pub async fn remove_job(&mut self, job_id: &str) -> Result<ApiMessage, ApiError> {
        let result = self.api.remove_job(job_id).await;
        self.after_action("remove", job_id, result).await
    }

    pub async fn pause_job(&mut self, job_id: &str) -> Result<ApiMessage, ApiError> {
        let result = self.api.pause_job(job_id).await;
        self.after_action("pause", job_id, result).await
    }

    pub async fn resume_job(&mut self, job_id: &str) -> Result<ApiMessage, ApiError> {
        let result = self.api.resume_job(job_id).await;
        self.after_action("resume", job_id, result).await
    }

    pub async fn run_job_now(&mut self, job_id: &str) -> Result<ApiMessage, ApiError> {
        let result = self.api.run_job_now(job_id).await;
        self.after_action("run", job_id, result).await
    }

    pub async fn list_logs(&self, query: &LogQuery) -> Result<LogPage, ApiError> {
        self.api.list_logs(query).await.inspect_err(|e| {
            error!("Error fetching logs: {}", e);
        })
    }

    pub fn draft(&self) -> &JobDraftState {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut JobDraftState {
        &mut self.draft
    }

    /// Open an empty draft for a new job.
    pub fn new_job(&mut self) -> Result<&mut JobDraft, DraftError> {
        self.draft.begin_new()
    }

    /// Open a draft copied from the listed job `job_id`.
    pub fn edit_job(&mut self, job_id: &str) -> Result<&mut JobDraft, DraftError> {
        let job = self
            .jobs
            .iter()
            .find(|job| job.id == job_id)
            .ok_or_else(|| DraftError::JobNotFound(job_id.to_string()))?;
        let parameters = parameters_for(&self.available_tasks, &job.func);
        self.draft.begin_edit(job, &parameters)
    }

    pub fn cancel_draft(&mut self) {
        self.draft.cancel();
    }

    /// Submit the open draft and refresh the job list on success.
    pub async fn submit_draft(&mut self) -> Result<ApiMessage, DraftError> {
        let func = self.draft.draft().ok_or(DraftError::NoDraft)?.func.clone();
        let parameters = self.task_parameters(&func);
        let message = self.draft.submit(&self.api, &parameters).await?;
        // A failed refresh is logged and keeps the old list.
        let _ = self.refresh_jobs().await;
        Ok(message)
    }

    async fn after_action(
        &mut self,
        action: &str,
        job_id: &str,
        result: Result<ApiMessage, ApiError>,
    ) -> Result<ApiMessage, ApiError> {
        match result {
            Ok(message) => {
                info!("Job {} {}: {}", job_id, action, message.message);
                let _ = self.refresh_jobs().await;
                Ok(message)
            }
            Err(e) => {
                error!("Error on {} job {}: {}", action, job_id, e);
                Err(e)
            }
        }
    }
}

fn parameters_for(tasks: &[TaskDefinition], func: &str) -> Parameters {
    tasks
        .iter()
        .find(|task| task.name == func)
        .map(|task| task.parameters.clone())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
