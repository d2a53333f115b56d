//! Draft lifecycle.
//!
//! ```text
//! Idle --begin_new--> Composing --submit ok--> Idle
//! Idle --begin_edit-> Editing   --submit ok--> Idle
//! ```
//!
//! A failed submission leaves the draft exactly as it was.

use tracing::{error, info};

use jobdesk_protocols::{
    ApiMessage, Job, JobDraft, JobPayload, Parameters, SchedulerApi, ValidationError,
};

use crate::codec::TriggerCodec;
use crate::error::DraftError;
use crate::marshal::ParameterMarshaler;
use crate::schema::on_trigger_kind_changed;
use crate::validator::Validator;

/// Edit buffer state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JobDraftState {
    /// No draft in progress.
    #[default]
    Idle,
    /// Building a new job.
    Composing(JobDraft),
    /// Changing an existing job; submits as an update.
    Editing(JobDraft),
}

impl JobDraftState {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn draft(&self) -> Option<&JobDraft> {
        match self {
            Self::Idle => None,
            Self::Composing(draft) | Self::Editing(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut JobDraft> {
        match self {
            Self::Idle => None,
            Self::Composing(draft) | Self::Editing(draft) => Some(draft),
        }
    }

    /// Start composing a new, empty job.
    pub fn begin_new(&mut self) -> Result<&mut JobDraft, DraftError> {
        self.ensure_idle()?;
        *self = Self::Composing(JobDraft::new());
        self.draft_mut().ok_or(DraftError::NoDraft)
    }

    /// Start editing a copy of `job`. `parameters` are the definitions of the job's task.
    pub fn begin_edit(&mut self, job: &Job, parameters: &Parameters) -> Result<&mut JobDraft, DraftError> {
        self.ensure_idle()?;
        *self = Self::Editing(draft_from_job(job, parameters));
        self.draft_mut().ok_or(DraftError::NoDraft)
    }

    /// Switch the draft's trigger kind, resetting its trigger args to that kind's defaults.
    pub fn change_trigger_kind(&mut self, label: &str) -> Result<(), DraftError> {
        let draft = self.draft_mut().ok_or(DraftError::NoDraft)?;
        *draft = on_trigger_kind_changed(std::mem::take(draft), label);
        Ok(())
    }

    /// Discard the draft without submitting.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Validate, marshal and send the draft: create when composing, update when editing.
    ///
    /// On success the draft is consumed and the state returns to idle. On any failure the
    /// draft is kept unchanged so it can be corrected and resubmitted.
    pub async fn submit<A>(&mut self, api: &A, parameters: &Parameters) -> Result<ApiMessage, DraftError>
    where
        A: SchedulerApi + ?Sized,
    {
        let (payload, is_update) = match self {
            Self::Idle => return Err(DraftError::NoDraft),
            Self::Composing(draft) => (build_payload(draft, parameters)?, false),
            Self::Editing(draft) => (build_payload(draft, parameters)?, true),
        };

        let result = if is_update {
            api.update_job(&payload).await
        } else {
            api.create_job(&payload).await
        };

        match result {
            Ok(message) => {
                info!(
                    "Job {} {}: {}",
                    payload.job_id,
                    if is_update { "updated" } else { "created" },
                    message.message
                );
                *self = Self::Idle;
                Ok(message)
            }
            Err(e) => {
                error!(
                    "Error {} job {}: {}",
                    if is_update { "updating" } else { "creating" },
                    payload.job_id,
                    e
                );
                Err(e.into())
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), DraftError> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(DraftError::Busy)
        }
    }
}

/// Build an edit draft from a stored job.
///
/// The job is copied, its trigger descriptor decoded and its positional arguments folded
/// back into the keyed value map using the task's parameter order.
pub fn draft_from_job(job: &Job, parameters: &Parameters) -> JobDraft {
    let decoded = TriggerCodec::decode(&job.trigger);
    let mut draft = JobDraft::new()
        .with_func(job.func.clone())
        .with_job_id(job.id.clone());
    draft.args = job.args.clone();
    draft.kwargs = ParameterMarshaler::rejoin(parameters, &job.args, &job.kwargs);
    draft.replace_trigger(decoded.kind, decoded.trigger_args);
    draft
}

/// Validate a draft and turn it into a create/update body.
pub fn build_payload(draft: &JobDraft, parameters: &Parameters) -> Result<JobPayload, ValidationError> {
    Validator::validate(draft)?;

    let (args, kwargs) = ParameterMarshaler::split(parameters, &draft.kwargs).into_wire();
    Ok(JobPayload {
        func: draft.func.clone(),
        trigger: draft.trigger().to_string(),
        job_id: draft.job_id.clone(),
        args,
        kwargs,
        trigger_args: TriggerCodec::encode(&draft.resolved_trigger_args()),
    })
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
