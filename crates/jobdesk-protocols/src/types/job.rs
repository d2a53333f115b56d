//! Jobs: the server's view, the editable draft, and the submission payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::trigger::{FieldValue, TriggerArgs, TriggerKind};

/// Keyword-argument map. Insertion order is kept.
pub type Kwargs = Map<String, Value>;

/// A job as reported by the scheduler. Read-only on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub func: String,

    /// Wire descriptor such as `cron[0:0:0:1:1:0:]`.
    pub trigger: String,

    #[serde(default)]
    pub args: Vec<Value>,

    #[serde(default)]
    pub kwargs: Kwargs,

    #[serde(default, alias = "state")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run_time: Option<String>,
}

/// The editable form model of a job.
///
/// `kwargs` holds the operator's value for every task parameter by name; it is split into
/// positional and keyword arguments only at submission time. The trigger label and its
/// args are only ever replaced together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    pub func: String,
    pub job_id: String,
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
    trigger: String,
    trigger_args: TriggerArgs,
}

impl JobDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_func(mut self, func: impl Into<String>) -> Self {
        self.func = func.into();
        self
    }

    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = job_id.into();
        self
    }

    pub fn with_kwarg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.kwargs.insert(name.into(), value);
        self
    }

    /// Builder form of [`JobDraft::replace_trigger`] labelled after the args' own kind.
    pub fn with_trigger_args(mut self, args: TriggerArgs) -> Self {
        let label = args.kind().map(|k| k.as_str()).unwrap_or_default();
        self.replace_trigger(label, args);
        self
    }

    /// Selected trigger label; empty when no trigger is chosen.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn trigger_kind(&self) -> Option<TriggerKind> {
        TriggerKind::from_label(&self.trigger)
    }

    pub fn trigger_args(&self) -> &TriggerArgs {
        &self.trigger_args
    }

    /// Args as the selected kind sees them: `Empty` under a known label means every field
    /// of that kind is undefined.
    pub fn resolved_trigger_args(&self) -> TriggerArgs {
        match (self.trigger_kind(), &self.trigger_args) {
            (Some(kind), TriggerArgs::Empty) => TriggerArgs::unset(kind),
            (_, args) => args.clone(),
        }
    }

    /// Replace label and args in one step. Nothing from the previous args survives.
    ///
    /// Args of one kind under another kind's label (or under an opaque label) are refused
    /// and the draft is left unchanged; `Empty` args fit any label.
    pub fn replace_trigger(&mut self, label: impl Into<String>, args: TriggerArgs) -> bool {
        let label = label.into();
        if args.kind().is_some() && args.kind() != TriggerKind::from_label(&label) {
            return false;
        }
        self.trigger = label;
        self.trigger_args = args;
        true
    }

    /// Edit one field of the current trigger kind. Returns `false` for fields the
    /// current kind does not have.
    pub fn set_trigger_field(&mut self, name: &str, value: Option<FieldValue>) -> bool {
        if let (Some(kind), TriggerArgs::Empty) = (self.trigger_kind(), &self.trigger_args) {
            self.trigger_args = TriggerArgs::unset(kind);
        }
        self.trigger_args.set_field(name, value)
    }
}

/// Create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub func: String,
    pub trigger: String,
    pub job_id: String,
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
    pub trigger_args: Value,
}

/// Acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Render keyword arguments as `key: value, key2: value2`.
pub fn format_job_args(kwargs: &Kwargs) -> String {
    kwargs
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{}: {}", k, s),
            other => format!("{}: {}", k, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
