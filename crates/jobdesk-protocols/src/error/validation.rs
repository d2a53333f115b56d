//! Draft validation errors.

use thiserror::Error;

/// A draft rejected before submission.
///
/// The display text is the message shown to the operator; [`ValidationError::field`]
/// names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing function/job id/trigger ({field} is empty)")]
    MissingRequired { field: &'static str },

    #[error("interval trigger needs at least one of seconds, minutes, hours, days, weeks")]
    EmptyInterval,

    #[error("cron field '{field}' must be numeric")]
    NonNumericCron { field: &'static str },

    #[error("date trigger needs a run_date")]
    MissingRunDate,
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequired { field } | Self::NonNumericCron { field } => field,
            Self::EmptyInterval => "trigger_args",
            Self::MissingRunDate => "run_date",
        }
    }
}
