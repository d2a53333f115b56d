//! Draft lifecycle errors.

use thiserror::Error;

use jobdesk_protocols::{ApiError, ValidationError};

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission failed: {0}")]
    Api(#[from] ApiError),

    #[error("No draft in progress")]
    NoDraft,

    #[error("A draft is already in progress")]
    Busy,

    #[error("Unknown trigger field '{field}' for trigger '{trigger}'")]
    UnknownField { field: String, trigger: String },

    #[error("Job not found: {0}")]
    JobNotFound(String),
}
