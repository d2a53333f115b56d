//! # JobDesk Protocols
//!
//! Shared definitions for the JobDesk workspace.
//! Contains the data model and the scheduler API trait - no HTTP and no editing logic.
//!
//! ## Contents
//!
//! - [`JobDraft`] - The editable form model of a job
//! - [`TriggerArgs`] - Trigger fields, one variant per [`TriggerKind`]
//! - [`TaskDefinition`] - A task the remote scheduler can run, with ordered parameters
//! - [`Job`] - A job as reported by the remote scheduler
//! - [`SchedulerApi`] - Trait implemented by scheduler service clients

pub mod api;
pub mod error;
pub mod types;

pub use api::SchedulerApi;
pub use error::{ApiError, ValidationError};
pub use types::*;
