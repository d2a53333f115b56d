//! # JobDesk Core
//!
//! Client-side job editing engine for the JobDesk console.
//!
//! ## Components
//!
//! - [`TriggerSchema`] - Default trigger fields per kind
//! - [`TriggerCodec`] - Wire descriptor decoding and REST trigger-args encoding
//! - [`ParameterMarshaler`] - Splits task values into positional/keyword arguments and back
//! - [`Validator`] - Pre-submission checks on a draft
//! - [`JobDraftState`] - Draft lifecycle: idle, composing a new job, editing an existing one
//! - [`Console`] - Task and job lists plus job actions against a [`SchedulerApi`]
//!
//! [`SchedulerApi`]: jobdesk_protocols::SchedulerApi

pub mod codec;
pub mod console;
pub mod draft;
pub mod error;
pub mod marshal;
pub mod schema;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use codec::{DecodedTrigger, TriggerCodec};
pub use console::Console;
pub use draft::{build_payload, draft_from_job, JobDraftState};
pub use error::DraftError;
pub use marshal::{ParameterMarshaler, SplitArgs};
pub use schema::{on_trigger_kind_changed, TriggerSchema};
pub use validator::Validator;
