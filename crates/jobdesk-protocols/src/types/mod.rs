//! Data model shared across the JobDesk workspace.

mod job;
mod log;
mod task;
mod trigger;

pub use job::*;
pub use log::*;
pub use task::*;
pub use trigger::*;
