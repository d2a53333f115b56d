//! Error types for the JobDesk protocol layer.

mod api;
mod validation;

pub use api::*;
pub use validation::*;
