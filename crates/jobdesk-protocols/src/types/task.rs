//! Task definitions advertised by the scheduler.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Parameter type marking a positional argument.
pub const LIST_PARAM_TYPE: &str = "list";

/// Ordered parameter definitions of a task. Order defines positional-argument order.
pub type Parameters = IndexMap<String, ParamSpec>;

/// Definition of one task parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    #[serde(default)]
    pub name: String,

    /// Reported type: `string`, `int`, `float`, `bool`, `list`, `dict`, `any`, or a server
    /// specific marker for unknown annotations.
    #[serde(rename = "type", default)]
    pub param_type: String,

    /// Default value rendered by the server; empty when the parameter has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            default: None,
        }
    }

    /// Whether the parameter is passed by position rather than by name.
    pub fn is_positional(&self) -> bool {
        self.param_type == LIST_PARAM_TYPE
    }
}

/// A task function the scheduler can run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub parameters: Parameters,
}

impl TaskDefinition {
    /// Description with `:param name:` markers removed.
    pub fn summary(&self) -> String {
        static PARAM_MARKER: OnceLock<Regex> = OnceLock::new();
        let re = PARAM_MARKER.get_or_init(|| {
            Regex::new(r":\s*param\s*\w+\s*:").expect("param marker pattern is valid")
        });
        re.replace_all(&self.description, "").trim().to_string()
    }
}
