//! Trigger kinds and their per-kind fields.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Scheduling strategy of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Interval,
    Cron,
    Date,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 3] = [TriggerKind::Interval, TriggerKind::Cron, TriggerKind::Date];

    /// Wire label of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Cron => "cron",
            Self::Date => "date",
        }
    }

    /// Parse a wire label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == label)
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trigger field value.
///
/// Numbers come from defaults and well-formed input; text comes from operator input or
/// descriptor slots that are not plain numbers (e.g. `*/5`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Number),
    Text(String),
}

impl FieldValue {
    pub fn zero() -> Self {
        Self::Number(Number::from(0))
    }

    /// Interpret raw text: integers and finite decimals become numbers, anything else stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Number(Number::from(n));
        }
        if let Some(n) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
            return Self::Number(n);
        }
        Self::Text(raw.to_string())
    }

    /// Whether the value reads as a finite number. Blank text counts as numeric.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(s) => {
                let s = s.trim();
                s.is_empty() || s.parse::<f64>().is_ok_and(f64::is_finite)
            }
        }
    }

    /// Zero or blank, i.e. a value the encoder replaces with its default.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Fields of an `interval` trigger. `None` means the field was never set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<FieldValue>,
}

impl IntervalArgs {
    pub const FIELDS: [&'static str; 5] = ["seconds", "minutes", "hours", "days", "weeks"];

    /// Fields in [`Self::FIELDS`] order.
    pub fn fields(&self) -> [(&'static str, Option<&FieldValue>); 5] {
        [
            ("seconds", self.seconds.as_ref()),
            ("minutes", self.minutes.as_ref()),
            ("hours", self.hours.as_ref()),
            ("days", self.days.as_ref()),
            ("weeks", self.weeks.as_ref()),
        ]
    }

    fn slot(&mut self, name: &str) -> Option<&mut Option<FieldValue>> {
        match name {
            "seconds" => Some(&mut self.seconds),
            "minutes" => Some(&mut self.minutes),
            "hours" => Some(&mut self.hours),
            "days" => Some(&mut self.days),
            "weeks" => Some(&mut self.weeks),
            _ => None,
        }
    }
}

/// Fields of a `cron` trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<FieldValue>,
}

impl CronArgs {
    pub const FIELDS: [&'static str; 7] =
        ["second", "minute", "hour", "day", "month", "day_of_week", "year"];

    /// Fields in [`Self::FIELDS`] order.
    pub fn fields(&self) -> [(&'static str, Option<&FieldValue>); 7] {
        [
            ("second", self.second.as_ref()),
            ("minute", self.minute.as_ref()),
            ("hour", self.hour.as_ref()),
            ("day", self.day.as_ref()),
            ("month", self.month.as_ref()),
            ("day_of_week", self.day_of_week.as_ref()),
            ("year", self.year.as_ref()),
        ]
    }

    fn slot(&mut self, name: &str) -> Option<&mut Option<FieldValue>> {
        match name {
            "second" => Some(&mut self.second),
            "minute" => Some(&mut self.minute),
            "hour" => Some(&mut self.hour),
            "day" => Some(&mut self.day),
            "month" => Some(&mut self.month),
            "day_of_week" => Some(&mut self.day_of_week),
            "year" => Some(&mut self.year),
            _ => None,
        }
    }
}

/// Fields of a `date` trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateArgs {
    /// ISO-like timestamp text, e.g. `2024-08-15T12:00:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_date: Option<String>,
}

/// Trigger fields, one variant per kind.
///
/// `Empty` stands for "no recognised kind" and carries no fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TriggerArgs {
    Interval(IntervalArgs),
    Cron(CronArgs),
    Date(DateArgs),
    #[default]
    Empty,
}

impl TriggerArgs {
    /// Args of `kind` with every field undefined.
    pub fn unset(kind: TriggerKind) -> Self {
        match kind {
            TriggerKind::Interval => Self::Interval(IntervalArgs::default()),
            TriggerKind::Cron => Self::Cron(CronArgs::default()),
            TriggerKind::Date => Self::Date(DateArgs::default()),
        }
    }

    pub fn kind(&self) -> Option<TriggerKind> {
        match self {
            Self::Interval(_) => Some(TriggerKind::Interval),
            Self::Cron(_) => Some(TriggerKind::Cron),
            Self::Date(_) => Some(TriggerKind::Date),
            Self::Empty => None,
        }
    }

    /// Names of the fields this variant recognises.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Interval(_) => &IntervalArgs::FIELDS,
            Self::Cron(_) => &CronArgs::FIELDS,
            Self::Date(_) => &["run_date"],
            Self::Empty => &[],
        }
    }

    /// Set one field of the current variant. Returns `false` if the variant has no such field.
    pub fn set_field(&mut self, name: &str, value: Option<FieldValue>) -> bool {
        let slot = match self {
            Self::Interval(args) => args.slot(name),
            Self::Cron(args) => args.slot(name),
            Self::Date(args) if name == "run_date" => {
                args.run_date = value.map(|v| v.to_string());
                return true;
            }
            Self::Date(_) | Self::Empty => None,
        };
        match slot {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
