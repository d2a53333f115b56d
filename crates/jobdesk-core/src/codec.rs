//! Trigger descriptor decoding and REST trigger-args encoding.
//!
//! The scheduler reports a job's trigger as `<kind>[<v0>:<v1>:...]` and expects the
//! create/update body to carry a full field object. The two formats are handled
//! independently; `encode(decode(x))` is not expected to reproduce `x`.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use jobdesk_protocols::{
    CronArgs, DateArgs, FieldValue, IntervalArgs, TriggerArgs, TriggerKind,
};

/// Result of decoding a wire descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTrigger {
    /// Kind word from the descriptor, or the whole input when it did not match.
    pub kind: String,
    pub trigger_args: TriggerArgs,
}

/// Converts between trigger representations.
pub struct TriggerCodec;

impl TriggerCodec {
    /// Decode a descriptor such as `cron[0:0:0:1:1:0:]`.
    ///
    /// Never fails: input without a `kind[...]` part is passed through as an opaque label
    /// with empty args.
    pub fn decode(wire: &str) -> DecodedTrigger {
        let Some(caps) = descriptor_pattern().captures(wire) else {
            debug!("Trigger descriptor without kind[...] shape: {}", wire);
            return DecodedTrigger {
                kind: wire.to_string(),
                trigger_args: TriggerArgs::Empty,
            };
        };

        let kind = caps[1].to_string();
        let slots: Vec<&str> = caps[2].split(':').collect();
        let trigger_args = match TriggerKind::from_label(&kind) {
            Some(kind) => decode_slots(kind, &slots),
            None => {
                debug!("Unrecognised trigger kind in descriptor: {}", kind);
                TriggerArgs::Empty
            }
        };

        DecodedTrigger { kind, trigger_args }
    }

    /// Encode args as the `trigger_args` object of a create/update body.
    ///
    /// Every field of the kind is emitted; unset, null and blank fields become `0`
    /// (`""` for `run_date`).
    pub fn encode(args: &TriggerArgs) -> Value {
        let mut out = Map::new();
        match args {
            TriggerArgs::Interval(interval) => {
                for (name, value) in interval.fields() {
                    out.insert(name.to_string(), numeric_or_zero(value));
                }
            }
            TriggerArgs::Cron(cron) => {
                for (name, value) in cron.fields() {
                    out.insert(name.to_string(), numeric_or_zero(value));
                }
            }
            TriggerArgs::Date(date) => {
                let run_date = date.run_date.clone().unwrap_or_default();
                out.insert("run_date".to_string(), Value::String(run_date));
            }
            TriggerArgs::Empty => {}
        }
        Value::Object(out)
    }
}

fn descriptor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9_]+)\[(.*)\]").expect("descriptor pattern is valid")
    })
}

/// Map positional slots onto named fields.
///
/// Interval slots are read as hours, minutes, seconds: the order the scheduler prints
/// them in, which differs from the field order used by [`TriggerCodec::encode`].
fn decode_slots(kind: TriggerKind, slots: &[&str]) -> TriggerArgs {
    let slot = |i: usize| slots.get(i).copied().filter(|s| !s.is_empty());
    let number = |i: usize| Some(slot(i).map_or_else(FieldValue::zero, FieldValue::parse));

    match kind {
        TriggerKind::Interval => TriggerArgs::Interval(IntervalArgs {
            hours: number(0),
            minutes: number(1),
            seconds: number(2),
            days: None,
            weeks: None,
        }),
        TriggerKind::Cron => TriggerArgs::Cron(CronArgs {
            second: number(0),
            minute: number(1),
            hour: number(2),
            day: number(3),
            month: number(4),
            day_of_week: number(5),
            year: slot(6).map(FieldValue::parse),
        }),
        TriggerKind::Date => TriggerArgs::Date(DateArgs {
            run_date: Some(slot(0).unwrap_or_default().to_string()),
        }),
    }
}

fn numeric_or_zero(value: Option<&FieldValue>) -> Value {
    match value {
        Some(v) if !v.is_falsy() => v.to_json(),
        _ => Value::from(0),
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
