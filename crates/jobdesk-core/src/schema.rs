//! Default trigger fields per kind.

use jobdesk_protocols::{
    CronArgs, DateArgs, FieldValue, IntervalArgs, JobDraft, TriggerArgs, TriggerKind,
};

/// Source of zero-valued trigger args for each kind.
pub struct TriggerSchema;

impl TriggerSchema {
    /// Defaults for a trigger label. Unknown labels get [`TriggerArgs::Empty`].
    pub fn default_args(label: &str) -> TriggerArgs {
        match TriggerKind::from_label(label) {
            Some(kind) => Self::defaults_for(kind),
            None => TriggerArgs::Empty,
        }
    }

    /// Every field of the kind set to zero; `year` stays unset and `run_date` is blank.
    pub fn defaults_for(kind: TriggerKind) -> TriggerArgs {
        let zero = || Some(FieldValue::zero());
        match kind {
            TriggerKind::Interval => TriggerArgs::Interval(IntervalArgs {
                seconds: zero(),
                minutes: zero(),
                hours: zero(),
                days: zero(),
                weeks: zero(),
            }),
            TriggerKind::Cron => TriggerArgs::Cron(CronArgs {
                second: zero(),
                minute: zero(),
                hour: zero(),
                day: zero(),
                month: zero(),
                day_of_week: zero(),
                year: None,
            }),
            TriggerKind::Date => TriggerArgs::Date(DateArgs {
                run_date: Some(String::new()),
            }),
        }
    }
}

/// Switch the draft to another trigger label, replacing its args with that kind's defaults.
pub fn on_trigger_kind_changed(mut draft: JobDraft, label: &str) -> JobDraft {
    draft.replace_trigger(label, TriggerSchema::default_args(label));
    draft
}
