//! Pre-submission draft validation.

use jobdesk_protocols::{JobDraft, TriggerArgs, ValidationError};

/// Draft validator. Rules run in order and the first failure is reported.
pub struct Validator;

impl Validator {
    pub fn validate(draft: &JobDraft) -> Result<(), ValidationError> {
        Self::validate_required(draft)?;

        // Rules follow the selected label; an opaque label has none.
        if draft.trigger_kind().is_none() {
            return Ok(());
        }

        match draft.resolved_trigger_args() {
            TriggerArgs::Interval(interval) => {
                // Zero is a value; only fields never set count as missing.
                if interval.fields().iter().all(|(_, v)| v.is_none()) {
                    return Err(ValidationError::EmptyInterval);
                }
            }
            TriggerArgs::Cron(cron) => {
                for (field, value) in cron.fields() {
                    if value.is_some_and(|v| !v.is_numeric()) {
                        return Err(ValidationError::NonNumericCron { field });
                    }
                }
            }
            TriggerArgs::Date(date) => {
                if date.run_date.as_deref().unwrap_or_default().is_empty() {
                    return Err(ValidationError::MissingRunDate);
                }
            }
            TriggerArgs::Empty => {}
        }

        Ok(())
    }

    fn validate_required(draft: &JobDraft) -> Result<(), ValidationError> {
        let required = [
            ("func", draft.func.as_str()),
            ("job_id", draft.job_id.as_str()),
            ("trigger", draft.trigger()),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ValidationError::MissingRequired { field: *field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
