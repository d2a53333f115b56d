//! Job subcommand handlers: listing, composing, editing, actions and logs.

use serde_json::Value;
use tracing::warn;

use jobdesk_client::HttpSchedulerClient;
use jobdesk_core::{Console, DraftError, JobDraftState};
use jobdesk_protocols::{format_job_args, FieldValue, JobDraft, LogQuery};

use crate::cli::{AddArgs, EditArgs, LogsArgs, OutputFormat, RunStatus};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Job actions that need only an id.
pub(crate) enum JobAction {
    Remove,
    Pause,
    Resume,
    Run,
}

/// List scheduled jobs.
pub(crate) async fn job_list(console: &mut Console<HttpSchedulerClient>, format: OutputFormat) -> CmdResult {
    console.refresh_jobs().await?;
    let jobs = console.jobs();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(jobs)?);
        return Ok(());
    }

    if jobs.is_empty() {
        println!("No jobs scheduled.");
        return Ok(());
    }

    println!(
        "{:<20} {:<20} {:<26} {:<10} {:<26} {}",
        "ID", "FUNC", "TRIGGER", "STATUS", "NEXT RUN", "ARGS"
    );
    println!("{}", "-".repeat(120));
    for job in jobs {
        println!(
            "{:<20} {:<20} {:<26} {:<10} {:<26} {}",
            job.id,
            job.func,
            job.trigger,
            job.status,
            job.next_run_time.as_deref().unwrap_or("-"),
            format_job_args(&job.kwargs)
        );
    }

    Ok(())
}

/// Compose and submit a new job.
pub(crate) async fn job_add(console: &mut Console<HttpSchedulerClient>, args: AddArgs) -> CmdResult {
    console.refresh_tasks().await?;
    if !console.available_tasks().iter().any(|t| t.name == args.func) {
        warn!("Task {} is not offered by the scheduler", args.func);
    }

    let draft = console.new_job()?;
    draft.func = args.func;
    draft.job_id = args.job_id;
    apply_params(draft, &args.params);

    let state = console.draft_mut();
    state.change_trigger_kind(&args.trigger)?;
    apply_trigger_fields(state, &args.fields)?;

    let message = console.submit_draft().await?;
    println!("{}", message.message);
    Ok(())
}

/// Load a job into a draft, apply the requested changes and submit it as an update.
pub(crate) async fn job_edit(console: &mut Console<HttpSchedulerClient>, args: EditArgs) -> CmdResult {
    console.reload().await?;

    let draft = console.edit_job(&args.job_id)?;
    if let Some(func) = args.func {
        draft.func = func;
    }
    apply_params(draft, &args.params);

    let state = console.draft_mut();
    if let Some(trigger) = &args.trigger {
        state.change_trigger_kind(trigger)?;
    }
    apply_trigger_fields(state, &args.fields)?;

    let message = console.submit_draft().await?;
    println!("{}", message.message);
    Ok(())
}

pub(crate) async fn job_action(
    console: &mut Console<HttpSchedulerClient>,
    action: JobAction,
    job_id: &str,
) -> CmdResult {
    let message = match action {
        JobAction::Remove => console.remove_job(job_id).await?,
        JobAction::Pause => console.pause_job(job_id).await?,
        JobAction::Resume => console.resume_job(job_id).await?,
        JobAction::Run => console.run_job_now(job_id).await?,
    };
    println!("{}", message.message);
    Ok(())
}

/// Show one page of execution logs.
pub(crate) async fn job_logs(
    console: &Console<HttpSchedulerClient>,
    args: LogsArgs,
    format: OutputFormat,
) -> CmdResult {
    let query = LogQuery {
        job_id: args.job_id,
        status: args.status.map(|s| s == RunStatus::Success),
        start_time: args.start_time,
        end_time: args.end_time,
        page: args.page,
        limit: args.limit,
    };
    let page = console.list_logs(&query).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.logs.is_empty() {
        println!("No logs found.");
        return Ok(());
    }

    println!(
        "{:<8} {:<20} {:<8} {:<20} {:>10} {}",
        "ID", "JOB", "STATUS", "TIMESTAMP", "DURATION", "MESSAGE"
    );
    println!("{}", "-".repeat(100));
    for log in &page.logs {
        let duration = log
            .duration
            .map(|d| format!("{:.0}ms", d))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:<20} {:<8} {:<20} {:>10} {}",
            log.id,
            log.job_id,
            if log.status { "ok" } else { "failed" },
            log.timestamp.format("%Y-%m-%d %H:%M:%S"),
            duration,
            log.message
        );
    }
    let pages = page.count.div_ceil(u64::from(query.limit));
    println!("\nPage {} of {} ({} records)", query.page, pages, page.count);

    Ok(())
}

/// Store `--param` values on the draft. Values are JSON when they parse as JSON.
fn apply_params(draft: &mut JobDraft, params: &[(String, String)]) {
    for (name, raw) in params {
        draft.kwargs.insert(name.clone(), parse_param_value(raw));
    }
}

fn parse_param_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Apply `--set` trigger fields to the open draft. An empty value unsets the field.
fn apply_trigger_fields(state: &mut JobDraftState, fields: &[(String, String)]) -> Result<(), DraftError> {
    let draft = state.draft_mut().ok_or(DraftError::NoDraft)?;
    for (name, raw) in fields {
        let value = (!raw.is_empty()).then(|| trigger_field_value(name, raw));
        if !draft.set_trigger_field(name, value) {
            return Err(DraftError::UnknownField {
                field: name.clone(),
                trigger: draft.trigger().to_string(),
            });
        }
    }
    Ok(())
}

/// `run_date` is sent verbatim; other fields read as numbers when they parse.
fn trigger_field_value(name: &str, raw: &str) -> FieldValue {
    if name == "run_date" {
        FieldValue::Text(raw.to_string())
    } else {
        FieldValue::parse(raw)
    }
}
