//! CLI definitions for JobDesk.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// JobDesk CLI.
#[derive(Parser)]
#[command(name = "jobdesk")]
#[command(about = "Compose, edit and manage jobs on a remote scheduler")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.jobdesk/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Scheduler base URL, e.g. http://127.0.0.1:8000
    #[arg(long, env = "JOBDESK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Format named in the config file; unknown names fall back to table.
    pub fn from_config(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List tasks the scheduler can run
    Tasks {
        /// Show the parameters of one task
        name: Option<String>,
    },

    /// List scheduled jobs
    Jobs,

    /// Add a new job
    Add(AddArgs),

    /// Edit an existing job
    Edit(EditArgs),

    /// Remove a job
    Remove { job_id: String },

    /// Pause a job
    Pause { job_id: String },

    /// Resume a paused job
    Resume { job_id: String },

    /// Run a job once, now
    Run { job_id: String },

    /// Show execution logs
    Logs(LogsArgs),
}

#[derive(Args)]
pub(crate) struct AddArgs {
    /// Task function to run
    #[arg(long)]
    pub func: String,

    /// Unique job id
    #[arg(long)]
    pub job_id: String,

    /// Trigger kind: interval, cron or date
    #[arg(long)]
    pub trigger: String,

    /// Trigger field, e.g. `--set seconds=30` or `--set run_date=2024-08-15T12:00:00`
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,

    /// Task parameter value; parsed as JSON when possible, e.g. `--param hosts='["db1"]'`
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub params: Vec<(String, String)>,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    /// Job to edit
    pub job_id: String,

    /// Switch to another task function
    #[arg(long)]
    pub func: Option<String>,

    /// Switch trigger kind; resets all trigger fields to that kind's defaults
    #[arg(long)]
    pub trigger: Option<String>,

    /// Trigger field; an empty value unsets it
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,

    /// Task parameter value; parsed as JSON when possible
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub params: Vec<(String, String)>,
}

#[derive(Args)]
pub(crate) struct LogsArgs {
    /// Filter by job id (substring match)
    #[arg(long)]
    pub job_id: Option<String>,

    /// Filter by outcome
    #[arg(long, value_enum)]
    pub status: Option<RunStatus>,

    /// Only runs at or after this time, e.g. 2024-08-01T00:00:00
    #[arg(long)]
    pub start_time: Option<NaiveDateTime>,

    /// Only runs at or before this time
    #[arg(long)]
    pub end_time: Option<NaiveDateTime>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RunStatus {
    Success,
    Failed,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}
