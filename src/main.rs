//! JobDesk - operator console for a remote job scheduler
//!
//! Main entry point for the JobDesk CLI.

mod cli;
mod cmd_jobs;
mod cmd_tasks;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobdesk_client::HttpSchedulerClient;
use jobdesk_config::{ConfigError, ConfigLoader, ConfigValidator, LoggingConfig};
use jobdesk_core::Console;

use cli::{Cli, Commands, OutputFormat};
use cmd_jobs::{job_action, job_add, job_edit, job_list, job_logs, JobAction};
use cmd_tasks::handle_tasks_command;

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;

    let file_layer = if logging.file {
        let log_dir = logging.log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("jobdesk")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keeps the writer flushing until exit
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        // Console layer on stderr; stdout carries command output
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
    }

    init_tracing(&config.logging)?;

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if let Some(error) = validation.errors.first() {
        return Err(ConfigError::InvalidValue {
            field: error.path.clone(),
            message: error.message.clone(),
        }
        .into());
    }

    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    debug!("Using scheduler at {}", config.server.base_url);
    let client = HttpSchedulerClient::new(&config.server.base_url)?;
    let mut console = Console::new(client);

    match cli.command {
        Commands::Tasks { name } => handle_tasks_command(&mut console, name, format).await,
        Commands::Jobs => job_list(&mut console, format).await,
        Commands::Add(args) => job_add(&mut console, args).await,
        Commands::Edit(args) => job_edit(&mut console, args).await,
        Commands::Remove { job_id } => job_action(&mut console, JobAction::Remove, &job_id).await,
        Commands::Pause { job_id } => job_action(&mut console, JobAction::Pause, &job_id).await,
        Commands::Resume { job_id } => job_action(&mut console, JobAction::Resume, &job_id).await,
        Commands::Run { job_id } => job_action(&mut console, JobAction::Run, &job_id).await,
        Commands::Logs(args) => job_logs(&console, args, format).await,
    }
}
