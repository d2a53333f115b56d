//! `tasks` subcommand.

use jobdesk_client::HttpSchedulerClient;
use jobdesk_core::Console;

use crate::cli::OutputFormat;

/// List tasks, or show one task's parameters.
pub(crate) async fn handle_tasks_command(
    console: &mut Console<HttpSchedulerClient>,
    name: Option<String>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    console.refresh_tasks().await?;

    match name {
        None => task_list(console, format),
        Some(name) => task_info(console, &name, format),
    }
}

fn task_list(
    console: &Console<HttpSchedulerClient>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = console.available_tasks();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks available.");
        return Ok(());
    }

    println!("{:<24} {:<30} {}", "NAME", "PARAMETERS", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for task in tasks {
        let params = task.parameters.keys().cloned().collect::<Vec<_>>().join(", ");
        println!("{:<24} {:<30} {}", task.name, params, task.summary());
    }

    Ok(())
}

fn task_info(
    console: &Console<HttpSchedulerClient>,
    name: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(task) = console.available_tasks().iter().find(|t| t.name == name) else {
        return Err(format!("Unknown task: {}", name).into());
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(task)?);
        return Ok(());
    }

    println!("Task: {}", task.name);
    println!("{}", "=".repeat(50));
    println!("{}", task.summary());

    if !task.parameters.is_empty() {
        println!("\nParameters:");
        for (name, spec) in &task.parameters {
            let passing = if spec.is_positional() { "positional" } else { "keyword" };
            let default = spec
                .default
                .as_ref()
                .map(|d| format!(" [default: {}]", d))
                .unwrap_or_default();
            println!("  - {}: {} ({}){}", name, spec.param_type, passing, default);
        }
    }

    Ok(())
}
