//! Interactive console for the agent task service.
//!
//! One sequential request/response loop: pick an action from the menu, await
//! the facade call, render the result, return to the menu. A failed action is
//! rendered and never terminates the session.

mod render;

use std::io::{self, Write};

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use agenttask_client::{AgentTaskService, ClientConfig, ClientError};
use agenttask_core::{ArtifactId, StepId, TaskId};

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with rendered tables.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("Set AGENTTASK_BASE_URL and AGENTTASK_API_KEY before starting.");
            std::process::exit(1);
        }
    };

    let service = match AgentTaskService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Failed to build client: {e}");
            std::process::exit(1);
        }
    };

    println!("Agent Tasks Console ({})", config.base_url);

    loop {
        print_menu();
        let choice = match prompt("Select an option") {
            Ok(choice) => choice,
            Err(_) => break,
        };

        let result = match choice.as_str() {
            "1" => create_task(&service).await,
            "2" => list_tasks(&service).await,
            "3" => get_task(&service).await,
            "4" => list_steps(&service).await,
            "5" => execute_step(&service).await,
            "6" => get_step(&service).await,
            "7" => list_artifacts(&service).await,
            "8" => upload_artifact(&service).await,
            "9" => download_artifact(&service).await,
            "0" | "q" => break,
            other => {
                println!("Unrecognized option: {other}");
                Ok(())
            }
        };

        if let Err(e) = result {
            error!(error = %e, "Action failed");
            println!("Error: {e}");
        }

        pause();
    }

    println!("Bye.");
}

fn print_menu() {
    println!();
    println!("What would you like to do?");
    println!("  1) Create a new task");
    println!("  2) List all tasks");
    println!("  3) Get task details");
    println!("  4) List task steps");
    println!("  5) Execute task step");
    println!("  6) Get step details");
    println!("  7) List task artifacts");
    println!("  8) Upload artifact");
    println!("  9) Download artifact");
    println!("  0) Exit");
}

/// Read one trimmed line from stdin after printing a label.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt for a number, falling back to a default on blank or invalid input.
fn prompt_u32(label: &str, default: u32) -> io::Result<u32> {
    let raw = prompt(&format!("{label} [{default}]"))?;
    Ok(raw.parse().unwrap_or(default))
}

fn pause() {
    println!();
    let _ = prompt("Press Enter to continue");
}

async fn create_task(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("Create a new task");
    let input = prompt("Task input text")?;

    debug!(input = %input, "Creating task");
    let task = service.create_task(&input, None).await?;

    println!("Task created:");
    render::print_task(&task);
    Ok(())
}

async fn list_tasks(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("List all tasks");
    let page_size = prompt_u32("Page size", 10)?;
    let page = prompt_u32("Page number", 1)?;

    let tasks = service.list_tasks(Some(page), Some(page_size)).await?;
    render::print_task_page(&tasks);
    Ok(())
}

async fn get_task(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("Get task details");
    let task_id = TaskId::new(prompt("Task ID")?);

    let task = service.get_task(&task_id).await?;
    render::print_task(&task);
    Ok(())
}

async fn list_steps(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("List task steps");
    let task_id = TaskId::new(prompt("Task ID")?);
    let page_size = prompt_u32("Page size", 10)?;
    let page = prompt_u32("Page number", 1)?;

    let steps = service.list_steps(&task_id, Some(page), Some(page_size)).await?;
    render::print_step_page(&steps);
    Ok(())
}

async fn execute_step(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("Execute task step");
    let task_id = TaskId::new(prompt("Task ID")?);
    let input = prompt("Step input")?;

    let step = service.execute_step(&task_id, &input, None).await?;

    println!("Step executed:");
    render::print_step(&step);
    if step.is_terminal() {
        println!("This was the final step of the task.");
    }
    Ok(())
}

async fn get_step(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("Get step details");
    let task_id = TaskId::new(prompt("Task ID")?);
    let step_id = StepId::new(prompt("Step ID")?);

    let step = service.get_step(&task_id, &step_id).await?;
    render::print_step(&step);
    Ok(())
}

async fn list_artifacts(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("List task artifacts");
    let task_id = TaskId::new(prompt("Task ID")?);
    let page_size = prompt_u32("Page size", 10)?;
    let page = prompt_u32("Page number", 1)?;

    let artifacts = service
        .list_artifacts(&task_id, Some(page), Some(page_size))
        .await?;
    render::print_artifact_page(&artifacts);
    Ok(())
}

async fn upload_artifact(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("Upload artifact");
    let task_id = TaskId::new(prompt("Task ID")?);
    let file_path = prompt("Local file path")?;
    let relative_path = prompt("Relative path in workspace")?;

    let artifact = service
        .upload_artifact(&task_id, std::path::Path::new(&file_path), &relative_path)
        .await?;

    println!("Artifact uploaded:");
    render::print_artifact(&artifact);
    Ok(())
}

async fn download_artifact(service: &AgentTaskService) -> Result<(), ClientError> {
    println!("Download artifact");
    let task_id = TaskId::new(prompt("Task ID")?);
    let artifact_id = ArtifactId::new(prompt("Artifact ID")?);
    let output_path = prompt("Download location")?;

    let written = service
        .download_artifact(&task_id, &artifact_id, std::path::Path::new(&output_path))
        .await?;

    println!("Artifact downloaded: {written} bytes written to {output_path}");
    Ok(())
}
