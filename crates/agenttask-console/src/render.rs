//! Console rendering for tasks, steps and artifacts.

use agenttask_core::{Artifact, Page, Step, Task};
use chrono::{DateTime, Utc};

/// Format an optional server timestamp, showing `-` when unknown.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn page_footer<T>(page: &Page<T>, noun: &str) {
    println!(
        "Page {} of {} (Total: {} {})",
        page.current_page, page.total_pages, page.total_items, noun
    );
}

/// Print a task detail block with its artifacts.
pub fn print_task(task: &Task) {
    println!("  Task ID:    {}", task.id);
    println!("  Input:      {}", task.input);
    println!("  Status:     {}", task.status);
    println!("  Created:    {}", format_timestamp(task.created_at));
    println!("  Artifacts:  {}", task.artifacts.len());

    if !task.artifacts.is_empty() {
        println!();
        artifact_rows(&task.artifacts);
    }
}

/// Print a step detail block with its artifacts.
pub fn print_step(step: &Step) {
    println!("  Step ID:    {}", step.id);
    println!("  Task ID:    {}", step.task_id);
    println!("  Status:     {}", step.status);
    println!("  Is Last:    {}", yes_no(step.is_last));
    println!("  Created:    {}", format_timestamp(step.created_at));
    println!("  Executed:   {}", format_timestamp(step.executed_at));
    println!("  Input:      {}", step.input);
    println!("  Output:     {}", step.output.as_deref().unwrap_or("-"));

    if let Some(extra) = &step.additional_output {
        println!("  Additional: {}", extra);
    }

    if !step.artifacts.is_empty() {
        println!();
        artifact_rows(&step.artifacts);
    }
}

/// Print an artifact detail block.
pub fn print_artifact(artifact: &Artifact) {
    println!("  Artifact ID: {}", artifact.id);
    println!("  Filename:    {}", artifact.file_name);
    println!("  Path:        {}", artifact.relative_path);
    println!("  Size:        {} bytes", artifact.size);
    println!("  By agent:    {}", yes_no(artifact.agent_created));
    println!("  Created:     {}", format_timestamp(artifact.created_at));
}

/// Print a page of tasks as a table.
pub fn print_task_page(page: &Page<Task>) {
    println!("{:<36}  {:<24}  {:<12}  {}", "ID", "INPUT", "STATUS", "CREATED");
    println!("{}", "-".repeat(90));

    for task in &page.items {
        println!(
            "{:<36}  {:<24}  {:<12}  {}",
            task.id,
            truncate(&task.input, 24),
            task.status,
            format_timestamp(task.created_at)
        );
    }

    page_footer(page, "tasks");
}

/// Print a page of steps as a table.
pub fn print_step_page(page: &Page<Step>) {
    println!("{:<36}  {:<12}  {:<8}  {}", "ID", "STATUS", "LAST", "CREATED");
    println!("{}", "-".repeat(80));

    for step in &page.items {
        println!(
            "{:<36}  {:<12}  {:<8}  {}",
            step.id,
            step.status.to_string(),
            yes_no(step.is_last),
            format_timestamp(step.created_at)
        );
    }

    page_footer(page, "steps");
}

/// Print a page of artifacts as a table.
pub fn print_artifact_page(page: &Page<Artifact>) {
    artifact_rows(&page.items);
    page_footer(page, "artifacts");
}

fn artifact_rows(artifacts: &[Artifact]) {
    println!("{:<36}  {:<24}  {:<24}  {}", "ID", "FILENAME", "PATH", "AGENT");
    println!("{}", "-".repeat(96));

    for artifact in artifacts {
        println!(
            "{:<36}  {:<24}  {:<24}  {}",
            artifact.id,
            truncate(&artifact.file_name, 24),
            truncate(&artifact.relative_path, 24),
            yes_no(artifact.agent_created)
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
