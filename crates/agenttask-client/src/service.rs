//! The agent task service facade.
//!
//! Single point of contact for callers: wraps the HTTP transport and the
//! mapper behind one method per remote operation. The facade is stateless
//! between calls; the only held state is the transport's connection/auth
//! configuration.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use agenttask_core::{Artifact, ArtifactId, Page, Step, StepId, Task, TaskId};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::mapper;
use crate::mime;
use crate::wire::{ArtifactListWire, ArtifactWire, StepListWire, StepWire, TaskListWire, TaskRequestBody, TaskWire};

/// Base path of the agent protocol task endpoints.
const TASKS_PATH: &str = "/ap/v1/agent/tasks";

/// Typed facade over the agent task REST API.
pub struct AgentTaskService {
    http: HttpClient,
}

impl AgentTaskService {
    /// Create a facade over an already-configured transport.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build the transport from the given config and wrap it.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(HttpClient::new(config)?))
    }

    /// Create a new task from the given input text.
    pub async fn create_task(
        &self,
        input: &str,
        additional_input: Option<Value>,
    ) -> Result<Task, ClientError> {
        let body = TaskRequestBody {
            input: input.to_string(),
            additional_input,
        };

        let wire: TaskWire = self.http.post_json(TASKS_PATH, &body).await?;
        Ok(mapper::task_from_wire(wire))
    }

    /// List tasks. Omitted page/page_size defer to server defaults; a page
    /// past the end of the result set comes back empty, not as an error.
    pub async fn list_tasks(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<Task>, ClientError> {
        let path = paged_path(TASKS_PATH.to_string(), page, page_size);
        let wire: TaskListWire = self.http.get_json(&path).await?;
        Ok(mapper::page_from_wire(
            wire.tasks,
            wire.pagination,
            mapper::task_from_wire,
        ))
    }

    /// Get a single task by id.
    pub async fn get_task(&self, task_id: &TaskId) -> Result<Task, ClientError> {
        let wire: TaskWire = self
            .http
            .get_json(&format!("{TASKS_PATH}/{task_id}"))
            .await?;
        Ok(mapper::task_from_wire(wire))
    }

    /// List the steps of a task.
    pub async fn list_steps(
        &self,
        task_id: &TaskId,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<Step>, ClientError> {
        let path = paged_path(format!("{TASKS_PATH}/{task_id}/steps"), page, page_size);
        let wire: StepListWire = self.http.get_json(&path).await?;
        Ok(mapper::page_from_wire(
            wire.steps,
            wire.pagination,
            mapper::step_from_wire,
        ))
    }

    /// Execute the next step of a task.
    ///
    /// Fails with [`ClientError::InvalidState`] when the server rejects the
    /// call because the task already produced its terminal step.
    pub async fn execute_step(
        &self,
        task_id: &TaskId,
        input: &str,
        additional_input: Option<Value>,
    ) -> Result<Step, ClientError> {
        let body = TaskRequestBody {
            input: input.to_string(),
            additional_input,
        };

        let wire: StepWire = self
            .http
            .post_json(&format!("{TASKS_PATH}/{task_id}/steps"), &body)
            .await?;
        Ok(mapper::step_from_wire(wire))
    }

    /// Get a single step of a task by id.
    pub async fn get_step(&self, task_id: &TaskId, step_id: &StepId) -> Result<Step, ClientError> {
        let wire: StepWire = self
            .http
            .get_json(&format!("{TASKS_PATH}/{task_id}/steps/{step_id}"))
            .await?;
        Ok(mapper::step_from_wire(wire))
    }

    /// List the artifacts of a task.
    pub async fn list_artifacts(
        &self,
        task_id: &TaskId,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<Artifact>, ClientError> {
        let path = paged_path(format!("{TASKS_PATH}/{task_id}/artifacts"), page, page_size);
        let wire: ArtifactListWire = self.http.get_json(&path).await?;
        Ok(mapper::page_from_wire(
            wire.artifacts,
            wire.pagination,
            mapper::artifact_from_wire,
        ))
    }

    /// Upload a local file as a task artifact.
    ///
    /// The file is read fully into memory before the call; artifacts in this
    /// protocol are small enough that streaming the upload is not worth the
    /// complexity. The MIME type comes from the static extension table in
    /// [`crate::mime`].
    pub async fn upload_artifact(
        &self,
        task_id: &TaskId,
        local_path: &Path,
        relative_path: &str,
    ) -> Result<Artifact, ClientError> {
        if !local_path.exists() {
            return Err(ClientError::FileNotFound(local_path.to_path_buf()));
        }

        let bytes = tokio::fs::read(local_path).await?;
        let file_name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("artifact")
            .to_string();
        let mime_type = mime::mime_for_path(local_path);
        debug!(file = %file_name, mime = mime_type, "Uploading artifact");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type)?;
        let form = Form::new()
            .part("file", part)
            .text("relative_path", relative_path.to_string());

        let wire: ArtifactWire = self
            .http
            .post_multipart(&format!("{TASKS_PATH}/{task_id}/artifacts"), form)
            .await?;
        Ok(mapper::artifact_from_wire(wire))
    }

    /// Download an artifact to `output_path`, returning the bytes written.
    ///
    /// Missing parent directories are created. The body is streamed chunk by
    /// chunk into a `.part` sibling and renamed into place once complete, so
    /// a transport failure never leaves a truncated file at `output_path`.
    pub async fn download_artifact(
        &self,
        task_id: &TaskId,
        artifact_id: &ArtifactId,
        output_path: &Path,
    ) -> Result<u64, ClientError> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let file_name = output_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("artifact");
        let partial_path = output_path.with_file_name(format!("{file_name}.part"));

        let mut response = self
            .http
            .get_stream(&format!("{TASKS_PATH}/{task_id}/artifacts/{artifact_id}"))
            .await?;

        let mut file = tokio::fs::File::create(&partial_path).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&partial_path, output_path).await?;
        debug!(bytes = written, path = %output_path.display(), "Artifact downloaded");
        Ok(written)
    }
}

/// Append pagination query parameters when the caller supplied them.
fn paged_path(base: String, page: Option<u32>, page_size: Option<u32>) -> String {
    let mut query = Vec::new();
    if let Some(page) = page {
        query.push(format!("current_page={page}"));
    }
    if let Some(size) = page_size {
        query.push(format!("page_size={size}"));
    }

    if query.is_empty() {
        base
    } else {
        format!("{}?{}", base, query.join("&"))
    }
}
