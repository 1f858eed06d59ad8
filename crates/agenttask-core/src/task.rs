//! Task, Step and Artifact records.

use crate::{ArtifactId, StepId, StepStatus, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Task is the top-level unit of work submitted to the remote agent service.
///
/// Tasks are created server-side; the local process never mutates one after
/// mapping it from a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,

    /// Input text the task was created with.
    pub input: String,

    /// Free-form status string, owned by the server.
    pub status: String,

    /// When the task was created, if the server reported it.
    pub created_at: Option<DateTime<Utc>>,

    /// Artifacts attached to this task.
    pub artifacts: Vec<Artifact>,
}

/// One execution increment within a Task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Unique step identifier.
    pub id: StepId,

    /// Identifier of the task this step belongs to.
    pub task_id: TaskId,

    /// Input text for this step.
    pub input: String,

    /// Output text produced by the step, if any.
    pub output: Option<String>,

    /// Current step status.
    pub status: StepStatus,

    /// Opaque structured payload the agent attached to the step output.
    pub additional_output: Option<Value>,

    /// True if this is the terminal step of the task's step sequence.
    pub is_last: bool,

    /// When the step was created, if the server reported it.
    pub created_at: Option<DateTime<Utc>>,

    /// When the step finished executing, if the server reported it.
    pub executed_at: Option<DateTime<Utc>>,

    /// Artifacts attached to this step.
    pub artifacts: Vec<Artifact>,
}

impl Step {
    /// Returns true if no further steps can be executed after this one.
    pub fn is_terminal(&self) -> bool {
        self.is_last
    }
}

/// A file associated with a Task and, optionally, with one of its Steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Unique artifact identifier.
    pub id: ArtifactId,

    /// True if the agent produced this artifact, false if a human uploaded it.
    pub agent_created: bool,

    /// File name of the artifact.
    pub file_name: String,

    /// Workspace-relative path of the artifact.
    pub relative_path: String,

    /// Size in bytes, 0 when the server does not report it.
    pub size: u64,

    /// When the artifact was created, if the server reported it.
    pub created_at: Option<DateTime<Utc>>,
}
