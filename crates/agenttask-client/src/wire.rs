//! Canonical wire shapes for agent protocol responses.
//!
//! The protocol returns structurally similar JSON from every endpoint, so one
//! shape per entity kind is enough: every task-bearing response deserializes
//! into [`TaskWire`], every step-bearing response into [`StepWire`], and so
//! on. The mapper in [`crate::mapper`] consumes only these shapes, which
//! keeps it at exactly one function per entity rather than one per endpoint.

use agenttask_core::StepStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task as returned by create/get/list task endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskWire {
    pub task_id: String,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub additional_input: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactWire>,
}

/// A step as returned by execute/get/list step endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StepWire {
    pub step_id: String,
    pub task_id: String,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub status: Option<StepStatus>,
    #[serde(default)]
    pub additional_output: Option<Value>,
    #[serde(default)]
    pub is_last: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactWire>,
}

/// An artifact as returned by upload/list artifact endpoints and embedded in
/// task and step responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactWire {
    pub artifact_id: String,
    #[serde(default)]
    pub agent_created: bool,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub relative_path: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Server-reported pagination metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationWire {
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

/// Envelope for the list-tasks endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskListWire {
    #[serde(default)]
    pub tasks: Vec<TaskWire>,
    pub pagination: PaginationWire,
}

/// Envelope for the list-steps endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StepListWire {
    #[serde(default)]
    pub steps: Vec<StepWire>,
    pub pagination: PaginationWire,
}

/// Envelope for the list-artifacts endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactListWire {
    #[serde(default)]
    pub artifacts: Vec<ArtifactWire>,
    pub pagination: PaginationWire,
}

/// Request body for task creation and step execution.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRequestBody {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_input: Option<Value>,
}
