//! Pure mapping from wire shapes to domain records.
//!
//! Every function here is total: a missing optional field maps to its
//! documented default (empty string input, `"unknown"` task status, empty
//! artifact list, size 0) instead of failing. Timestamps the server omits
//! stay `None` and are never substituted with the mapping time.

use agenttask_core::{Artifact, ArtifactId, Page, Step, StepId, StepStatus, Task, TaskId};

use crate::wire::{ArtifactWire, PaginationWire, StepWire, TaskWire};

/// Task status used when the server does not report one.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Map a wire task to the domain record.
pub fn task_from_wire(wire: TaskWire) -> Task {
    Task {
        id: TaskId::new(wire.task_id),
        input: wire.input.unwrap_or_default(),
        status: wire.status.unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        created_at: wire.created_at,
        artifacts: wire.artifacts.into_iter().map(artifact_from_wire).collect(),
    }
}

/// Map a wire step to the domain record.
pub fn step_from_wire(wire: StepWire) -> Step {
    Step {
        id: StepId::new(wire.step_id),
        task_id: TaskId::new(wire.task_id),
        input: wire.input.unwrap_or_default(),
        output: wire.output,
        status: wire.status.unwrap_or(StepStatus::Unknown),
        additional_output: wire.additional_output,
        is_last: wire.is_last,
        created_at: wire.created_at,
        executed_at: wire.executed_at,
        artifacts: wire.artifacts.into_iter().map(artifact_from_wire).collect(),
    }
}

/// Map a wire artifact to the domain record.
pub fn artifact_from_wire(wire: ArtifactWire) -> Artifact {
    Artifact {
        id: ArtifactId::new(wire.artifact_id),
        agent_created: wire.agent_created,
        file_name: wire.file_name.unwrap_or_default(),
        relative_path: wire.relative_path.unwrap_or_default(),
        size: wire.size.unwrap_or(0),
        created_at: wire.created_at,
    }
}

/// Build a domain page from a raw item list and the server's pagination
/// metadata, mapping each item through the given entity mapper.
///
/// The metadata is copied verbatim; in particular `total_pages` is not
/// re-derived from `total_items` / `page_size`, so non-standard server
/// rounding survives the mapping.
pub fn page_from_wire<W, T>(
    items: Vec<W>,
    pagination: PaginationWire,
    f: impl FnMut(W) -> T,
) -> Page<T> {
    Page {
        items,
        total_items: pagination.total_items,
        current_page: pagination.current_page,
        page_size: pagination.page_size,
        total_pages: pagination.total_pages,
    }
    .map(f)
}
