//! Step status as reported by the agent service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a Step in its task's step sequence.
///
/// The protocol reports lowercase status strings; values this client does not
/// recognize deserialize to [`StepStatus::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step recorded but not yet executing.
    Created,
    /// Step actively executing on the agent.
    Running,
    /// Step finished executing.
    Completed,
    /// Status string not recognized by this client version.
    #[serde(other)]
    Unknown,
}

impl StepStatus {
    /// Returns true if the step has finished executing.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
