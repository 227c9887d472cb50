//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Sizing hints for a [`Scheduler`](crate::Scheduler).
/// Missing fields fall back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Initial capacity of the state arena, in blocks (one per task).
    pub arena_capacity: usize,
    /// Initial capacity of the dispatch table, in task kinds.
    pub registry_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            arena_capacity: 256,
            registry_capacity: 8,
        }
    }
}

impl SchedulerConfig {
    /// Parse a config from JSON, e.g. `{"arena_capacity": 1024}`.
    pub fn from_json(raw: &str) -> Result<Self, TaskError> {
        Ok(serde_json::from_str(raw)?)
    }
}
