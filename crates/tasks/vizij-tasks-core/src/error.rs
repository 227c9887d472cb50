//! Error types for the diagnostic and configuration paths.
//!
//! The per-frame update path never returns errors: contract violations there
//! panic. These variants are reported by the checked entry points instead.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TaskError {
    /// Tag is not present in the current registry build.
    #[error("Unknown task tag {tag} (registry holds {registered} kinds)")]
    UnknownTag { tag: u32, registered: usize },

    /// Data pointer was issued before the arena was last reset, or never issued.
    #[error("Stale task data: block {index} from arena epoch {epoch} (current epoch {current})")]
    StaleData { index: u32, epoch: u32, current: u32 },

    /// Data block holds a different state type than the caller expected.
    #[error("Task state kind mismatch: expected {expected}")]
    KindMismatch { expected: String },

    /// Configuration could not be parsed.
    #[error("Invalid scheduler config: {reason}")]
    Config { reason: String },
}

impl TaskError {
    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownTag { .. } => "registry",
            Self::StaleData { .. } | Self::KindMismatch { .. } => "arena",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
