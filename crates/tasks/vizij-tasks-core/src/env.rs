//! Per-frame environment handed to every update/reset call.

use serde::{Deserialize, Serialize};

/// Ephemeral context for one update. Passed by value, never stored by tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Env {
    /// Seconds elapsed since the previous update.
    pub delta_time: f32,
}

impl Env {
    #[inline]
    pub fn new(delta_time: f32) -> Self {
        Self { delta_time }
    }
}
