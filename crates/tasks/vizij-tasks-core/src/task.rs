//! Uniform task handle.

use serde::{Deserialize, Serialize};

use crate::arena::DataPtr;

/// Index of a task kind in the [`TaskRegistry`](crate::TaskRegistry).
/// Stable only within one registry build.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TaskTag(pub u32);

impl TaskTag {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A schedulable unit: the kind's tag plus its state block in the arena.
///
/// Copying a `Task` copies the handle, not the state; both copies drive the
/// same block.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Task {
    pub tag: TaskTag,
    pub data: DataPtr,
}
