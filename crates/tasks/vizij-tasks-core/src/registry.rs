//! Dispatch registry: task kinds are rows of `(update, reset)` function
//! pointers, selected by tag. Composites are rows like any other, so they
//! can drive kinds registered after them.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::arena::DataPtr;
use crate::env::Env;
use crate::kinds::{group, move_v2, move_v4, sequence, Group, MoveV2, MoveV4, Sequence};
use crate::scheduler::Scheduler;
use crate::task::TaskTag;

/// Advances the state behind `DataPtr` by one frame; returns true when done.
pub type UpdateFn = fn(&mut Scheduler, Env, DataPtr) -> bool;
/// Rewinds the state behind `DataPtr` for replay.
pub type ResetFn = fn(&mut Scheduler, Env, DataPtr);

/// One registry row.
#[derive(Clone, Copy)]
pub struct TaskFuncs {
    pub name: &'static str,
    pub update: UpdateFn,
    pub reset: ResetFn,
    /// Type of the state block every task of this kind points at.
    pub state_type: TypeId,
    pub state_name: &'static str,
}

impl fmt::Debug for TaskFuncs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskFuncs")
            .field("name", &self.name)
            .field("state", &self.state_name)
            .finish()
    }
}

/// Tags assigned to the built-in kinds by the last [`TaskRegistry::rebuild`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuiltinTags {
    pub move_v2: TaskTag,
    pub move_v4: TaskTag,
    pub sequence: TaskTag,
    pub group: TaskTag,
}

#[derive(Debug)]
pub struct TaskRegistry {
    items: Vec<TaskFuncs>,
    by_name: HashMap<&'static str, TaskTag>,
    builtins: BuiltinTags,
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::with_capacity(4)
    }
}

impl TaskRegistry {
    /// A registry holding the built-in kinds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let placeholder = TaskTag(0);
        let mut registry = Self {
            items: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
            builtins: BuiltinTags {
                move_v2: placeholder,
                move_v4: placeholder,
                sequence: placeholder,
                group: placeholder,
            },
        };
        registry.rebuild();
        registry
    }

    /// Append a kind whose tasks carry state of type `T`; returns its new tag.
    /// A repeated name shadows the earlier row for [`tag_of`](Self::tag_of).
    pub fn register<T: Any>(
        &mut self,
        name: &'static str,
        update: UpdateFn,
        reset: ResetFn,
    ) -> TaskTag {
        let tag = TaskTag(self.items.len() as u32);
        self.items.push(TaskFuncs {
            name,
            update,
            reset,
            state_type: TypeId::of::<T>(),
            state_name: type_name::<T>(),
        });
        if let Some(prev) = self.by_name.insert(name, tag) {
            warn!("task kind '{name}' re-registered: tag {} shadows {}", tag.0, prev.0);
        }
        debug!("registered task kind '{name}' as tag {}", tag.0);
        tag
    }

    /// Clear the table and re-register the built-ins in fixed order:
    /// move_v2, move_v4, sequence, group. Kinds registered by callers are
    /// dropped and must be registered again.
    pub fn rebuild(&mut self) {
        self.items.clear();
        self.by_name.clear();

        let move_v2 = self.register::<MoveV2>(MoveV2::NAME, move_v2::update, move_v2::reset);
        let move_v4 = self.register::<MoveV4>(MoveV4::NAME, move_v4::update, move_v4::reset);
        let sequence =
            self.register::<Sequence>(Sequence::NAME, sequence::update, sequence::reset);
        let group = self.register::<Group>(Group::NAME, group::update, group::reset);
        self.builtins = BuiltinTags {
            move_v2,
            move_v4,
            sequence,
            group,
        };
        debug!("task registry rebuilt with {} built-in kinds", self.items.len());
    }

    /// Row for `tag`. Unchecked hot path: an unregistered tag panics.
    #[inline]
    pub fn funcs(&self, tag: TaskTag) -> TaskFuncs {
        self.items[tag.index()]
    }

    #[inline]
    pub fn get(&self, tag: TaskTag) -> Option<TaskFuncs> {
        self.items.get(tag.index()).copied()
    }

    #[inline]
    pub fn builtins(&self) -> BuiltinTags {
        self.builtins
    }

    pub fn tag_of(&self, name: &str) -> Option<TaskTag> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, tag: TaskTag) -> Option<&'static str> {
        self.get(tag).map(|f| f.name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
