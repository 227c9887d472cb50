//! Scheduler: owns the dispatch registry and the state arena, and exposes the
//! generic `update`/`reset` entry points plus constructors for the built-in
//! kinds.
//!
//! Task trees are built once per arena cycle and then driven by calling
//! [`Scheduler::update`] on the root every frame.

use std::any::{type_name, Any, TypeId};

use log::debug;

use crate::arena::{Arena, DataPtr};
use crate::config::SchedulerConfig;
use crate::env::Env;
use crate::error::TaskError;
use crate::handle::ValueRef;
use crate::kinds::{Group, MoveV2, MoveV4, Sequence};
use crate::math::{Color, Vec2, Vec4};
use crate::registry::{BuiltinTags, ResetFn, TaskFuncs, TaskRegistry, UpdateFn};
use crate::task::{Task, TaskTag};

#[derive(Debug)]
pub struct Scheduler {
    cfg: SchedulerConfig,
    registry: TaskRegistry,
    arena: Arena,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl Scheduler {
    /// Create a scheduler with a freshly built registry and an empty arena.
    pub fn new(cfg: SchedulerConfig) -> Self {
        Self {
            registry: TaskRegistry::with_capacity(cfg.registry_capacity),
            arena: Arena::with_capacity(cfg.arena_capacity),
            cfg,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.cfg
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn tags(&self) -> BuiltinTags {
        self.registry.builtins()
    }

    /// Register a caller-defined kind with state type `T`.
    pub fn register<T: Any>(
        &mut self,
        name: &'static str,
        update: UpdateFn,
        reset: ResetFn,
    ) -> TaskTag {
        self.registry.register::<T>(name, update, reset)
    }

    /// Rebuild the registry. Caller-defined kinds are dropped; tasks built
    /// from them must not be updated until their kind is registered again
    /// under the same tag.
    pub fn rebuild(&mut self) {
        self.registry.rebuild();
    }

    /// Drop every task at once. All `Task` values issued so far become stale.
    pub fn reset_arena(&mut self) {
        debug!(
            "resetting task arena: dropping {} blocks (epoch {})",
            self.arena.len(),
            self.arena.epoch()
        );
        self.arena.reset();
    }

    /// Allocate `state` and tag it as a task of kind `tag`.
    ///
    /// Panics if `tag` is unregistered or was registered for another state type.
    pub fn spawn<T: Any>(&mut self, tag: TaskTag, state: T) -> Task {
        let funcs = self.registry.funcs(tag);
        assert!(
            funcs.state_type == TypeId::of::<T>(),
            "task kind '{}' expects state {}, got {}",
            funcs.name,
            funcs.state_name,
            type_name::<T>()
        );
        Task {
            tag,
            data: self.arena.alloc(state),
        }
    }

    /// Advance `task` by one frame. Returns true once the task is done.
    #[inline]
    pub fn update(&mut self, task: Task, env: Env) -> bool {
        let update = self.registry.funcs(task.tag).update;
        update(self, env, task.data)
    }

    /// Rewind `task` (and its subtree) to its initial state.
    #[inline]
    pub fn reset(&mut self, task: Task, env: Env) {
        let reset = self.registry.funcs(task.tag).reset;
        reset(self, env, task.data)
    }

    /// Like [`update`](Self::update), but validates the tag and the state
    /// block of `task` itself before dispatching. Children reached through
    /// composites are dispatched unchecked.
    pub fn checked_update(&mut self, task: Task, env: Env) -> Result<bool, TaskError> {
        let funcs = self.validate(task)?;
        Ok((funcs.update)(self, env, task.data))
    }

    /// Validated counterpart of [`reset`](Self::reset).
    pub fn checked_reset(&mut self, task: Task, env: Env) -> Result<(), TaskError> {
        let funcs = self.validate(task)?;
        (funcs.reset)(self, env, task.data);
        Ok(())
    }

    fn validate(&self, task: Task) -> Result<TaskFuncs, TaskError> {
        let funcs = self
            .registry
            .get(task.tag)
            .ok_or(TaskError::UnknownTag {
                tag: task.tag.0,
                registered: self.registry.len(),
            })?;
        match self.arena.type_id_of(task.data) {
            None => Err(TaskError::StaleData {
                index: task.data.index(),
                epoch: task.data.epoch(),
                current: self.arena.epoch(),
            }),
            Some(id) if id != funcs.state_type => Err(TaskError::KindMismatch {
                expected: funcs.state_name.to_string(),
            }),
            Some(_) => Ok(funcs),
        }
    }

    /// State of `task` if it is live and of kind `T`.
    pub fn state<T: Any>(&self, task: Task) -> Option<&T> {
        self.arena.try_get(task.data).ok()
    }

    /// Typed state access for update/reset functions. Panics on misuse.
    #[inline]
    pub fn data<T: Any>(&self, ptr: DataPtr) -> &T {
        self.arena.get(ptr)
    }

    #[inline]
    pub fn data_mut<T: Any>(&mut self, ptr: DataPtr) -> &mut T {
        self.arena.get_mut(ptr)
    }

    /// Move a 2D value towards `target` over `duration` seconds.
    /// With `value == None` the task only keeps time.
    pub fn move_v2(
        &mut self,
        value: Option<ValueRef<Vec2>>,
        target: Vec2,
        duration: f32,
    ) -> Task {
        let tag = self.tags().move_v2;
        self.spawn(tag, MoveV2::new(value, target, duration))
    }

    /// Fade a 4-channel value towards `target`, normalized into `[0, 1]`.
    pub fn move_v4(
        &mut self,
        value: Option<ValueRef<Vec4>>,
        target: Color,
        duration: f32,
    ) -> Task {
        let tag = self.tags().move_v4;
        self.spawn(tag, MoveV4::color(value, target, duration))
    }

    /// Rotate a quaternion (x,y,z,w) towards `target` along the shortest arc.
    pub fn move_rotation(
        &mut self,
        value: Option<ValueRef<Vec4>>,
        target: Vec4,
        duration: f32,
    ) -> Task {
        let tag = self.tags().move_v4;
        self.spawn(tag, MoveV4::rotation(value, target, duration))
    }

    /// Run `children` one after another, in order.
    pub fn sequence(&mut self, children: Vec<Task>) -> Task {
        let tag = self.tags().sequence;
        self.spawn(tag, Sequence::new(children))
    }

    /// Run `children` together until all of them are done.
    pub fn group(&mut self, children: Vec<Task>) -> Task {
        let tag = self.tags().group;
        self.spawn(tag, Group::new(children))
    }
}
