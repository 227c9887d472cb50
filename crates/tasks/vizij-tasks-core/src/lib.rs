//! Vizij Tasks Core (engine-agnostic)
//!
//! Frame-stepped task scheduler for time-based animations. A task is a tag
//! plus a state block in an arena; the tag picks an `(update, reset)` pair
//! from the [`TaskRegistry`]. Built-in kinds:
//! - `move_v2`: eased move of a 2D vector
//! - `move_v4`: eased fade of a color or rotation of a quaternion
//! - `sequence`: children one after another
//! - `group`: children in parallel
//!
//! Composites dispatch through the same registry, so trees nest freely and
//! can contain caller-registered kinds.
//!
//! ```
//! use vizij_tasks::{Scheduler, ValueRef, Env};
//!
//! let mut sched = Scheduler::default();
//! let pos = ValueRef::new([0.0, 0.0]);
//! let root = sched.move_v2(Some(pos.clone()), [10.0, 0.0], 1.0);
//! assert!(!sched.update(root, Env::new(0.5)));
//! assert!(sched.update(root, Env::new(0.5)));
//! assert_eq!(pos.get(), [10.0, 0.0]);
//! ```

pub mod arena;
pub mod config;
pub mod env;
pub mod error;
pub mod handle;
pub mod kinds;
pub mod math;
pub mod player;
pub mod registry;
pub mod scheduler;
pub mod task;

// Re-exports for consumers (adapters)
pub use arena::{Arena, DataPtr};
pub use config::SchedulerConfig;
pub use env::Env;
pub use error::TaskError;
pub use handle::ValueRef;
pub use kinds::{Group, MoveV2, MoveV4, Sequence, V4Blend};
pub use math::{Color, Vec2, Vec4};
pub use player::TaskPlayer;
pub use registry::{BuiltinTags, ResetFn, TaskFuncs, TaskRegistry, UpdateFn};
pub use scheduler::Scheduler;
pub use task::{Task, TaskTag};
