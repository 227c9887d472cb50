//! Drives a root task from a render loop.

use log::debug;

use crate::env::Env;
use crate::scheduler::Scheduler;
use crate::task::Task;

/// Per-tree playback bookkeeping around a root task.
#[derive(Debug, Clone)]
pub struct TaskPlayer {
    root: Task,
    elapsed: f32,
    frames: u64,
    finished: bool,
}

impl TaskPlayer {
    pub fn new(root: Task) -> Self {
        Self {
            root,
            elapsed: 0.0,
            frames: 0,
            finished: false,
        }
    }

    /// Advance the tree by `dt` seconds. Returns true once the root is done.
    /// A finished tree is still updated; its tasks treat that as a no-op.
    pub fn step(&mut self, sched: &mut Scheduler, dt: f32) -> bool {
        let done = sched.update(self.root, Env::new(dt));
        self.frames += 1;
        if !self.finished {
            self.elapsed += dt;
        }
        if done && !self.finished {
            self.finished = true;
            debug!(
                "task tree finished after {} frames ({:.3}s)",
                self.frames, self.elapsed
            );
        }
        done
    }

    /// Rewind the whole tree and the counters for replay.
    pub fn restart(&mut self, sched: &mut Scheduler) {
        sched.reset(self.root, Env::default());
        self.elapsed = 0.0;
        self.frames = 0;
        self.finished = false;
        debug!("task tree restarted");
    }

    #[inline]
    pub fn root(&self) -> Task {
        self.root
    }

    /// Seconds played until the root finished (or so far).
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
