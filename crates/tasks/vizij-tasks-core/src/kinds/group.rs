//! Group: runs every child each frame until all of them are done.

use log::trace;

use crate::arena::DataPtr;
use crate::env::Env;
use crate::scheduler::Scheduler;
use crate::task::Task;

#[derive(Clone, Debug, Default)]
pub struct Group {
    tasks: Vec<Task>,
}

impl Group {
    pub const NAME: &'static str = "group";

    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Every child is updated on every call, including ones that finished on an
/// earlier frame; children must treat extra updates as no-ops.
pub(crate) fn update(sched: &mut Scheduler, env: Env, data: DataPtr) -> bool {
    let len = sched.data::<Group>(data).tasks.len();
    let mut finished = true;
    for i in 0..len {
        let child = sched.data::<Group>(data).tasks[i];
        if !sched.update(child, env) {
            finished = false;
        }
    }
    if finished && len > 0 {
        trace!("group of {len} finished");
    }
    finished
}

pub(crate) fn reset(sched: &mut Scheduler, env: Env, data: DataPtr) {
    let len = sched.data::<Group>(data).tasks.len();
    for i in 0..len {
        let child = sched.data::<Group>(data).tasks[i];
        sched.reset(child, env);
    }
}
