//! Sequence: runs children to completion one at a time, in order.

use log::trace;

use crate::arena::DataPtr;
use crate::env::Env;
use crate::scheduler::Scheduler;
use crate::task::Task;

#[derive(Clone, Debug, Default)]
pub struct Sequence {
    tasks: Vec<Task>,
    /// Index of the running child; `tasks.len()` once every child is done.
    it: usize,
}

impl Sequence {
    pub const NAME: &'static str = "sequence";

    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks, it: 0 }
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.it
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.it >= self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Update only the child under the cursor; advance past it once it is done.
pub(crate) fn update(sched: &mut Scheduler, env: Env, data: DataPtr) -> bool {
    let current = {
        let seq = sched.data::<Sequence>(data);
        seq.tasks.get(seq.it).copied()
    };
    let Some(child) = current else {
        return true;
    };
    if !sched.update(child, env) {
        return false;
    }

    let seq = sched.data_mut::<Sequence>(data);
    seq.it += 1;
    trace!("sequence advanced to child {}/{}", seq.it, seq.tasks.len());
    seq.is_done()
}

/// Reset every child, wherever the cursor is, then rewind the cursor.
pub(crate) fn reset(sched: &mut Scheduler, env: Env, data: DataPtr) {
    let len = sched.data::<Sequence>(data).tasks.len();
    for i in 0..len {
        let child = sched.data::<Sequence>(data).tasks[i];
        sched.reset(child, env);
    }
    sched.data_mut::<Sequence>(data).it = 0;
}
