//! Move a 2D vector towards a target with smoothstep easing.

use crate::arena::DataPtr;
use crate::env::Env;
use crate::handle::ValueRef;
use crate::kinds::{advance_progress, assert_duration};
use crate::math::{lerp_vec2, smoothstep, Vec2};
use crate::scheduler::Scheduler;

#[derive(Clone, Debug)]
pub struct MoveV2 {
    value: Option<ValueRef<Vec2>>,
    start: Vec2,
    target: Vec2,
    duration: f32,
    t: f32,
    init: bool,
}

impl MoveV2 {
    pub const NAME: &'static str = "move_v2";

    /// `start` is not captured here; the first update reads it from `value`.
    ///
    /// Panics unless `duration` is positive and finite.
    pub fn new(value: Option<ValueRef<Vec2>>, target: Vec2, duration: f32) -> Self {
        assert_duration(Self::NAME, duration);
        Self {
            value,
            start: [0.0; 2],
            target,
            duration,
            t: 0.0,
            init: false,
        }
    }

    /// Normalized progress. Can exceed 1.0 on the frame that finishes.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.t
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.init
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn step(&mut self, env: Env) -> bool {
        if self.t >= 1.0 {
            return true;
        }
        if !self.init {
            if let Some(value) = &self.value {
                self.start = value.get();
            }
            self.init = true;
        }

        self.t = advance_progress(self.t, self.duration, env.delta_time);
        // Written from the raw progress, so a frame that overshoots 1.0
        // lands off-target before the task reports done.
        if let Some(value) = &self.value {
            value.set(lerp_vec2(self.start, self.target, smoothstep(self.t)));
        }
        self.t >= 1.0
    }

    /// Rewind progress. The value is left as is; `start` is recaptured on
    /// the next update.
    pub fn rewind(&mut self) {
        self.t = 0.0;
        self.init = false;
    }
}

pub(crate) fn update(sched: &mut Scheduler, env: Env, data: DataPtr) -> bool {
    sched.data_mut::<MoveV2>(data).step(env)
}

pub(crate) fn reset(sched: &mut Scheduler, _env: Env, data: DataPtr) {
    sched.data_mut::<MoveV2>(data).rewind();
}
