//! Move a 4-channel value (color or rotation) towards a target.

use serde::{Deserialize, Serialize};

use crate::arena::DataPtr;
use crate::env::Env;
use crate::handle::ValueRef;
use crate::kinds::{advance_progress, assert_duration};
use crate::math::{lerp_vec4, nlerp_quat, smoothstep, Color, Vec4};
use crate::scheduler::Scheduler;

/// How the four channels are blended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum V4Blend {
    /// Per-channel lerp (colors).
    #[default]
    Linear,
    /// Normalized quaternion lerp along the shortest arc.
    Rotation,
}

#[derive(Clone, Debug)]
pub struct MoveV4 {
    value: Option<ValueRef<Vec4>>,
    start: Vec4,
    target: Vec4,
    duration: f32,
    t: f32,
    init: bool,
    blend: V4Blend,
}

impl MoveV4 {
    pub const NAME: &'static str = "move_v4";

    /// Panics unless `duration` is positive and finite.
    pub fn new(
        value: Option<ValueRef<Vec4>>,
        target: Vec4,
        duration: f32,
        blend: V4Blend,
    ) -> Self {
        assert_duration(Self::NAME, duration);
        Self {
            value,
            start: [0.0; 4],
            target,
            duration,
            t: 0.0,
            init: false,
            blend,
        }
    }

    /// Fade towards `target`, stored normalized into `[0, 1]`.
    pub fn color(value: Option<ValueRef<Vec4>>, target: Color, duration: f32) -> Self {
        Self::new(value, target.normalize(), duration, V4Blend::Linear)
    }

    pub fn rotation(value: Option<ValueRef<Vec4>>, target: Vec4, duration: f32) -> Self {
        Self::new(value, target, duration, V4Blend::Rotation)
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.t
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.init
    }

    pub fn start(&self) -> Vec4 {
        self.start
    }

    pub fn target(&self) -> Vec4 {
        self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn blend(&self) -> V4Blend {
        self.blend
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
        if let Some(value) = &self.value {
            let eased = smoothstep(self.t);
            value.set(match self.blend {
                V4Blend::Linear => lerp_vec4(self.start, self.target, eased),
                V4Blend::Rotation => nlerp_quat(self.start, self.target, eased),
            });
        }
        self.t >= 1.0
    }

    pub fn rewind(&mut self) {
        self.t = 0.0;
        self.init = false;
    }
}

pub(crate) fn update(sched: &mut Scheduler, env: Env, data: DataPtr) -> bool {
    sched.data_mut::<MoveV4>(data).step(env)
}

pub(crate) fn reset(sched: &mut Scheduler, _env: Env, data: DataPtr) {
    sched.data_mut::<MoveV4>(data).rewind();
}
