//! Built-in task kinds. Each module exposes its state type plus the
//! `update`/`reset` pair the registry stores for it.

pub mod group;
pub mod move_v2;
pub mod move_v4;
pub mod sequence;

pub use group::Group;
pub use move_v2::MoveV2;
pub use move_v4::{MoveV4, V4Blend};
pub use sequence::Sequence;

/// Advance normalized progress by `delta_time` seconds without keeping a
/// separate elapsed-time accumulator.
#[inline]
pub(crate) fn advance_progress(t: f32, duration: f32, delta_time: f32) -> f32 {
    (t * duration + delta_time) / duration
}

#[inline]
pub(crate) fn assert_duration(kind: &str, duration: f32) {
    assert!(
        duration > 0.0 && duration.is_finite(),
        "{kind} duration must be positive and finite, got {duration}"
    );
}
