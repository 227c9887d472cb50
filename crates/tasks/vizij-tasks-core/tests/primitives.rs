use approx::assert_relative_eq;
use proptest::prelude::*;
use vizij_tasks::{Color, Env, MoveV2, MoveV4, Scheduler, ValueRef, V4Blend};

fn frame(dt: f32) -> Env {
    Env::new(dt)
}

#[test]
fn move_v2_reaches_target_in_two_half_second_frames() {
    let mut sched = Scheduler::default();
    let pos = ValueRef::new([0.0, 0.0]);
    let task = sched.move_v2(Some(pos.clone()), [10.0, 0.0], 1.0);

    assert!(!sched.update(task, frame(0.5)));
    let state = sched.state::<MoveV2>(task).expect("move_v2 state");
    assert_relative_eq!(state.progress(), 0.5);
    assert_relative_eq!(pos.get()[0], 5.0);
    assert_eq!(pos.get()[1], 0.0);

    assert!(sched.update(task, frame(0.5)));
    assert_relative_eq!(sched.state::<MoveV2>(task).unwrap().progress(), 1.0);
    assert_eq!(pos.get(), [10.0, 0.0]);
}

#[test]
fn completed_move_ignores_further_updates() {
    let mut sched = Scheduler::default();
    let pos = ValueRef::new([1.0, 1.0]);
    let task = sched.move_v2(Some(pos.clone()), [3.0, -1.0], 0.25);

    assert!(sched.update(task, frame(0.25)));
    let settled = pos.get();
    for dt in [0.0, 0.1, 5.0, -1.0] {
        assert!(sched.update(task, frame(dt)));
        assert_eq!(pos.get(), settled);
    }
    assert_eq!(sched.state::<MoveV2>(task).unwrap().progress(), 1.0);
}

#[test]
fn start_is_captured_on_first_update_not_construction() {
    let mut sched = Scheduler::default();
    let pos = ValueRef::new([0.0, 0.0]);
    let task = sched.move_v2(Some(pos.clone()), [10.0, 10.0], 1.0);

    pos.set([4.0, 8.0]);
    sched.update(task, frame(0.5));
    let state = sched.state::<MoveV2>(task).unwrap();
    assert!(state.is_started());
    assert_eq!(state.start(), [4.0, 8.0]);
    assert_relative_eq!(pos.get()[0], 7.0);
    assert_relative_eq!(pos.get()[1], 9.0);
}

#[test]
fn reset_recaptures_start_from_current_value() {
    let mut sched = Scheduler::default();
    let pos = ValueRef::new([0.0, 0.0]);
    let task = sched.move_v2(Some(pos.clone()), [10.0, 0.0], 1.0);

    sched.update(task, frame(1.0));
    assert_eq!(pos.get(), [10.0, 0.0]);

    sched.reset(task, Env::default());
    let state = sched.state::<MoveV2>(task).unwrap();
    assert_eq!(state.progress(), 0.0);
    assert!(!state.is_started());
    // Reset does not restore the value.
    assert_eq!(pos.get(), [10.0, 0.0]);

    pos.set([2.0, 0.0]);
    assert!(!sched.update(task, frame(0.5)));
    assert_eq!(sched.state::<MoveV2>(task).unwrap().start(), [2.0, 0.0]);
    assert_relative_eq!(pos.get()[0], 6.0);
}

#[test]
fn move_without_value_still_completes() {
    let mut sched = Scheduler::default();
    let task = sched.move_v2(None, [10.0, 0.0], 0.5);
    assert!(!sched.update(task, frame(0.25)));
    assert!(sched.update(task, frame(0.25)));
}

#[test]
fn overshoot_frame_writes_uncapped_progress() {
    // 0.625 + 0.625 = 1.25 of a 1s move: smoothstep(1.25) = 0.78125, so the
    // finishing frame leaves the value short of the target.
    let mut sched = Scheduler::default();
    let pos = ValueRef::new([0.0, 0.0]);
    let task = sched.move_v2(Some(pos.clone()), [10.0, 0.0], 1.0);

    assert!(!sched.update(task, frame(0.625)));
    assert_eq!(pos.get()[0], 6.835_937_5);

    assert!(sched.update(task, frame(0.625)));
    assert_eq!(sched.state::<MoveV2>(task).unwrap().progress(), 1.25);
    assert_eq!(pos.get()[0], 7.8125);

    // Done tasks no longer write, so the overshoot value sticks.
    assert!(sched.update(task, frame(0.625)));
    assert_eq!(pos.get()[0], 7.8125);
}

#[test]
fn move_v4_fades_towards_normalized_color() {
    let mut sched = Scheduler::default();
    let tint = ValueRef::new([0.0, 0.0, 0.0, 0.0]);
    let task = sched.move_v4(Some(tint.clone()), Color::new(255, 0, 255, 255), 1.0);

    let state = sched.state::<MoveV4>(task).unwrap();
    assert_eq!(state.target(), [1.0, 0.0, 1.0, 1.0]);
    assert_eq!(state.blend(), V4Blend::Linear);

    assert!(!sched.update(task, frame(0.5)));
    assert_eq!(tint.get(), [0.5, 0.0, 0.5, 0.5]);
    assert!(sched.update(task, frame(0.5)));
    assert_eq!(tint.get(), [1.0, 0.0, 1.0, 1.0]);
}

#[test]
fn move_rotation_stays_normalized() {
    let mut sched = Scheduler::default();
    let half = std::f32::consts::FRAC_1_SQRT_2;
    let rot = ValueRef::new([0.0, 0.0, 0.0, 1.0]);
    let task = sched.move_rotation(Some(rot.clone()), [0.0, 0.0, half, half], 1.0);
    assert_eq!(sched.tags().move_v4, task.tag);

    for _ in 0..3 {
        sched.update(task, frame(0.25));
        let q = rot.get();
        let len = q.iter().map(|c| c * c).sum::<f32>().sqrt();
        assert_relative_eq!(len, 1.0, epsilon = 1e-5);
    }
    assert!(sched.update(task, frame(0.25)));
    let q = rot.get();
    assert_relative_eq!(q[2], half, epsilon = 1e-5);
    assert_relative_eq!(q[3], half, epsilon = 1e-5);
}

#[test]
#[should_panic(expected = "duration must be positive")]
fn zero_duration_is_a_contract_violation() {
    let mut sched = Scheduler::default();
    sched.move_v4(None, Color::default(), 0.0);
}

#[test]
fn move_v4_reset_rewinds_progress() {
    let mut m = MoveV4::rotation(None, [0.0, 0.0, 0.0, 1.0], 2.0);
    m.step(Env::new(1.0));
    assert_eq!(m.progress(), 0.5);
    m.rewind();
    assert_eq!(m.progress(), 0.0);
    assert!(!m.is_started());
}

proptest! {
    #[test]
    fn progress_is_monotonic_until_done(duration in 0.05f32..10.0, dt in 0.001f32..1.0) {
        let mut sched = Scheduler::default();
        let task = sched.move_v2(None, [1.0, 1.0], duration);
        let mut last = 0.0f32;
        let mut done = false;
        for _ in 0..20_000 {
            done = sched.update(task, Env::new(dt));
            let t = sched.state::<MoveV2>(task).unwrap().progress();
            prop_assert!(t >= last);
            last = t;
            if done {
                break;
            }
        }
        prop_assert!(done);
        prop_assert!(last >= 1.0);
    }

    #[test]
    fn single_frame_overshoot_matches_uncapped_smoothstep(duration in 0.1f32..4.0, over in 1.01f32..1.5) {
        let mut sched = Scheduler::default();
        let pos = ValueRef::new([0.0, 0.0]);
        let task = sched.move_v2(Some(pos.clone()), [1.0, 0.0], duration);
        let dt = duration * over;
        prop_assert!(sched.update(task, Env::new(dt)));
        let t = dt / duration;
        prop_assert!((pos.get()[0] - t * t * (3.0 - 2.0 * t)).abs() < 1e-5);
    }
}
