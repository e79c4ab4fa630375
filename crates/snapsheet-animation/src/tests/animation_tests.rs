use super::*;

use snapsheet_core::{DefaultScheduler, Runtime, RuntimeHandle};
use std::sync::Arc;

const FRAME_NANOS: u64 = 16_666_667;

fn sheet_spring() -> SpringSpec {
    SpringSpec::default_spring().with_damping(50.0)
}

/// Drains frames until the animatable stops, returning every sampled value.
fn run_until_idle(handle: &RuntimeHandle, animatable: &Animatable, max_frames: usize) -> Vec<f32> {
    let mut samples = Vec::new();
    let mut frame_time = 0u64;
    for _ in 0..max_frames {
        if !animatable.is_running() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        samples.push(animatable.value());
    }
    samples
}

#[test]
fn animate_to_settles_exactly_on_target() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(-600.0, sheet_spring());
    assert!(animatable.is_running());
    assert_eq!(animatable.value(), 0.0, "value only moves on frames");

    let samples = run_until_idle(&handle, &animatable, 2_000);

    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), -600.0);
    assert_eq!(animatable.velocity(), 0.0);
    assert!(samples.iter().any(|value| *value < 0.0 && *value > -600.0));
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn over_damped_spring_never_overshoots() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(-1_000.0, sheet_spring());
    let samples = run_until_idle(&handle, &animatable, 2_000);

    assert!(samples.iter().all(|value| *value >= -1_000.0 - 1e-3));
    assert!(samples.windows(2).all(|pair| pair[1] <= pair[0] + 1e-3));
}

#[test]
fn bouncy_spring_overshoots_then_settles() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(100.0, SpringSpec::default_spring());
    let samples = run_until_idle(&handle, &animatable, 2_000);

    assert!(samples.iter().any(|value| *value > 100.0));
    assert_eq!(animatable.value(), 100.0);
}

#[test]
fn retarget_keeps_current_value() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(-500.0, sheet_spring());
    for frame in 1..=10 {
        handle.drain_frame_callbacks(frame * FRAME_NANOS);
    }
    let midway = animatable.value();
    assert!(midway < 0.0);

    animatable.animate_to(0.0, sheet_spring());
    assert_eq!(animatable.value(), midway);
    assert_eq!(animatable.target(), 0.0);

    let mut frame_time = 10 * FRAME_NANOS;
    while animatable.is_running() {
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
    }
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn repeated_animate_to_same_target_is_idempotent() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(-300.0, sheet_spring());
    run_until_idle(&handle, &animatable, 2_000);
    animatable.animate_to(-300.0, sheet_spring());
    run_until_idle(&handle, &animatable, 2_000);

    assert_eq!(animatable.value(), -300.0);
}

#[test]
fn stop_freezes_value_and_cancels_frames() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(-400.0, sheet_spring());
    for frame in 1..=5 {
        handle.drain_frame_callbacks(frame * FRAME_NANOS);
    }
    animatable.stop();
    let frozen = animatable.value();

    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(6 * FRAME_NANOS);
    assert_eq!(animatable.value(), frozen);
    assert_eq!(animatable.target(), frozen);
}

#[test]
fn clones_share_state() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let animatable = Animatable::new(0.0, runtime.handle());
    let clone = animatable.clone();

    clone.snap_to(-42.0);

    assert_eq!(animatable.value(), -42.0);
}

#[test]
fn spring_spec_default_is_under_damped() {
    let spec = SpringSpec::default();
    assert!(spec.damping_ratio() < 1.0);
    assert!(spec.is_valid());
}

#[test]
fn sheet_spring_is_over_damped() {
    assert_eq!(sheet_spring().damping_ratio(), 2.5);
}

#[test]
fn spring_spec_rejects_zero_mass() {
    let spec = SpringSpec {
        mass: 0.0,
        ..SpringSpec::default()
    };
    assert!(!spec.is_valid());
}

#[test]
fn interpolate_clamps_descending_ranges() {
    let input = [-1_820.0, -1_870.0];
    let output = [25.0, 5.0];

    assert_eq!(interpolate(0.0, input, output, Extrapolate::Clamp), 25.0);
    assert_eq!(interpolate(-1_845.0, input, output, Extrapolate::Clamp), 15.0);
    assert_eq!(interpolate(-1_870.0, input, output, Extrapolate::Clamp), 5.0);
    assert_eq!(interpolate(-5_000.0, input, output, Extrapolate::Clamp), 5.0);
}

#[test]
fn interpolate_extend_and_identity() {
    assert_eq!(
        interpolate(2.0, [0.0, 1.0], [0.0, 10.0], Extrapolate::Extend),
        20.0
    );
    assert_eq!(
        interpolate(2.0, [0.0, 1.0], [0.0, 10.0], Extrapolate::Identity),
        2.0
    );
    assert_eq!(
        interpolate(3.0, [1.0, 1.0], [7.0, 9.0], Extrapolate::Clamp),
        7.0
    );
}
