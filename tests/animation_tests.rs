use risk_gauge::animation::{step, Animator, InterpolationState};

#[test]
fn test_step_is_linear_and_clamped() {
    let state = InterpolationState {
        previous: 1.0,
        target: 3.0,
        start_ms: 100.0,
        duration_ms: 400.0,
        current: 1.0,
        done: false,
    };
    let (_, frame) = step(state, 50.0);
    assert_eq!(frame.value, 1.0);
    assert!(!frame.done);

    let (mid, frame) = step(state, 300.0);
    assert_eq!(frame.value, 2.0);
    assert_eq!(mid.previous, 1.0);
    assert_eq!(mid.current, 2.0);

    let (end, frame) = step(state, 10_000.0);
    assert_eq!(frame.value, 3.0);
    assert!(frame.done);
    assert_eq!(end.previous, 3.0);
}

#[test]
fn test_zero_duration_completes_immediately() {
    let mut animator = Animator::new(0.0);
    animator.settle(0.0);
    let request = animator.animate(5.0, 10.0);
    let frame = animator.frame(request, 10.0).unwrap();
    assert_eq!(frame.value, 5.0);
    assert!(frame.done);
}

#[test]
fn test_first_transition_starts_at_rest() {
    let mut animator = Animator::new(420.0);
    let request = animator.animate(2.5, 0.0);
    assert_eq!(animator.displayed(), Some(2.5));
    assert!(!animator.is_animating());
    assert!(animator.frame(request, 16.0).is_none());
}

#[test]
fn test_retarget_mid_flight_starts_from_displayed_value() {
    let mut animator = Animator::new(400.0);
    animator.settle(0.0);
    let first = animator.animate(4.0, 0.0);
    assert_eq!(animator.frame(first, 100.0).unwrap().value, 1.0);

    let second = animator.animate(0.0, 100.0);
    let state = animator.state().unwrap();
    assert_eq!(state.previous, 1.0);
    assert_eq!(state.target, 0.0);

    // The superseded request never draws again.
    assert!(animator.frame(first, 150.0).is_none());
    let frame = animator.frame(second, 300.0).unwrap();
    assert_eq!(frame.value, 0.5);
}

#[test]
fn test_completion_updates_previous_value() {
    let mut animator = Animator::new(100.0);
    animator.settle(1.0);
    let request = animator.animate(2.0, 0.0);
    assert!(animator.frame(request, 100.0).unwrap().done);
    assert!(animator.frame(request, 116.0).is_none());

    let next = animator.animate(3.0, 200.0);
    assert_eq!(animator.state().unwrap().previous, 2.0);
    assert_eq!(animator.frame(next, 250.0).unwrap().value, 2.5);
}

#[test]
fn test_run_drives_frames_until_done() {
    let mut animator = Animator::new(100.0);
    animator.settle(0.0);
    let mut seen = Vec::new();
    animator.run(10.0, [0.0, 25.0, 50.0, 100.0, 125.0], |v| seen.push(v));
    assert_eq!(seen, vec![0.0, 2.5, 5.0, 10.0]);
    assert_eq!(animator.displayed(), Some(10.0));
}
