use pacer_core::{
    speed::{FASTEST, SLOWEST},
    Clock, ManualClock, NativeRate, ScaleFactor, SpeedPreset, Throttle, ThrottleConfig, ThrottleError,
    WaitStatus, MAX_SLICE_MS,
};

fn throttle_at(hz: f64) -> Throttle<ManualClock> {
    let config = ThrottleConfig {
        native_rate: NativeRate::from_hz(hz),
        ..ThrottleConfig::default()
    };

    Throttle::with_config(config, ManualClock::default())
}

#[test]
fn three_steps_double_and_halve_speed() {
    let mut throttle = throttle_at(60.0);

    for _ in 0..3 {
        throttle.increase_speed();
    }
    assert!((throttle.scale().get() - 2.0).abs() < 1e-9);

    throttle.set_preset(Some(SpeedPreset::Normal));

    for _ in 0..3 {
        throttle.set_preset(Some(SpeedPreset::Slower));
    }
    assert!((throttle.scale().get() - 0.5).abs() < 1e-9);
}

#[test]
fn steps_saturate_at_the_bounds() {
    let mut throttle = throttle_at(60.0);

    for _ in 0..64 {
        let change = throttle.increase_speed();
        assert!(change.scale.get() <= FASTEST);
    }
    assert_eq!(throttle.scale().get(), FASTEST);

    for _ in 0..64 {
        let change = throttle.decrease_speed();
        assert!(change.scale.get() >= SLOWEST);
    }
    assert_eq!(throttle.scale().get(), SLOWEST);
}

#[test]
fn absolute_percentages() {
    let mut throttle = throttle_at(60.0);

    assert_eq!(throttle.set_speed_percent(50).unwrap().scale.get(), 0.5);
    assert_eq!(
        throttle.set_speed_percent(0),
        Err(ThrottleError::InvalidArgument { percent: 0 })
    );
    assert_eq!(
        throttle.set_speed_percent(-5),
        Err(ThrottleError::InvalidArgument { percent: -5 })
    );
    assert_eq!(throttle.scale().get(), 0.5);

    assert_eq!(throttle.set_speed_percent(10_000).unwrap().scale.get(), FASTEST);
}

#[test]
fn invalid_percentage_error_message() {
    let err = throttle_at(60.0).set_speed_percent(0).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid emulation speed percentage 0, must be at least 1"
    );
}

#[test]
fn presets_from_codes() {
    let mut throttle = throttle_at(60.0);

    let change = throttle.set_preset(SpeedPreset::from_code(4)).unwrap();
    assert!(change.max_speed);
    assert_eq!(change.to_string(), "Emulation speed 3200.0%");

    let change = throttle.set_preset(SpeedPreset::from_code(0)).unwrap();
    assert!(!change.max_speed);
    assert_eq!(change.scale, ScaleFactor::SLOWEST);

    assert_eq!(throttle.set_preset(SpeedPreset::from_code(42)), None);
    assert_eq!(throttle.scale(), ScaleFactor::SLOWEST);
}

#[test]
fn fastest_completes_immediately_every_time() {
    let mut throttle = throttle_at(60.0);
    throttle.set_preset(Some(SpeedPreset::Fastest));

    for _ in 0..10_000 {
        assert_eq!(throttle.advance(), WaitStatus::Complete);
    }

    assert_eq!(throttle.clock().now_ms(), 0);
    assert_eq!(throttle.clock().total_slept(), 0);
}

#[test]
fn stepping_up_to_the_bound_also_unthrottles() {
    let mut throttle = throttle_at(60.0);

    while throttle.scale() < ScaleFactor::FASTEST {
        throttle.increase_speed();
    }

    assert!(!throttle.max_speed());
    assert_eq!(throttle.advance(), WaitStatus::Complete);
    assert_eq!(throttle.clock().total_slept(), 0);
}

#[test]
fn one_second_frame_is_paced_in_slices() {
    // 64 Hz at 1/64x gives exactly one second per frame.
    let mut throttle = throttle_at(64.0);
    throttle.set_preset(Some(SpeedPreset::Slowest));
    assert_eq!(throttle.budget().millis(), 1_000);

    let mut statuses = Vec::new();
    loop {
        let before = throttle.clock().now_ms();
        let status = throttle.advance();
        let blocked = throttle.clock().now_ms() - before;

        assert!(blocked <= MAX_SLICE_MS);
        statuses.push(status);

        if status == WaitStatus::Complete {
            break;
        }
    }

    assert_eq!(statuses.len(), 20);
    assert!(statuses[..19].iter().all(|&s| s == WaitStatus::Pending));
    assert_eq!(throttle.clock().now_ms(), 1_000);
}

#[test]
fn steady_state_frames_follow_the_budget() {
    let mut throttle = throttle_at(50.0);

    for _ in 0..10 {
        // Each emulated frame costs 4 ms of host time.
        throttle.clock_mut().advance(4);
        throttle.wait_frame();
    }

    // The first frame's slot opens after its emulation, later ones
    // absorb the 4 ms of work.
    assert_eq!(throttle.clock().now_ms(), 204);
    assert_eq!(throttle.clock().total_slept(), 20 + 9 * 16);
}

#[test]
fn input_between_slices_takes_effect_immediately() {
    let mut throttle = throttle_at(64.0);
    throttle.set_preset(Some(SpeedPreset::Slowest));

    assert_eq!(throttle.advance(), WaitStatus::Pending);
    assert_eq!(throttle.advance(), WaitStatus::Pending);

    // User hits "normal" while the slow frame is still being waited out.
    throttle.set_preset(Some(SpeedPreset::Normal));
    assert!(!throttle.window().in_progress());

    assert_eq!(throttle.advance(), WaitStatus::Complete);
    assert_eq!(throttle.clock().sleeps(), &[50, 50, 15]);
}
