use lpf::{Strength, StrengthFilter};

fn samples_to_reach(strength: u8, fraction: f32) -> usize {
    let mut filter = StrengthFilter::new(strength);
    filter.step(0.0);
    (1..=20_000)
        .find(|_| filter.step(1.0) >= fraction)
        .expect("filter never reached the target")
}

#[test]
fn light_profile_reaches_four_nines_29_steps_after_the_first_sample() {
    let sample = samples_to_reach(1, 0.9999);
    assert_eq!(sample, 30);
    assert_eq!(sample - 1, 29);
}

#[test]
fn step_response_matches_documented_table() {
    let table: [(u8, [usize; 4]); 3] = [
        (1, [4, 10, 18, 30]),
        (2, [17, 49, 85, 148]),
        (3, [159, 478, 844, 1467]),
    ];
    let levels = [0.63, 0.95, 0.995, 0.9999];
    for (strength, expected) in table {
        let measured = levels.map(|level| samples_to_reach(strength, level));
        assert_eq!(measured, expected, "strength={strength}");
    }
}

#[test]
fn heavier_profiles_settle_slower() {
    let settling: Vec<usize> = (1..=4).map(|s| samples_to_reach(s, 0.95)).collect();
    assert!(settling.windows(2).all(|pair| pair[0] < pair[1]), "{settling:?}");
    assert_eq!(settling[3], 4769);
}

#[test]
fn constant_input_converges_to_itself() {
    for strength in 1..=4 {
        let mut filter = StrengthFilter::new(strength);
        filter.step(0.0);
        let mut output = 0.0;
        for _ in 0..20_000 {
            output = filter.step(2.5);
        }
        assert!((output - 2.5).abs() < 1e-3, "strength={strength}: {output}");
    }
}

#[test]
fn steady_signal_stays_steady() {
    for strength in 1..=4 {
        let mut filter = StrengthFilter::new(strength);
        for _ in 0..1_000 {
            let output = filter.step(0.8);
            assert!((output - 0.8).abs() < 1e-3, "strength={strength}: {output}");
        }
    }
}

#[test]
fn attenuates_alternating_noise() {
    let mut filter = StrengthFilter::new(2);
    filter.step(0.5);
    let mut output = 0.5;
    for i in 0..1_000 {
        let noise = if i % 2 == 0 { 0.1 } else { -0.1 };
        output = filter.step(0.5 + noise);
    }
    assert!((output - 0.5).abs() < 0.01, "{output}");
}

#[test]
fn strength_change_mid_stream_behaves_like_a_new_filter() {
    let mut switched = StrengthFilter::new(1);
    for _ in 0..50 {
        switched.step(3.0);
    }

    switched.set_strength(Strength::Heavy.into());

    let mut fresh = StrengthFilter::new(Strength::Heavy.into());
    for x in [-1.0, 4.0, 0.25, 7.0] {
        assert_eq!(switched.step(x), fresh.step(x));
    }
}
