use game_ai::{AdaptiveConfig, AdaptiveState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn difficulty_never_leaves_bounds() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let lo = rng.gen_range(0.0..0.5);
        let hi = rng.gen_range(lo..=1.0);
        let config = AdaptiveConfig {
            window_size: rng.gen_range(1..20),
            target_success_rate: rng.gen_range(0.0..=1.0),
            adjustment_rate: rng.gen_range(0.0..=0.5),
            min_difficulty: lo,
            max_difficulty: hi,
            initial_difficulty: rng.gen_range(0.0..=1.0),
        };
        let mut adaptive = AdaptiveState::new(config).unwrap();
        let mut now = 0.0;

        for _ in 0..200 {
            if rng.gen_bool(0.5) {
                adaptive.record_success();
            } else {
                now += rng.gen_range(0.0..20.0);
                adaptive.record_failure(now);
            }
            let d = adaptive.current_difficulty();
            assert!((lo..=hi).contains(&d), "{d} outside [{lo}, {hi}]");
            assert!((0.0..=1.0).contains(&adaptive.skill_estimate()));
        }
    }
}

#[test]
fn losing_streak_eases_off_faster_than_slow_losses() {
    let mut streak = AdaptiveState::new(AdaptiveConfig::default()).unwrap();
    let mut spaced = AdaptiveState::new(AdaptiveConfig::default()).unwrap();

    for i in 0..4u32 {
        streak.record_failure(f64::from(i));
        spaced.record_failure(f64::from(i) * 60.0);
    }
    assert!(streak.current_difficulty() < spaced.current_difficulty());
}

#[test]
fn adapted_values_track_difficulty() {
    let mut adaptive = AdaptiveState::new(AdaptiveConfig::default()).unwrap();
    let base_speed = 120.0;
    let before = adaptive.adapted_value(base_speed, 0.5);
    for _ in 0..5 {
        adaptive.record_success();
    }
    assert!(adaptive.adapted_value(base_speed, 0.5) > before);
}
