use super::*;
use crate::domain::{DiceParams, PlayVolume};

fn scenario_core() -> SimulationCore {
    let volume = PlayVolume::new(0.0, 200.0, 0.0, 100.0, 0.0, 200.0).unwrap();
    SimulationCore::new(SceneConfig::new(volume, 10.0, 10.0)).unwrap()
}

#[test]
fn new_core_starts_at_frame_zero_with_pose_buffer_filled() {
    let mut core = scenario_core();
    assert_eq!(core.frame(), 0);
    assert_eq!(core.lifecycle(), Lifecycle::Flying);

    core.init_position(1.0, 2.0, 3.0).unwrap();
    assert_eq!(&core.pose_buffer()[..3], &[1.0, 2.0, 3.0]);
    assert_eq!(core.pose_buffer()[6], 0.0);
    assert_eq!(core.pose_len(), POSE_LEN);
}

#[test]
fn invalid_config_is_rejected_before_anything_is_built() {
    let config = SceneConfig { size: 0.0, ..SceneConfig::default() };
    assert!(matches!(
        SimulationCore::new(config),
        Err(DiceError::InvalidDimension { field: "size", .. })
    ));

    let config = SceneConfig {
        params: DiceParams { min_dt: -1.0, ..DiceParams::default() },
        ..SceneConfig::default()
    };
    assert!(SimulationCore::new(config).is_err());
}

#[test]
fn step_counts_frames_and_refreshes_pose() {
    let mut core = scenario_core();
    core.init_position(100.0, 50.0, 100.0).unwrap();
    core.throw(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.1, 0.0)).unwrap();

    core.step(1.0);
    core.step(1.0);

    assert_eq!(core.frame(), 2);
    let pose = core.pose();
    assert_eq!(pose.position, core.position());
    assert_eq!(pose.frame, 2);
    assert_eq!(core.pose_buffer()[0], core.position().x);
    assert_eq!(core.pose_buffer()[4], core.orientation().y);
}

#[test]
fn frame_cap_halts_ticking() {
    let mut core = scenario_core();
    core.init_position(100.0, 90.0, 100.0).unwrap();
    core.throw(Vec3::zero(), Vec3::new(0.05, 0.0, 0.0)).unwrap();
    core.set_frame_cap(10);

    let mut ticks = 0;
    while core.tick(1.0) {
        ticks += 1;
    }
    assert_eq!(core.frame(), 10);
    assert_eq!(ticks, 9);
    assert!(!core.is_running());
    assert!(!core.tick(1.0));
    assert_eq!(core.frame(), 10);
    assert_eq!(core.lifecycle(), Lifecycle::Flying);
}

#[test]
fn rethrow_resets_frame_counter() {
    let mut core = scenario_core();
    core.init_position(100.0, 50.0, 100.0).unwrap();
    core.throw(Vec3::zero(), Vec3::zero()).unwrap();
    core.run_to_rest(1.0);
    assert!(core.frame() > 0);

    core.throw(Vec3::new(0.0, 20.0, 0.0), Vec3::zero()).unwrap();
    assert_eq!(core.frame(), 0);
    assert!(core.is_running());
}

#[test]
fn random_throws_are_reproducible_per_seed() {
    let mut a = scenario_core();
    let mut b = scenario_core();
    a.set_seed(42);
    b.set_seed(42);

    let throw_a = a.throw_random();
    let throw_b = b.throw_random();
    assert_eq!(throw_a, throw_b);
    assert_eq!(a.body().applied_impulse, throw_a.0);
    assert_eq!(a.angular_rate(), throw_a.1);

    b.set_seed(43);
    assert_ne!(b.throw_random(), throw_a);
}

#[test]
fn perf_metrics_count_events_only_when_enabled() {
    let mut core = scenario_core();
    core.init_position(100.0, 50.0, 100.0).unwrap();
    core.throw(Vec3::zero(), Vec3::zero()).unwrap();

    core.step(1.0);
    assert_eq!(core.get_perf_stats().steps(), 0);

    core.enable_perf_metrics(true);
    core.run_to_rest(1.0);
    let stats = core.get_perf_stats();
    assert!(stats.steps() > 0);
    assert!(stats.bounces() > 0);
    assert!(stats.rolling_frames() > 0);
    assert!(stats.last_impact_speed() > 0.0);
    assert!(stats.step_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats().steps(), 0);
}

#[test]
fn last_events_track_most_recent_step() {
    let mut core = scenario_core();
    core.init_position(195.0, 50.0, 100.0).unwrap();
    core.throw(Vec3::new(50.0, 0.0, 0.0), Vec3::zero()).unwrap();

    let events = core.step(1.0);
    assert!(events.border_x);
    assert_eq!(core.last_events(), events);
}
