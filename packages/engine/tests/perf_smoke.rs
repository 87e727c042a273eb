use dicethrow_engine::DiceWorld;

#[test]
fn perf_smoke_step() {
    let mut world = match DiceWorld::new(0.0, 200.0, 0.0, 100.0, 0.0, 200.0, 10.0, 10.0) {
        Ok(world) => world,
        Err(_) => panic!("valid scene rejected"),
    };
    world.enable_perf_metrics(true);
    if world.init_position(100.0, 80.0, 100.0).is_err() {
        panic!("finite position rejected");
    }
    world.throw_random();

    while world.tick(1.0) {}

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.total_step_ms() >= stats.step_ms());
    assert_eq!(u64::from(stats.frame()), world.frame());
    assert!(world.is_stopped());
    assert_eq!(world.lifecycle(), 2);
    assert_eq!(world.y(), 5.0);
}
